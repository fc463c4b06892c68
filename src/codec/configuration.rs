//! Texture indices and the four-case tile configuration they encode
//!
//! Index layout, bit-exact with externally named artwork:
//!
//! ```text
//!  0..=15   lateral       8·left + 4·bottom + 2·right + top
//! 16..=27   three-lateral 16 + 8·ccw + 4·cw + side code of the gap
//! 28..=31   bent path     28 + corner code of the crossing corner
//! 32..=46   interior      32 + 8·TL + 4·BL + 2·BR + TR   (1 = enclosed)
//! ```
//!
//! The three-lateral and bent-path ranges share the `16..=31` block: a
//! three-lateral tile never has both `ccw` and `cw` enclosed (that tile has
//! no crossing corner and is lateral), which frees `28..=31`. Interior index
//! 47 would describe four enclosed corners, the same picture as lateral 15,
//! and is not a valid index.

use std::fmt;

use crate::codec::slice::{CornerSlices, SliceId};
use crate::io::configuration::TEXTURE_COUNT;
use crate::io::error::{Result, TileError};
use crate::spatial::direction::{Corner, Side};

const THREE_LATERAL_BASE: u8 = 0b01_0000;
const BENT_PATH_BASE: u8 = 0b01_1100;
const INTERIOR_BASE: u8 = 0b10_0000;

/// Identifier of one of the 47 canonical tile pictures, in `0..=46`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureIndex(u8);

impl TextureIndex {
    /// Validate a raw index
    ///
    /// # Errors
    ///
    /// Returns `DecoderRange` when `value` is 47 or more.
    pub const fn new(value: u8) -> Result<Self> {
        if value < TEXTURE_COUNT {
            Ok(Self(value))
        } else {
            Err(TileError::DecoderRange { index: value })
        }
    }

    /// Raw index value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every valid index in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TEXTURE_COUNT).map(Self)
    }
}

impl TryFrom<u8> for TextureIndex {
    type Error = TileError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TextureIndex> for u8 {
    fn from(index: TextureIndex) -> Self {
        index.0
    }
}

impl fmt::Display for TextureIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The visual configuration of a tile, tagged by classification case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// No crossing corner: only the four sides matter
    Lateral {
        /// Top side occupied
        top: bool,
        /// Right side occupied
        right: bool,
        /// Bottom side occupied
        bottom: bool,
        /// Left side occupied
        left: bool,
    },
    /// Exactly one side empty, with at least one crossing corner
    ThreeLateral {
        /// The empty side
        missing: Side,
        /// Corner three steps counterclockwise of the gap is enclosed
        ccw_enclosed: bool,
        /// Corner three steps clockwise of the gap is enclosed
        cw_enclosed: bool,
    },
    /// Two adjacent sides occupied with an empty diagonal between them
    BentPath {
        /// The crossing corner between the two occupied sides
        crossing: Corner,
    },
    /// All sides occupied and at least one crossing corner
    Interior {
        /// Top right corner enclosed, otherwise crossing
        top_right: bool,
        /// Bottom right corner enclosed, otherwise crossing
        bottom_right: bool,
        /// Bottom left corner enclosed, otherwise crossing
        bottom_left: bool,
        /// Top left corner enclosed, otherwise crossing
        top_left: bool,
    },
}

impl Configuration {
    /// Pack into the flat texture index
    ///
    /// # Errors
    ///
    /// Returns `DecoderRange` for an `Interior` with all four corners
    /// enclosed, the redundant index 47.
    pub fn index(self) -> Result<TextureIndex> {
        let value = match self {
            Self::Lateral {
                top,
                right,
                bottom,
                left,
            } => pack([left, bottom, right, top]),
            Self::ThreeLateral {
                missing,
                ccw_enclosed,
                cw_enclosed,
            } => {
                THREE_LATERAL_BASE
                    | pack([ccw_enclosed, cw_enclosed, false, false])
                    | missing.code()
            }
            Self::BentPath { crossing } => BENT_PATH_BASE | crossing.code(),
            Self::Interior {
                top_right,
                bottom_right,
                bottom_left,
                top_left,
            } => INTERIOR_BASE | pack([top_left, bottom_left, bottom_right, top_right]),
        };
        TextureIndex::new(value)
    }

    /// Unpack a texture index, dispatching on its top two bits
    pub const fn from_index(index: TextureIndex) -> Self {
        let value = index.value();
        match value >> 4 {
            0 => Self::Lateral {
                top: flag(value, 0),
                right: flag(value, 1),
                bottom: flag(value, 2),
                left: flag(value, 3),
            },
            1 if flag(value, 3) && flag(value, 2) => Self::BentPath {
                crossing: Corner::from_code(value),
            },
            1 => Self::ThreeLateral {
                missing: Side::from_code(value),
                ccw_enclosed: flag(value, 3),
                cw_enclosed: flag(value, 2),
            },
            _ => Self::Interior {
                top_right: flag(value, 0),
                bottom_right: flag(value, 1),
                bottom_left: flag(value, 2),
                top_left: flag(value, 3),
            },
        }
    }

    /// Slice id of one corner of this configuration
    pub const fn slice(self, corner: Corner) -> SliceId {
        match self {
            Self::Lateral { .. } => {
                let counterclockwise = self.side_occupied(corner.counterclockwise_side());
                let clockwise = self.side_occupied(corner.clockwise_side());
                SliceId::from_window(counterclockwise, true, clockwise)
            }
            Self::ThreeLateral {
                missing,
                ccw_enclosed,
                cw_enclosed,
            } => match missing.compass().angular_distance(corner.compass()) {
                -3 => enclosed_or_crossing(ccw_enclosed),
                -1 => SliceId::EdgeFromCounterclockwise,
                1 => SliceId::EdgeFromClockwise,
                _ => enclosed_or_crossing(cw_enclosed),
            },
            Self::BentPath { crossing } => {
                match crossing.compass().angular_distance(corner.compass()) {
                    0 => SliceId::Crossing,
                    -2 => SliceId::EdgeFromClockwise,
                    2 => SliceId::EdgeFromCounterclockwise,
                    _ => SliceId::Isolated,
                }
            }
            Self::Interior {
                top_right,
                bottom_right,
                bottom_left,
                top_left,
            } => enclosed_or_crossing(match corner {
                Corner::TopRight => top_right,
                Corner::BottomRight => bottom_right,
                Corner::BottomLeft => bottom_left,
                Corner::TopLeft => top_left,
            }),
        }
    }

    /// Slice ids of all four corners
    pub fn corners(self) -> CornerSlices {
        CornerSlices::from_fn(|corner| self.slice(corner))
    }

    /// Whether a side holds a neighbour in this configuration
    pub const fn side_occupied(self, side: Side) -> bool {
        match self {
            Self::Lateral {
                top,
                right,
                bottom,
                left,
            } => match side {
                Side::Top => top,
                Side::Right => right,
                Side::Bottom => bottom,
                Side::Left => left,
            },
            Self::ThreeLateral { missing, .. } => missing.code() != side.code(),
            Self::BentPath { crossing } => {
                crossing.counterclockwise_side().code() == side.code()
                    || crossing.clockwise_side().code() == side.code()
            }
            Self::Interior { .. } => true,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lateral { .. } => f.write_str("lateral")?,
            Self::ThreeLateral { missing, .. } => write!(f, "three-lateral (gap {missing:?})")?,
            Self::BentPath { crossing } => write!(f, "bent path (crossing {crossing})")?,
            Self::Interior { .. } => f.write_str("interior")?,
        }
        let corners = self.corners();
        for (corner, slice) in corners.iter() {
            write!(f, "; {corner}: {slice}")?;
        }
        Ok(())
    }
}

// Most significant flag first, into the low four bits
const fn pack(flags: [bool; 4]) -> u8 {
    let [b3, b2, b1, b0] = flags;
    (b3 as u8) << 3 | (b2 as u8) << 2 | (b1 as u8) << 1 | b0 as u8
}

const fn flag(value: u8, position: u8) -> bool {
    value & (1 << position) != 0
}

const fn enclosed_or_crossing(enclosed: bool) -> SliceId {
    if enclosed {
        SliceId::FullyEnclosed
    } else {
        SliceId::Crossing
    }
}
