//! Per-corner shape classification
//!
//! A corner's slice depends only on its own three-neighbour window: the side
//! one step counterclockwise, the diagonal itself, and the side one step
//! clockwise. The diagonal only matters when both sides are occupied.

use std::fmt;

use crate::codec::occupancy::NeighborOccupancy;
use crate::spatial::direction::Corner;

/// Local shape of one quadrant of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceId {
    /// Neither adjacent side occupied
    Isolated,
    /// Only the counterclockwise-adjacent side occupied
    EdgeFromCounterclockwise,
    /// Only the clockwise-adjacent side occupied
    EdgeFromClockwise,
    /// Both sides and the diagonal occupied
    FullyEnclosed,
    /// Both sides occupied, diagonal empty
    Crossing,
}

impl SliceId {
    /// All slice ids
    pub const ALL: [Self; 5] = [
        Self::Isolated,
        Self::EdgeFromCounterclockwise,
        Self::EdgeFromClockwise,
        Self::FullyEnclosed,
        Self::Crossing,
    ];

    /// Classify a three-neighbour window
    pub const fn from_window(counterclockwise: bool, diagonal: bool, clockwise: bool) -> Self {
        match (counterclockwise, clockwise) {
            (false, false) => Self::Isolated,
            (false, true) => Self::EdgeFromClockwise,
            (true, false) => Self::EdgeFromCounterclockwise,
            (true, true) if diagonal => Self::FullyEnclosed,
            (true, true) => Self::Crossing,
        }
    }

    /// Whether both adjacent sides are occupied
    pub const fn is_interior(self) -> bool {
        matches!(self, Self::FullyEnclosed | Self::Crossing)
    }
}

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Isolated => "isolated",
            Self::EdgeFromCounterclockwise => "edge (counterclockwise)",
            Self::EdgeFromClockwise => "edge (clockwise)",
            Self::FullyEnclosed => "enclosed",
            Self::Crossing => "crossing",
        };
        f.write_str(name)
    }
}

/// Classify one corner of a cell from its neighbours
pub fn classify_corner(occupancy: &impl NeighborOccupancy, corner: Corner) -> SliceId {
    SliceId::from_window(
        occupancy.occupied(corner.counterclockwise_side().compass()),
        occupancy.occupied(corner.compass()),
        occupancy.occupied(corner.clockwise_side().compass()),
    )
}

/// Slice id of each of the four corners of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerSlices {
    /// Upper right quadrant
    pub top_right: SliceId,
    /// Lower right quadrant
    pub bottom_right: SliceId,
    /// Lower left quadrant
    pub bottom_left: SliceId,
    /// Upper left quadrant
    pub top_left: SliceId,
}

impl CornerSlices {
    /// Build by evaluating `slice` once per corner
    pub fn from_fn(mut slice: impl FnMut(Corner) -> SliceId) -> Self {
        Self {
            top_right: slice(Corner::TopRight),
            bottom_right: slice(Corner::BottomRight),
            bottom_left: slice(Corner::BottomLeft),
            top_left: slice(Corner::TopLeft),
        }
    }

    /// Classify all four corners of a cell
    pub fn classify(occupancy: &impl NeighborOccupancy) -> Self {
        Self::from_fn(|corner| classify_corner(occupancy, corner))
    }

    /// Slice id of one corner
    pub const fn get(&self, corner: Corner) -> SliceId {
        match corner {
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::TopLeft => self.top_left,
        }
    }

    /// Corners paired with their slice ids, clockwise from the top right
    pub fn iter(&self) -> impl Iterator<Item = (Corner, SliceId)> + '_ {
        Corner::ALL.into_iter().map(|corner| (corner, self.get(corner)))
    }

    /// Number of corners with the given slice id
    pub fn count(&self, slice: SliceId) -> usize {
        self.iter().filter(|&(_, id)| id == slice).count()
    }

    /// First corner, clockwise from the top right, with the given slice id
    pub fn find(&self, slice: SliceId) -> Option<Corner> {
        self.iter()
            .find_map(|(corner, id)| (id == slice).then_some(corner))
    }
}
