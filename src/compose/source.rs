//! The five source images a tileset is cut from

use image::RgbaImage;

use crate::codec::slice::SliceId;
use crate::io::error::{Result, TileError};
use crate::spatial::direction::{Corner, Side};

/// Which source image a quadrant is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A tile with no neighbours
    Isolated,
    /// A tile with all eight neighbours
    Surrounded,
    /// A strip running left to right
    HorizontalEdge,
    /// A strip running top to bottom
    VerticalEdge,
    /// A plus-shaped junction with empty diagonals
    Crossing,
}

impl SourceKind {
    /// All source kinds
    pub const ALL: [Self; 5] = [
        Self::Isolated,
        Self::Surrounded,
        Self::HorizontalEdge,
        Self::VerticalEdge,
        Self::Crossing,
    ];

    /// Source for one corner's slice
    ///
    /// An edge slice has a single occupied side; the strip running toward
    /// that side supplies the artwork.
    pub const fn for_slice(slice: SliceId, corner: Corner) -> Self {
        match slice {
            SliceId::Isolated => Self::Isolated,
            SliceId::FullyEnclosed => Self::Surrounded,
            SliceId::Crossing => Self::Crossing,
            SliceId::EdgeFromClockwise => Self::strip_toward(corner.clockwise_side()),
            SliceId::EdgeFromCounterclockwise => {
                Self::strip_toward(corner.counterclockwise_side())
            }
        }
    }

    const fn strip_toward(side: Side) -> Self {
        match side {
            Side::Top | Side::Bottom => Self::VerticalEdge,
            Side::Left | Side::Right => Self::HorizontalEdge,
        }
    }
}

/// Source artwork for one tileset, all images the same size
#[derive(Debug, Clone)]
pub struct SourceImages {
    isolated: RgbaImage,
    surrounded: RgbaImage,
    horizontal_edge: RgbaImage,
    vertical_edge: RgbaImage,
    crossing: RgbaImage,
}

impl SourceImages {
    /// Bundle the five source images
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if any image is empty or the sizes differ
    pub fn new(
        isolated: RgbaImage,
        surrounded: RgbaImage,
        horizontal_edge: RgbaImage,
        vertical_edge: RgbaImage,
        crossing: RgbaImage,
    ) -> Result<Self> {
        let sources = Self {
            isolated,
            surrounded,
            horizontal_edge,
            vertical_edge,
            crossing,
        };

        let (width, height) = sources.dimensions();
        if width < 2 || height < 2 {
            return Err(TileError::InvalidSourceData {
                reason: format!("source images must be at least 2x2, got {width}x{height}"),
            });
        }
        for kind in SourceKind::ALL {
            let dimensions = sources.get(kind).dimensions();
            if dimensions != (width, height) {
                return Err(TileError::InvalidSourceData {
                    reason: format!(
                        "{kind:?} image is {}x{}, expected {width}x{height}",
                        dimensions.0, dimensions.1
                    ),
                });
            }
        }

        Ok(sources)
    }

    /// Image for one source kind
    pub const fn get(&self, kind: SourceKind) -> &RgbaImage {
        match kind {
            SourceKind::Isolated => &self.isolated,
            SourceKind::Surrounded => &self.surrounded,
            SourceKind::HorizontalEdge => &self.horizontal_edge,
            SourceKind::VerticalEdge => &self.vertical_edge,
            SourceKind::Crossing => &self.crossing,
        }
    }

    /// Shared `(width, height)` of the sources
    pub fn dimensions(&self) -> (u32, u32) {
        self.isolated.dimensions()
    }
}
