//! Codec constants and runtime configuration defaults

/// Number of distinct texture indices, and of tiles in a generated tileset
pub const TEXTURE_COUNT: u8 = 47;

// All four corners enclosed: looks exactly like lateral index 15
/// Index the interior packing would give an all-enclosed tile; never emitted
pub const REDUNDANT_INTERIOR_INDEX: u8 = 47;

/// Fraction of a source image's width and height taken for one quadrant
pub const QUADRANT_FRACTION: f32 = 0.5;

/// Minimum alpha for a mask pixel to count as a painted cell
pub const MASK_ALPHA_THRESHOLD: u8 = 128;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible scattered grids
pub const DEFAULT_SEED: u64 = 42;

/// Default probability that a scattered cell is painted
pub const DEFAULT_DENSITY: f64 = 0.5;

// Output settings
/// Directory tiles are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "tiles";
/// Separator between the tileset name and the texture index in filenames
pub const TILE_NAME_SEPARATOR: &str = "_";
/// Extension of generated tile images
pub const TILE_EXTENSION: &str = "png";
/// Marker printed for empty cells in index grids
pub const EMPTY_CELL_MARKER: &str = ".";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
