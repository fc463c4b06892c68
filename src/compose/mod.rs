//! Tile texture synthesis from five source images

/// Source images and the choice of source per corner slice
pub mod source;
/// Quadrant cropping, merging and whole-tileset generation
pub mod texture;

pub use source::{SourceImages, SourceKind};
pub use texture::{compose_index, compose_tile, generate_tileset};
