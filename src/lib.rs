//! 47-tile ("blob") autotiling: neighbour classification and tile synthesis
//!
//! A painted cell looks at which of its eight neighbours share its tile
//! class and reduces that pattern to one of 47 texture indices. The same
//! index decodes back to the shape of each of the tile's four quadrants,
//! which is enough to cut a complete tileset out of five source images.

#![forbid(unsafe_code)]

/// Neighbour classification codec: encoding, decoding and slice ids
pub mod codec;
/// Tile texture composition from source images
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Compass algebra and the host tile grid
pub mod spatial;

pub use codec::{Configuration, SliceId, TextureIndex, decode, encode};
pub use io::error::{Result, TileError};
