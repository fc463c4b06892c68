//! The 47-tile neighbour classification codec
//!
//! - Occupancy queries and neighbourhood snapshots
//! - Per-corner slice classification
//! - The tagged configuration and its flat texture index
//! - Encoding neighbourhoods and decoding indices back to slices

/// Texture index and four-case configuration types
pub mod configuration;
/// Texture index to corner slice decoding
pub mod decoder;
/// Neighbourhood to texture index encoding
pub mod encoder;
/// Neighbour occupancy trait and eight-bit snapshots
pub mod occupancy;
/// Corner slice classification
pub mod slice;

pub use configuration::{Configuration, TextureIndex};
pub use decoder::{decode, decode_corners, decode_value};
pub use encoder::{classify, encode};
pub use occupancy::{NeighborOccupancy, Neighborhood};
pub use slice::{CornerSlices, SliceId, classify_corner};
