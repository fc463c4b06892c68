//! Texture index to per-corner slice recovery, used to synthesise tiles

use crate::codec::configuration::{Configuration, TextureIndex};
use crate::codec::slice::{CornerSlices, SliceId};
use crate::io::error::Result;
use crate::spatial::direction::Corner;

/// Slice id one corner of the picture `index` needs
pub const fn decode(index: TextureIndex, corner: Corner) -> SliceId {
    Configuration::from_index(index).slice(corner)
}

/// Slice id for a raw, unvalidated index
///
/// # Errors
///
/// Returns `DecoderRange` when `value` is outside `0..=46`.
pub fn decode_value(value: u8, corner: Corner) -> Result<SliceId> {
    TextureIndex::new(value).map(|index| decode(index, corner))
}

/// Slice ids of all four corners of the picture `index`
pub fn decode_corners(index: TextureIndex) -> CornerSlices {
    Configuration::from_index(index).corners()
}
