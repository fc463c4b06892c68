//! Neighbourhood to texture index classification
//!
//! Four mutually exclusive cases, tested in order:
//!
//! 1. No corner is crossing: the four side bits alone select the picture.
//! 2. Three sides occupied: the gap plus the enclosure of the two corners
//!    facing away from it.
//! 3. Two adjacent sides around a single crossing corner.
//! 4. Every corner enclosed or crossing: one enclosure bit per corner.
//!
//! Any crossing corner needs its two sides occupied, so a tile that misses
//! case 1 has two adjacent sides (case 3), three sides (case 2) or four
//! sides (case 4). Falling through all four is reported as an invariant
//! violation rather than mapped to a default index.

use log::trace;

use crate::codec::configuration::{Configuration, TextureIndex};
use crate::codec::occupancy::{NeighborOccupancy, Neighborhood};
use crate::codec::slice::{CornerSlices, SliceId};
use crate::io::error::{Result, TileError};
use crate::spatial::direction::Side;

/// Classify a cell's neighbourhood into its tagged configuration
///
/// The host is sampled once per direction before any case is evaluated.
///
/// # Errors
///
/// Returns `EncoderInvariantViolation` if no case matches.
pub fn classify(occupancy: &impl NeighborOccupancy) -> Result<Configuration> {
    let neighborhood = Neighborhood::sample(occupancy);
    let corners = CornerSlices::classify(&neighborhood);
    let lateral = neighborhood.lateral_count();
    let crossings = corners.count(SliceId::Crossing);

    trace!(
        "classifying {neighborhood}: {lateral} lateral, {} diagonal, {crossings} crossing",
        neighborhood.diagonal_count()
    );

    let has = |side: Side| neighborhood.occupied(side.compass());

    if crossings == 0 {
        return Ok(Configuration::Lateral {
            top: has(Side::Top),
            right: has(Side::Right),
            bottom: has(Side::Bottom),
            left: has(Side::Left),
        });
    }

    if lateral == 3 {
        let missing = Side::ALL.into_iter().find(|&side| !has(side));
        if let Some(missing) = missing {
            let gap = missing.compass();
            return Ok(Configuration::ThreeLateral {
                missing,
                ccw_enclosed: neighborhood.occupied(gap.rotate(-3)),
                cw_enclosed: neighborhood.occupied(gap.rotate(3)),
            });
        }
    }

    if lateral == 2 && crossings == 1 {
        let crossing = corners.find(SliceId::Crossing);
        if let Some(crossing) = crossing {
            return Ok(Configuration::BentPath { crossing });
        }
    }

    if corners.iter().all(|(_, slice)| slice.is_interior()) {
        return Ok(Configuration::Interior {
            top_right: corners.top_right == SliceId::FullyEnclosed,
            bottom_right: corners.bottom_right == SliceId::FullyEnclosed,
            bottom_left: corners.bottom_left == SliceId::FullyEnclosed,
            top_left: corners.top_left == SliceId::FullyEnclosed,
        });
    }

    Err(TileError::EncoderInvariantViolation {
        neighborhood: neighborhood.bits(),
    })
}

/// Classify a cell's neighbourhood straight to its texture index
///
/// # Errors
///
/// Returns `EncoderInvariantViolation` if no case matches, or `DecoderRange`
/// if classification produced the redundant interior index.
pub fn encode(occupancy: &impl NeighborOccupancy) -> Result<TextureIndex> {
    classify(occupancy)?.index()
}
