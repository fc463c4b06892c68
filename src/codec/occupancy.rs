//! Neighbour occupancy queries and the eight-bit neighbourhood snapshot

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::direction::{Compass, Corner, Side};

/// Read-only view of which neighbours of a cell share its tile class
///
/// Implemented by host grids. A single classification samples each of the
/// eight directions exactly once through [`Neighborhood::sample`].
pub trait NeighborOccupancy {
    /// Whether the neighbour in `direction` holds a tile of the same class
    fn occupied(&self, direction: Compass) -> bool;
}

/// Occupancy of all eight neighbours, bit `i` set for compass point `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Neighborhood {
    bits: u8,
}

impl Neighborhood {
    /// No neighbours occupied
    pub const EMPTY: Self = Self { bits: 0 };

    /// Every neighbour occupied
    pub const FULL: Self = Self { bits: u8::MAX };

    /// Build from a raw bit pattern
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Raw bit pattern
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Take a snapshot of a host's occupancy, querying each direction once
    pub fn sample(occupancy: &impl NeighborOccupancy) -> Self {
        Compass::ALL
            .into_iter()
            .fold(Self::EMPTY, |snapshot, direction| {
                snapshot.with(direction, occupancy.occupied(direction))
            })
    }

    /// Neighbourhood with exactly the given directions occupied
    pub fn from_directions(directions: &[Compass]) -> Self {
        directions
            .iter()
            .fold(Self::EMPTY, |snapshot, &direction| snapshot.with(direction, true))
    }

    /// Copy with one direction set or cleared
    #[must_use]
    pub fn with(mut self, direction: Compass, occupied: bool) -> Self {
        self.bits
            .view_bits_mut::<Lsb0>()
            .set(usize::from(direction.index()), occupied);
        self
    }

    /// Every one of the 256 possible neighbourhoods, in bit-pattern order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self::from_bits)
    }

    /// Number of occupied sides (0 to 4)
    pub fn lateral_count(self) -> usize {
        Side::ALL
            .into_iter()
            .filter(|side| self.occupied(side.compass()))
            .count()
    }

    /// Number of occupied corners (0 to 4)
    pub fn diagonal_count(self) -> usize {
        Corner::ALL
            .into_iter()
            .filter(|corner| self.occupied(corner.compass()))
            .count()
    }

    /// Total number of occupied neighbours
    pub fn count(self) -> usize {
        self.bits.view_bits::<Lsb0>().count_ones()
    }
}

impl NeighborOccupancy for Neighborhood {
    fn occupied(&self, direction: Compass) -> bool {
        self.bits
            .view_bits::<Lsb0>()
            .get(usize::from(direction.index()))
            .as_deref()
            == Some(&true)
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |direction| if self.occupied(direction) { '#' } else { '.' };
        write!(
            f,
            "{}{}{}/{}x{}/{}{}{}",
            mark(Compass::TopLeft),
            mark(Compass::Top),
            mark(Compass::TopRight),
            mark(Compass::Left),
            mark(Compass::Right),
            mark(Compass::BottomLeft),
            mark(Compass::Bottom),
            mark(Compass::BottomRight),
        )
    }
}
