//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The compass algebra over a cell's eight neighbours
//! - The host tile grid and its same-class occupancy views

/// Compass points, sides, corners and aggregate directions
pub mod direction;
/// Tile grid storage and neighbour queries
pub mod grid;

pub use direction::{Aggregate, Axis, Compass, Corner, Direction, Side};
pub use grid::{CellNeighbors, TileClass, TileGrid};
