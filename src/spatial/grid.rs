//! Host tile grid with same-class neighbour queries
//!
//! Cells hold an optional tile class. Positions are `[row, col]` in `i32` so
//! neighbour arithmetic can step off the edge; anything outside the grid
//! reads as empty. Occupancy views borrow the grid, so a classification
//! always sees one snapshot: the grid cannot be painted while a view lives.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec::configuration::TextureIndex;
use crate::codec::encoder::encode;
use crate::codec::occupancy::NeighborOccupancy;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::Compass;

/// Equivalence tag shared by tiles that visually connect to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileClass(pub u32);

/// Rectangular grid of optionally painted cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<Option<TileClass>>,
}

impl TileGrid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            cells: Array2::from_elem((rows, cols), None),
        })
    }

    /// Wrap an existing cell array
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn from_cells(cells: Array2<Option<TileClass>>) -> Result<Self> {
        validate_dimensions(cells.nrows(), cells.ncols())?;
        Ok(Self { cells })
    }

    /// Create a grid of one class where each cell is painted with probability `density`
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension exceeds `MAX_GRID_DIMENSION` or the
    /// density is not a probability
    pub fn scatter(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        if !(0.0..=1.0).contains(&density) {
            return Err(invalid_parameter(
                "density",
                &density,
                &"must be between 0 and 1",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let cells = Array2::from_shape_simple_fn((rows, cols), || {
            rng.random_bool(density).then_some(TileClass(0))
        });
        Ok(Self { cells })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<Option<TileClass>> {
        &self.cells
    }

    /// Whether a position lies inside the grid
    pub fn contains(&self, position: [i32; 2]) -> bool {
        self.array_index(position).is_some()
    }

    /// Class painted at a position; empty outside the grid
    pub fn get(&self, position: [i32; 2]) -> Option<TileClass> {
        self.array_index(position)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Paint (or with `None`, erase) a cell
    ///
    /// Returns the refresh region: positions in the surrounding 3x3 window,
    /// the cell itself included, that hold the old or the new class and whose
    /// texture index may therefore have changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the position lies outside the grid
    pub fn paint(
        &mut self,
        position: [i32; 2],
        class: Option<TileClass>,
    ) -> Result<Vec<[i32; 2]>> {
        let slot = self
            .array_index(position)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or_else(|| {
                invalid_parameter("position", &format!("{position:?}"), &"outside the grid")
            })?;
        let previous = std::mem::replace(slot, class);

        let mut region = self.refresh_region(position, previous);
        region.extend(self.refresh_region(position, class));
        region.sort_unstable();
        region.dedup();
        Ok(region)
    }

    /// Positions in the 3x3 window around `position` painted with `class`
    pub fn refresh_region(&self, position: [i32; 2], class: Option<TileClass>) -> Vec<[i32; 2]> {
        let Some(class) = class else {
            return Vec::new();
        };
        std::iter::once([0, 0])
            .chain(Compass::ALL.into_iter().map(Compass::offset))
            .filter_map(|offset| step(position, offset))
            .filter(|&cell| self.get(cell) == Some(class))
            .collect()
    }

    /// Occupancy view for the cell at `position`, if it is painted
    pub fn neighbors(&self, position: [i32; 2]) -> Option<CellNeighbors<'_>> {
        self.get(position).map(|class| CellNeighbors {
            grid: self,
            position,
            class,
        })
    }

    /// Texture index of the cell at `position`, `None` for empty cells
    ///
    /// # Errors
    ///
    /// Propagates encoder failures
    pub fn texture_index(&self, position: [i32; 2]) -> Result<Option<TextureIndex>> {
        self.neighbors(position)
            .map(|view| encode(&view))
            .transpose()
    }

    /// Texture index of every cell
    ///
    /// # Errors
    ///
    /// Propagates encoder failures
    pub fn texture_indices(&self) -> Result<Array2<Option<TextureIndex>>> {
        let mut indices = Array2::from_elem(self.cells.dim(), None);
        for ((row, col), slot) in indices.indexed_iter_mut() {
            *slot = self.texture_index([row as i32, col as i32])?;
        }
        Ok(indices)
    }

    fn array_index(&self, position: [i32; 2]) -> Option<[usize; 2]> {
        let row = usize::try_from(position[0]).ok()?;
        let col = usize::try_from(position[1]).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }
}

/// Same-class occupancy around one painted cell
#[derive(Debug, Clone, Copy)]
pub struct CellNeighbors<'a> {
    grid: &'a TileGrid,
    position: [i32; 2],
    class: TileClass,
}

impl CellNeighbors<'_> {
    /// Class of the centre cell
    pub const fn class(&self) -> TileClass {
        self.class
    }
}

impl NeighborOccupancy for CellNeighbors<'_> {
    fn occupied(&self, direction: Compass) -> bool {
        step(self.position, direction.offset())
            .is_some_and(|cell| self.grid.get(cell) == Some(self.class))
    }
}

// Positions past the i32 range are off the grid
fn step(position: [i32; 2], [row, col]: [i32; 2]) -> Option<[i32; 2]> {
    Some([position[0].checked_add(row)?, position[1].checked_add(col)?])
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    for (parameter, value) in [("rows", rows), ("cols", cols)] {
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
