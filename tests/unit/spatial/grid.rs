//! Tests for tile grid storage, painting and same-class neighbour queries

#[cfg(test)]
mod tests {
    use blobtile::TileError;
    use blobtile::codec::NeighborOccupancy;
    use blobtile::io::configuration::MAX_GRID_DIMENSION;
    use blobtile::spatial::{Compass, TileClass, TileGrid};
    use ndarray::Array2;

    const GRASS: TileClass = TileClass(0);
    const WATER: TileClass = TileClass(1);

    fn grid_from_rows(rows: &[&str]) -> TileGrid {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let cells = Array2::from_shape_fn((height, width), |(r, c)| {
            match rows.get(r).and_then(|row| row.as_bytes().get(c)) {
                Some(b'g') => Some(GRASS),
                Some(b'w') => Some(WATER),
                _ => None,
            }
        });
        TileGrid::from_cells(cells).unwrap()
    }

    // Tests new grids are empty with the requested shape
    // Verified by swapping rows and columns
    #[test]
    fn test_new_grid_is_empty() {
        let grid = TileGrid::new(3, 5).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert!(grid.cells().iter().all(Option::is_none));
    }

    // Tests oversized grids are rejected
    // Verified by removing dimension validation
    #[test]
    fn test_new_grid_rejects_large_dimensions() {
        let result = TileGrid::new(MAX_GRID_DIMENSION + 1, 1);
        assert!(matches!(
            result,
            Err(TileError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests positions outside the grid read as empty
    // Verified by clamping positions to the border
    #[test]
    fn test_out_of_bounds_is_empty() {
        let grid = grid_from_rows(&["gg", "gg"]);
        assert_eq!(grid.get([0, 0]), Some(GRASS));
        assert_eq!(grid.get([-1, 0]), None);
        assert_eq!(grid.get([0, 2]), None);
        assert!(grid.contains([1, 1]));
        assert!(!grid.contains([2, 1]));
    }

    // Tests occupancy only counts neighbours of the same class
    // Verified by treating any painted cell as occupied
    #[test]
    fn test_neighbors_match_class() {
        let grid = grid_from_rows(&["gwg", "ggw", "..g"]);
        let view = grid.neighbors([1, 1]).unwrap();

        assert_eq!(view.class(), GRASS);
        assert!(view.occupied(Compass::TopLeft));
        assert!(!view.occupied(Compass::Top));
        assert!(view.occupied(Compass::TopRight));
        assert!(!view.occupied(Compass::Right));
        assert!(view.occupied(Compass::BottomRight));
        assert!(!view.occupied(Compass::Bottom));
        assert!(view.occupied(Compass::Left));
        assert!(grid.neighbors([2, 0]).is_none());
    }

    // Tests texture indices of a small plus shape
    // Verified by reading occupancy with rows and columns swapped
    #[test]
    fn test_texture_indices() {
        let grid = grid_from_rows(&[".g.", "ggg", ".g."]);
        let indices = grid.texture_indices().unwrap();
        let value = |r: usize, c: usize| indices.get((r, c)).copied().flatten().map(u8::from);

        assert_eq!(value(0, 0), None);
        assert_eq!(value(0, 1), Some(4));
        assert_eq!(value(1, 0), Some(2));
        assert_eq!(value(1, 2), Some(8));
        assert_eq!(value(2, 1), Some(1));
        assert_eq!(value(1, 1), Some(32));
    }

    // Tests painting returns every same-class cell around the change
    // Verified by omitting the previous class from the region
    #[test]
    fn test_paint_refresh_region() {
        let mut grid = grid_from_rows(&["ggw", "g.w", "..."]);

        let region = grid.paint([1, 1], Some(GRASS)).unwrap();
        assert_eq!(region, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);

        let region = grid.paint([1, 1], Some(WATER)).unwrap();
        assert_eq!(
            region,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );

        let region = grid.paint([1, 1], None).unwrap();
        assert_eq!(region, vec![[0, 2], [1, 2]]);
        assert_eq!(grid.get([1, 1]), None);
    }

    // Tests painting outside the grid fails without changes
    // Verified by silently ignoring the position
    #[test]
    fn test_paint_out_of_bounds() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        assert!(grid.paint([2, 0], Some(GRASS)).is_err());
        assert!(grid.paint([0, -1], Some(GRASS)).is_err());
        assert!(grid.cells().iter().all(Option::is_none));
    }

    // Tests seeded scatter is reproducible and respects density bounds
    // Verified by seeding from entropy
    #[test]
    fn test_scatter() {
        let first = TileGrid::scatter(16, 16, 0.5, 7).unwrap();
        let second = TileGrid::scatter(16, 16, 0.5, 7).unwrap();
        assert_eq!(first, second);

        let full = TileGrid::scatter(4, 4, 1.0, 7).unwrap();
        assert!(full.cells().iter().all(|cell| *cell == Some(TileClass(0))));

        let empty = TileGrid::scatter(4, 4, 0.0, 7).unwrap();
        assert!(empty.cells().iter().all(Option::is_none));

        assert!(TileGrid::scatter(4, 4, 1.5, 7).is_err());
        assert!(TileGrid::scatter(4, 4, f64::NAN, 7).is_err());
    }

    // Tests wrapped cell arrays obey the same dimension limit as new grids
    // Verified by wrapping the array without validation
    #[test]
    fn test_from_cells_rejects_large_dimensions() {
        let cells = Array2::from_elem((1, MAX_GRID_DIMENSION + 1), None);
        assert!(matches!(
            TileGrid::from_cells(cells),
            Err(TileError::InvalidParameter {
                parameter: "cols",
                ..
            })
        ));
    }

    // Tests neighbour queries at the i32 extremes read as empty instead of overflowing
    // Verified by adding offsets without overflow checks
    #[test]
    fn test_extreme_positions_are_empty() {
        let grid = grid_from_rows(&["gg", "gg"]);
        for position in [[i32::MAX, 0], [0, i32::MAX], [i32::MIN, i32::MIN], [i32::MAX, i32::MIN]] {
            assert!(grid.refresh_region(position, Some(GRASS)).is_empty());
            assert!(grid.neighbors(position).is_none());
        }

        let view = grid.neighbors([0, 0]).unwrap();
        assert!(view.occupied(Compass::Right));
        assert!(!view.occupied(Compass::Top));
    }
}
