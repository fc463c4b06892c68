//! Tests for codec constants and runtime defaults

#[cfg(test)]
mod tests {
    use blobtile::io::configuration::{
        DEFAULT_DENSITY, DEFAULT_OUTPUT_DIR, MASK_ALPHA_THRESHOLD, MAX_GRID_DIMENSION,
        PROGRESS_BAR_WIDTH, QUADRANT_FRACTION, REDUNDANT_INTERIOR_INDEX, TEXTURE_COUNT,
    };

    // Tests the texture space size
    // Verified by changing the count to 48
    #[test]
    fn test_texture_count() {
        assert_eq!(TEXTURE_COUNT, 47);
    }

    // Tests the redundant index sits just past the valid range
    // Verified by moving it inside the range
    #[test]
    fn test_redundant_index_outside_range() {
        assert_eq!(REDUNDANT_INTERIOR_INDEX, TEXTURE_COUNT);
    }

    // Tests quadrants split sources in half
    // Verified by changing the fraction
    #[test]
    fn test_quadrant_fraction() {
        assert!((QUADRANT_FRACTION - 0.5).abs() < f32::EPSILON);
    }

    // Tests defaults are usable values
    // Verified by setting density above one
    #[test]
    fn test_defaults() {
        assert!((0.0..=1.0).contains(&DEFAULT_DENSITY));
        assert!(MASK_ALPHA_THRESHOLD > 0);
        assert!(!DEFAULT_OUTPUT_DIR.is_empty());
    }

    // Tests maximum grid dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests progress bar width
    // Verified by changing width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
