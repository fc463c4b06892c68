//! Tests for region cropping, image merging and tile composition

#[cfg(test)]
mod tests {
    use blobtile::codec::{CornerSlices, SliceId, TextureIndex};
    use blobtile::compose::texture::{
        Region, crop, crop_quadrant, crop_region, merge, merge_quadrants,
    };
    use blobtile::compose::{SourceImages, compose_index, compose_tile, generate_tileset};
    use blobtile::spatial::{Aggregate, Compass, Corner, Direction, Side};
    use image::{Rgba, RgbaImage};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn sources() -> SourceImages {
        SourceImages::new(
            RgbaImage::from_pixel(4, 4, RED),
            RgbaImage::from_pixel(4, 4, GREEN),
            RgbaImage::from_pixel(4, 4, BLUE),
            RgbaImage::from_pixel(4, 4, WHITE),
            RgbaImage::from_pixel(4, 4, BLACK),
        )
        .unwrap()
    }

    fn region(x: u32, y: u32, width: u32, height: u32) -> Region {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    // Tests compass regions keep a fraction along each axis they point in
    // Verified by anchoring bottom regions at row zero
    #[test]
    fn test_compass_regions() {
        let crop_at = |d: Compass| crop_region(10, 6, Direction::Compass(d), 0.5).unwrap();
        assert_eq!(crop_at(Compass::Top), region(0, 0, 10, 3));
        assert_eq!(crop_at(Compass::BottomRight), region(5, 3, 5, 3));
        assert_eq!(crop_at(Compass::Left), region(0, 0, 5, 6));
        assert_eq!(crop_at(Compass::TopLeft), region(0, 0, 5, 3));
    }

    // Tests aggregate regions are centred bands or blocks
    // Verified by swapping the vertical and horizontal bands
    #[test]
    fn test_aggregate_regions() {
        assert_eq!(
            crop_region(10, 6, Direction::CENTER, 0.5).unwrap(),
            region(2, 1, 5, 3)
        );
        assert_eq!(
            crop_region(10, 6, Direction::Aggregate(Aggregate::Vertical), 0.5).unwrap(),
            region(2, 0, 5, 6)
        );
        assert_eq!(
            crop_region(10, 6, Direction::Aggregate(Aggregate::Horizontal), 0.5).unwrap(),
            region(0, 1, 10, 3)
        );
    }

    // Tests invalid fractions and directions are rejected
    // Verified by clamping the fraction
    #[test]
    fn test_invalid_regions() {
        assert!(crop_region(10, 10, Direction::CENTER, 0.0).is_err());
        assert!(crop_region(10, 10, Direction::CENTER, 1.5).is_err());
        assert!(crop_region(10, 10, Direction::CENTER, f32::NAN).is_err());
        assert!(crop_region(10, 10, Direction::Aggregate(Aggregate::Orthogonal), 0.5).is_err());
    }

    // Tests quadrants come from the matching part of the image
    // Verified by cropping the top left for every corner
    #[test]
    fn test_crop_quadrant() {
        let mut image = RgbaImage::from_pixel(4, 4, RED);
        image.put_pixel(3, 3, BLUE);

        let quadrant = crop_quadrant(&image, Corner::BottomRight).unwrap();
        assert_eq!(quadrant.dimensions(), (2, 2));
        assert_eq!(quadrant.get_pixel(1, 1), &BLUE);

        let top_left = crop(&image, region(0, 0, 2, 2));
        assert!(top_left.pixels().all(|pixel| *pixel == RED));
    }

    // Tests a horizontal join aligns the shorter image as requested
    // Verified by ignoring the alignment
    #[test]
    fn test_merge_horizontal_alignment() {
        let base = RgbaImage::from_pixel(2, 2, RED);
        let tall = RgbaImage::from_pixel(2, 4, BLUE);

        let top = merge(&base, &tall, Side::Right, Direction::Compass(Compass::Top)).unwrap();
        assert_eq!(top.dimensions(), (4, 4));
        assert_eq!(top.get_pixel(0, 0), &RED);
        assert_eq!(top.get_pixel(0, 3), &CLEAR);
        assert_eq!(top.get_pixel(3, 3), &BLUE);

        let bottom =
            merge(&base, &tall, Side::Right, Direction::Compass(Compass::Bottom)).unwrap();
        assert_eq!(bottom.get_pixel(0, 0), &CLEAR);
        assert_eq!(bottom.get_pixel(0, 3), &RED);

        let centred = merge(&base, &tall, Side::Left, Direction::CENTER).unwrap();
        assert_eq!(centred.get_pixel(0, 0), &BLUE);
        assert_eq!(centred.get_pixel(2, 0), &CLEAR);
        assert_eq!(centred.get_pixel(2, 1), &RED);
        assert_eq!(centred.get_pixel(3, 2), &RED);
    }

    // Tests a vertical join stacks images and rejects a mismatched axis aggregate
    // Verified by placing the adjoined image above the base
    #[test]
    fn test_merge_vertical() {
        let base = RgbaImage::from_pixel(2, 1, RED);
        let below = RgbaImage::from_pixel(2, 3, GREEN);

        let stacked = merge(&base, &below, Side::Bottom, Direction::CENTER).unwrap();
        assert_eq!(stacked.dimensions(), (2, 4));
        assert_eq!(stacked.get_pixel(1, 0), &RED);
        assert_eq!(stacked.get_pixel(1, 3), &GREEN);

        assert!(
            merge(
                &base,
                &below,
                Side::Bottom,
                Direction::Aggregate(Aggregate::Vertical)
            )
            .is_err()
        );
    }

    // Tests quadrants land in their own corner of the tile
    // Verified by swapping the bottom quadrants
    #[test]
    fn test_merge_quadrants() {
        let tile = merge_quadrants(
            &RgbaImage::from_pixel(2, 2, RED),
            &RgbaImage::from_pixel(2, 2, GREEN),
            &RgbaImage::from_pixel(2, 2, BLUE),
            &RgbaImage::from_pixel(2, 2, WHITE),
        )
        .unwrap();

        assert_eq!(tile.dimensions(), (4, 4));
        assert_eq!(tile.get_pixel(3, 0), &RED);
        assert_eq!(tile.get_pixel(3, 3), &GREEN);
        assert_eq!(tile.get_pixel(0, 3), &BLUE);
        assert_eq!(tile.get_pixel(0, 0), &WHITE);
    }

    // Tests composition picks the source for each corner slice
    // Verified by composing every quadrant from the isolated source
    #[test]
    fn test_compose_bent_path() {
        let tile = compose_index(TextureIndex::new(28).unwrap(), &sources()).unwrap();

        assert_eq!(tile.dimensions(), (4, 4));
        assert_eq!(tile.get_pixel(3, 0), &BLACK);
        assert_eq!(tile.get_pixel(3, 3), &BLUE);
        assert_eq!(tile.get_pixel(0, 3), &RED);
        assert_eq!(tile.get_pixel(0, 0), &WHITE);
    }

    // Tests a fully enclosed tile is cut entirely from the surrounded source
    // Verified by using crossing artwork for enclosed corners
    #[test]
    fn test_compose_enclosed() {
        let slices = CornerSlices::from_fn(|_| SliceId::FullyEnclosed);
        let tile = compose_tile(&slices, &sources()).unwrap();
        assert!(tile.pixels().all(|pixel| *pixel == GREEN));
    }

    // Tests a tileset has one source-sized tile per index
    // Verified by skipping the last index
    #[test]
    fn test_generate_tileset() {
        let tiles = generate_tileset(&sources()).unwrap();
        assert_eq!(tiles.len(), 47);
        assert!(tiles.iter().all(|tile| tile.dimensions() == (4, 4)));
        assert!(tiles.first().unwrap().pixels().all(|pixel| *pixel == RED));
    }
}
