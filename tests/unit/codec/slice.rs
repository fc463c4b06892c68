//! Tests for per-corner slice classification

#[cfg(test)]
mod tests {
    use blobtile::codec::{CornerSlices, Neighborhood, SliceId, classify_corner};
    use blobtile::spatial::{Compass, Corner};

    // Tests the three-neighbour window table
    // Verified by swapping the two edge slices
    #[test]
    fn test_window_table() {
        assert_eq!(SliceId::from_window(false, false, false), SliceId::Isolated);
        assert_eq!(SliceId::from_window(false, true, false), SliceId::Isolated);
        assert_eq!(
            SliceId::from_window(true, true, false),
            SliceId::EdgeFromCounterclockwise
        );
        assert_eq!(
            SliceId::from_window(false, false, true),
            SliceId::EdgeFromClockwise
        );
        assert_eq!(
            SliceId::from_window(true, true, true),
            SliceId::FullyEnclosed
        );
        assert_eq!(SliceId::from_window(true, false, true), SliceId::Crossing);
    }

    // Tests a corner reads its own window only
    // Verified by reading the opposite corner's diagonal
    #[test]
    fn test_classify_corner_window() {
        let neighborhood = Neighborhood::from_directions(&[Compass::Top, Compass::Right]);

        assert_eq!(
            classify_corner(&neighborhood, Corner::TopRight),
            SliceId::Crossing
        );
        assert_eq!(
            classify_corner(&neighborhood, Corner::BottomRight),
            SliceId::EdgeFromCounterclockwise
        );
        assert_eq!(
            classify_corner(&neighborhood, Corner::TopLeft),
            SliceId::EdgeFromClockwise
        );
        assert_eq!(
            classify_corner(&neighborhood, Corner::BottomLeft),
            SliceId::Isolated
        );

        let enclosed = neighborhood.with(Compass::TopRight, true);
        assert_eq!(
            classify_corner(&enclosed, Corner::TopRight),
            SliceId::FullyEnclosed
        );
    }

    // Tests interior slices are the two with both sides occupied
    // Verified by including edge slices
    #[test]
    fn test_is_interior() {
        let interior: Vec<_> = SliceId::ALL
            .into_iter()
            .filter(|slice| slice.is_interior())
            .collect();
        assert_eq!(interior, vec![SliceId::FullyEnclosed, SliceId::Crossing]);
    }

    // Tests corner slice lookups, counting and search order
    // Verified by searching counterclockwise
    #[test]
    fn test_corner_slices_queries() {
        let slices = CornerSlices::classify(&Neighborhood::from_directions(&[
            Compass::Top,
            Compass::Right,
            Compass::Bottom,
            Compass::Left,
            Compass::BottomRight,
        ]));

        assert_eq!(slices.get(Corner::BottomRight), SliceId::FullyEnclosed);
        assert_eq!(slices.count(SliceId::Crossing), 3);
        assert_eq!(slices.find(SliceId::Crossing), Some(Corner::TopRight));
        assert_eq!(slices.find(SliceId::Isolated), None);
        assert_eq!(slices.iter().count(), 4);
    }
}
