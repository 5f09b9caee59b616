use ordered_float::OrderedFloat;

use crate::core::types::PlottedPoint;

/// Index of the plotted point horizontally closest to `pointer_x`.
///
/// Linear scan; ties resolve to the lowest index. Returns `None` only for an
/// empty coordinate list, which callers avoid by gating interaction on a
/// non-empty sample list.
#[must_use]
pub fn nearest_sample(pointer_x: f64, coordinates: &[PlottedPoint]) -> Option<usize> {
    coordinates
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| OrderedFloat((point.x - pointer_x).abs()))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::nearest_sample;
    use crate::core::PlottedPoint;

    #[test]
    fn empty_coordinates_resolve_to_none() {
        assert_eq!(nearest_sample(10.0, &[]), None);
    }

    #[test]
    fn ties_prefer_lowest_index() {
        let coordinates = [
            PlottedPoint::new(0.0, 0.0),
            PlottedPoint::new(10.0, 0.0),
            PlottedPoint::new(20.0, 0.0),
        ];
        assert_eq!(nearest_sample(5.0, &coordinates), Some(0));
        assert_eq!(nearest_sample(15.0, &coordinates), Some(1));
    }

    #[test]
    fn pointer_outside_range_clamps_to_edge_samples() {
        let coordinates = [PlottedPoint::new(50.0, 0.0), PlottedPoint::new(90.0, 0.0)];
        assert_eq!(nearest_sample(-100.0, &coordinates), Some(0));
        assert_eq!(nearest_sample(1_000.0, &coordinates), Some(1));
    }
}
