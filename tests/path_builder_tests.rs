use energy_chart::core::{
    PathCommand, PlottedPoint, SINGLE_POINT_SEGMENT_LENGTH, build_smoothed_path,
};

#[test]
fn empty_points_build_empty_path() {
    let path = build_smoothed_path(&[], SINGLE_POINT_SEGMENT_LENGTH);
    assert!(path.is_empty());
    assert!(path.control_bounds().is_none());
}

#[test]
fn single_point_builds_flat_centered_segment() {
    let point = PlottedPoint::new(200.0, 80.0);
    let path = build_smoothed_path(&[point], 96.0);
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(PlottedPoint::new(152.0, 80.0)),
            PathCommand::LineTo(PlottedPoint::new(248.0, 80.0)),
        ]
    );
}

#[test]
fn control_points_hold_level_until_pair_midpoint() {
    let points = [
        PlottedPoint::new(0.0, 100.0),
        PlottedPoint::new(40.0, 20.0),
        PlottedPoint::new(100.0, 60.0),
    ];
    let path = build_smoothed_path(&points, 96.0);
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(points[0]),
            PathCommand::CubicTo {
                control1: PlottedPoint::new(20.0, 100.0),
                control2: PlottedPoint::new(20.0, 20.0),
                end: points[1],
            },
            PathCommand::CubicTo {
                control1: PlottedPoint::new(70.0, 20.0),
                control2: PlottedPoint::new(70.0, 60.0),
                end: points[2],
            },
        ]
    );
}

#[test]
fn flattened_curve_stays_within_vertical_extent_of_its_endpoints() {
    let points = [PlottedPoint::new(0.0, 10.0), PlottedPoint::new(50.0, 90.0)];
    let path = build_smoothed_path(&points, 96.0);
    let flattened = path.flatten(16);

    assert_eq!(flattened.first(), Some(&points[0]));
    assert_eq!(flattened.last(), Some(&points[1]));
    for point in &flattened {
        assert!(point.y >= 10.0 - 1e-9 && point.y <= 90.0 + 1e-9);
        assert!(point.x >= -1e-9 && point.x <= 50.0 + 1e-9);
    }
    for pair in flattened.windows(2) {
        assert!(pair[1].x >= pair[0].x - 1e-9);
    }
}
