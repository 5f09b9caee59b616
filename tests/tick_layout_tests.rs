use energy_chart::core::{
    AxisPadding, LabelExtents, Y_TICK_COUNT, tick_positions, x_tick_span, y_tick_span,
};
use proptest::prelude::*;

fn padding() -> AxisPadding {
    AxisPadding {
        x_label_top: 12.0,
        y_label_bottom: 4.0,
        y_label_end: 16.0,
        gridline_width: 1.0,
    }
}

#[test]
fn single_tick_is_first_bound() {
    let ticks = tick_positions(12.5, 300.0, 1);
    assert_eq!(ticks.as_slice(), &[12.5]);
}

#[test]
fn zero_ticks_is_empty() {
    assert!(tick_positions(0.0, 100.0, 0).is_empty());
}

#[test]
fn four_ticks_are_evenly_spaced() {
    let ticks = tick_positions(300.0, 30.0, Y_TICK_COUNT);
    assert_eq!(ticks.as_slice(), &[300.0, 210.0, 120.0, 30.0]);
}

#[test]
fn x_span_reserves_widest_y_label_or_half_first_label() {
    let extents = LabelExtents {
        widest_y_label_width: 14.0,
        first_x_label_width: 40.0,
        last_x_label_width: 30.0,
        ..LabelExtents::default()
    };
    let (first, last) = x_tick_span(extents, padding(), 400.0);
    assert_eq!(first, 30.0);
    assert_eq!(last, 385.0);

    let wide_first = LabelExtents {
        first_x_label_width: 80.0,
        ..extents
    };
    assert_eq!(x_tick_span(wide_first, padding(), 400.0).0, 40.0);
}

#[test]
fn y_span_runs_bottom_to_top() {
    let extents = LabelExtents {
        y_label_height: 13.0,
        x_label_height: 13.0,
        ..LabelExtents::default()
    };
    let (first, last) = y_tick_span(extents, padding(), 200.0);
    assert_eq!(first, 200.0 - 13.0 - 12.0 - 0.5);
    assert_eq!(last, 17.0);
    assert!(first > last);
}

proptest! {
    #[test]
    fn tick_positions_hit_both_bounds(
        first in -10_000.0f64..10_000.0,
        last in -10_000.0f64..10_000.0,
        count in 2usize..40
    ) {
        let ticks = tick_positions(first, last, count);
        prop_assert_eq!(ticks.len(), count);
        prop_assert!((ticks[0] - first).abs() <= 1e-9);
        prop_assert!((ticks[count - 1] - last).abs() <= 1e-9);

        let step = (last - first) / (count - 1) as f64;
        for pair in ticks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= 1e-6);
        }
    }
}
