use energy_chart::api::{EnergyChart, EnergyChartConfig};
use energy_chart::core::Viewport;
use energy_chart::interaction::{PointerEvent, PointerResolution, ScrubberBehavior};
use energy_chart::model::{AverageRange, ChartState, Granularity, Sample, UsageSummary};
use energy_chart::render::NullRenderer;

fn state(points: &[(i64, f64)]) -> ChartState {
    let samples = points
        .iter()
        .map(|&(seconds, usage)| {
            Sample::from_epoch_seconds(seconds, UsageSummary::new(usage, "kWh", 1.0, "USD"))
                .expect("valid timestamp")
        })
        .collect();
    ChartState::new(
        samples,
        AverageRange::new(5.0, 4.0, 6.0, "kWh"),
        Granularity::Day,
    )
    .expect("valid state")
}

fn chart(behavior: ScrubberBehavior) -> EnergyChart<NullRenderer> {
    EnergyChart::new(
        NullRenderer::default(),
        EnergyChartConfig::new(Viewport::new(360, 220)).with_scrubber_behavior(behavior),
    )
    .expect("chart init")
}

#[test]
fn tap_on_second_sample_pixel_selects_it() {
    let state = state(&[(0, 5.0), (3_600, 5.0)]);
    let mut chart = chart(ScrubberBehavior::default());
    chart.render(&state, None).expect("render");
    let x = chart.coordinate_cache().coordinates()[1].x;

    let mut selected: Vec<Option<Sample>> = Vec::new();
    let resolution = chart.handle_pointer(&state, PointerEvent::Tap { x, y: 10.0 }, true, |sample| {
        selected.push(sample.cloned());
    });

    assert_eq!(resolution, PointerResolution::Selected(1));
    assert_eq!(selected, vec![Some(state.samples()[1].clone())]);
    assert_eq!(chart.coordinate_cache().selected_index(), Some(1));
}

#[test]
fn drag_resolves_every_move_independently() {
    let state = state(&[(0, 1.0), (3_600, 2.0), (7_200, 3.0)]);
    let mut chart = chart(ScrubberBehavior::default());
    chart.render(&state, None).expect("render");
    let xs: Vec<f64> = chart
        .coordinate_cache()
        .coordinates()
        .iter()
        .map(|point| point.x)
        .collect();

    let mut indices = Vec::new();
    for x in [xs[0] - 50.0, xs[1] + 1.0, xs[2] + 500.0, xs[0] + 1.0] {
        let resolution = chart.handle_pointer(&state, PointerEvent::Drag { x, y: 0.0 }, true, |_| {});
        indices.push(resolution);
    }
    assert_eq!(
        indices,
        vec![
            PointerResolution::Selected(0),
            PointerResolution::Selected(1),
            PointerResolution::Selected(2),
            PointerResolution::Selected(0),
        ]
    );
}

#[test]
fn disabled_scrubber_never_calls_back() {
    let state = state(&[(0, 5.0), (3_600, 5.0)]);
    let mut chart = chart(ScrubberBehavior::default());
    chart.render(&state, None).expect("render");

    let mut calls = 0;
    let resolution =
        chart.handle_pointer(&state, PointerEvent::Tap { x: 100.0, y: 0.0 }, false, |_| calls += 1);
    assert_eq!(resolution, PointerResolution::Ignored);
    assert_eq!(calls, 0);
}

#[test]
fn empty_state_ignores_pointer() {
    let state = state(&[]);
    let mut chart = chart(ScrubberBehavior::default());
    chart.render(&state, None).expect("render");

    let mut calls = 0;
    let resolution =
        chart.handle_pointer(&state, PointerEvent::Drag { x: 50.0, y: 0.0 }, true, |_| calls += 1);
    assert_eq!(resolution, PointerResolution::Ignored);
    assert_eq!(calls, 0);
}

#[test]
fn pointer_before_first_render_is_ignored() {
    let state = state(&[(0, 5.0), (3_600, 5.0)]);
    let mut chart = chart(ScrubberBehavior::default());

    let mut calls = 0;
    let resolution =
        chart.handle_pointer(&state, PointerEvent::Tap { x: 50.0, y: 0.0 }, true, |_| calls += 1);
    assert_eq!(resolution, PointerResolution::Ignored);
    assert_eq!(calls, 0);
}

#[test]
fn repeated_selection_is_suppressed_when_configured() {
    let state = state(&[(0, 5.0), (3_600, 5.0)]);
    let mut chart = chart(ScrubberBehavior {
        suppress_repeated_selection: true,
    });
    let selected = state.samples()[1].clone();
    chart.render(&state, Some(&selected)).expect("render");
    let x = chart.coordinate_cache().coordinates()[1].x;

    let mut calls = 0;
    let resolution =
        chart.handle_pointer(&state, PointerEvent::Drag { x, y: 0.0 }, true, |_| calls += 1);
    assert_eq!(resolution, PointerResolution::Unchanged(1));
    assert_eq!(calls, 0);

    let x0 = chart.coordinate_cache().coordinates()[0].x;
    let resolution =
        chart.handle_pointer(&state, PointerEvent::Drag { x: x0, y: 0.0 }, true, |_| calls += 1);
    assert_eq!(resolution, PointerResolution::Selected(0));
    assert_eq!(calls, 1);
}

#[test]
fn clear_selection_reports_none_once() {
    let state = state(&[(0, 5.0), (3_600, 5.0)]);
    let mut chart = chart(ScrubberBehavior::default());
    let selected = state.samples()[0].clone();
    chart.render(&state, Some(&selected)).expect("render");

    let mut reported = Vec::new();
    chart.clear_selection(|sample| reported.push(sample.is_none()));
    chart.clear_selection(|sample| reported.push(sample.is_none()));
    assert_eq!(reported, vec![true]);
}

#[test]
fn resizing_drops_cached_coordinates() {
    let state = state(&[(0, 5.0), (3_600, 5.0)]);
    let mut chart = chart(ScrubberBehavior::default());
    chart.render(&state, None).expect("render");
    assert_eq!(chart.coordinate_cache().coordinates().len(), 2);

    chart.set_viewport(Viewport::new(500, 300)).expect("resize");
    assert!(chart.coordinate_cache().is_empty());
    assert!(chart.last_layout().is_none());
    assert!(chart.set_viewport(Viewport::new(0, 300)).is_err());
}
