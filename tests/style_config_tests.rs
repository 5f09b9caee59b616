use energy_chart::api::{ChartStyle, EnergyChart, EnergyChartConfig};
use energy_chart::core::Viewport;
use energy_chart::error::ChartError;
use energy_chart::interaction::ScrubberBehavior;
use energy_chart::render::{Color, NullRenderer};

#[test]
fn default_style_matches_reference_palette() {
    let style = ChartStyle::default();
    assert_eq!(style.average_band_color, Color::from_hex(0xF8F0FF));
    assert_eq!(style.line_color_average, Color::from_hex(0x8F4EC6));
    assert_eq!(style.line_color_above_average, Color::from_hex(0xFFCA49));
    assert_eq!(style.line_color_below_average, Color::from_hex(0x43AE0C));
    assert_eq!(style.gridline_color, Color::from_hex(0x9A9A9D));
    assert_eq!(style.label_color, Color::from_hex(0x57575B));
    assert_eq!(style.single_point_segment_length, 96.0);
    assert_eq!(style.scrubber.tooltip_text.font_size_px, 15.0);
    assert!(style.validate().is_ok());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: EnergyChartConfig =
        serde_json::from_str(r#"{ "viewport": { "width": 320, "height": 180 } }"#)
            .expect("parse config");
    assert_eq!(config.viewport, Viewport::new(320, 180));
    assert_eq!(config.style, ChartStyle::default());
    assert_eq!(config.scrubber, ScrubberBehavior::default());

    let tuned: EnergyChartConfig = serde_json::from_str(
        r#"{
            "viewport": { "width": 320, "height": 180 },
            "style": { "density": 2.5, "scrubber": { "outer_circle_radius": 6.0 } },
            "scrubber": { "suppress_repeated_selection": true }
        }"#,
    )
    .expect("parse tuned config");
    assert_eq!(tuned.style.density, 2.5);
    assert_eq!(tuned.style.scrubber.outer_circle_radius, 6.0);
    assert_eq!(tuned.style.scrubber.inner_circle_radius, 2.0);
    assert!(tuned.scrubber.suppress_repeated_selection);
}

#[test]
fn invalid_style_is_rejected() {
    let mut style = ChartStyle::default();
    style.density = 0.0;
    assert!(matches!(style.validate(), Err(ChartError::InvalidData(_))));

    let mut style = ChartStyle::default();
    style.y_label_padding_end = -1.0;
    assert!(style.validate().is_err());

    let mut style = ChartStyle::default();
    style.scrubber.tooltip_color = Color::rgba(1.2, 0.0, 0.0, 1.0);
    assert!(style.validate().is_err());

    let config = EnergyChartConfig::new(Viewport::new(320, 180)).with_density(f64::NAN);
    assert!(EnergyChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn zero_viewport_is_rejected() {
    let err = EnergyChart::new(
        NullRenderer::default(),
        EnergyChartConfig::new(Viewport::new(0, 180)),
    )
    .err()
    .expect("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 180 }));
}

#[test]
fn set_style_validates_before_applying() {
    let mut chart = EnergyChart::new(
        NullRenderer::default(),
        EnergyChartConfig::new(Viewport::new(320, 180)),
    )
    .expect("chart init");
    let mut style = chart.style();
    style.line_stroke_width = -4.0;
    assert!(chart.set_style(style).is_err());
    assert_eq!(chart.style().line_stroke_width, 4.0);

    style.line_stroke_width = 3.0;
    chart.set_style(style).expect("valid style");
    assert_eq!(chart.style().line_stroke_width, 3.0);
}
