use std::sync::Arc;

use serde::Serialize;

use crate::core::{
    AxisPadding, BandClips, LabelExtents, Path, PlotArea, PlottedPoint, Rect, ScaleMapper,
    TickPositions, Viewport, average_band_rect, build_smoothed_path, split_band, tick_positions,
    x_tick_span, y_tick_span,
};
use crate::model::ChartState;
use crate::text::{TextMeasurer, TextSize};

use super::ChartStyle;

/// Axis label text with its measured size in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredLabel {
    pub text: String,
    pub size: TextSize,
}

/// Geometry of one render pass. Recomputed from scratch on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub x_labels: Vec<MeasuredLabel>,
    pub y_labels: Vec<MeasuredLabel>,
    pub x_ticks: TickPositions,
    /// Bottom tick first.
    pub y_ticks: TickPositions,
    pub plot_area: PlotArea,
    pub average_band: Rect,
    pub band_clips: BandClips,
    /// One point per sample, in sample order.
    pub coordinates: Vec<PlottedPoint>,
    pub path: Arc<Path>,
}

/// Serializable view of a layout for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub x_labels: Vec<MeasuredLabel>,
    pub y_labels: Vec<MeasuredLabel>,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub plot_area: PlotArea,
    pub average_band: Rect,
    pub band_clips: BandClips,
    pub coordinates: Vec<PlottedPoint>,
    pub path: Path,
}

impl ChartLayout {
    pub fn compute<M>(
        state: &ChartState,
        style: &ChartStyle,
        viewport: Viewport,
        measurer: &M,
    ) -> Self
    where
        M: TextMeasurer + ?Sized,
    {
        let label_style = style.label_text.scaled(style.density);
        let measure_all = |labels: Vec<String>| -> Vec<MeasuredLabel> {
            labels
                .into_iter()
                .map(|text| {
                    let size = measurer.measure(&text, &label_style);
                    MeasuredLabel { text, size }
                })
                .collect()
        };
        let x_labels = measure_all(state.x_axis_labels());
        let y_labels = measure_all(state.y_axis_labels());

        // The unit-suffixed top label sits above the plot and does not
        // reserve left margin.
        let widest_y_label_width = y_labels
            .split_last()
            .map_or(0.0, |(_, rest)| {
                rest.iter().map(|label| label.size.width).fold(0.0, f64::max)
            });
        let extents = LabelExtents {
            widest_y_label_width,
            y_label_height: y_labels.first().map_or(0.0, |label| label.size.height),
            first_x_label_width: x_labels.first().map_or(0.0, |label| label.size.width),
            last_x_label_width: x_labels.last().map_or(0.0, |label| label.size.width),
            x_label_height: x_labels.first().map_or(0.0, |label| label.size.height),
        };
        let padding = AxisPadding {
            x_label_top: style.px(style.x_label_padding_top),
            y_label_bottom: style.px(style.y_label_padding_bottom),
            y_label_end: style.px(style.y_label_padding_end),
            gridline_width: style.px(style.gridline_stroke_width),
        };

        let width = viewport.width_px();
        let height = viewport.height_px();
        let (first_x_tick, last_x_tick) = x_tick_span(extents, padding, width);
        let (first_y_tick, last_y_tick) = y_tick_span(extents, padding, height);
        let x_ticks = tick_positions(first_x_tick, last_x_tick, x_labels.len());
        let y_ticks = tick_positions(first_y_tick, last_y_tick, y_labels.len());

        let plot_area = Rect::from_ltrb(first_x_tick, last_y_tick, last_x_tick, first_y_tick);
        let mapper = ScaleMapper::new(
            state.x_bounds(),
            state.y_bounds(),
            plot_area,
            state.samples().len(),
        );

        let range = state.average_range();
        let average_band = average_band_rect(
            widest_y_label_width + style.px(style.average_band_padding_start),
            mapper.map_y(range.high),
            mapper.map_y(range.low),
            width,
        );
        let band_clips = split_band(average_band, width, height);

        let coordinates = mapper.project(state.domain_points());
        let path = Arc::new(build_smoothed_path(
            &coordinates,
            style.px(style.single_point_segment_length),
        ));

        Self {
            viewport,
            x_labels,
            y_labels,
            x_ticks,
            y_ticks,
            plot_area,
            average_band,
            band_clips,
            coordinates,
            path,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport: self.viewport,
            x_labels: self.x_labels.clone(),
            y_labels: self.y_labels.clone(),
            x_ticks: self.x_ticks.to_vec(),
            y_ticks: self.y_ticks.to_vec(),
            plot_area: self.plot_area,
            average_band: self.average_band,
            band_clips: self.band_clips,
            coordinates: self.coordinates.clone(),
            path: Path::clone(&self.path),
        }
    }
}
