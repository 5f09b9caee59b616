use std::sync::Arc;

use crate::core::{Rect, StrokePass};
use crate::model::ChartState;
use crate::render::{
    ChartLayer, CirclePrimitive, DashPattern, LinePrimitive, PathPrimitive, RectPrimitive,
    RenderFrame, TextPrimitive,
};
use crate::text::TextMeasurer;

use super::{ChartLayout, ChartStyle};

/// Turns a layout into draw primitives.
///
/// `selected_index` must index `state.samples()`; out-of-range selections
/// draw no scrubber.
pub fn build_render_frame<M>(
    layout: &ChartLayout,
    state: &ChartState,
    style: &ChartStyle,
    selected_index: Option<usize>,
    measurer: &M,
) -> RenderFrame
where
    M: TextMeasurer + ?Sized,
{
    let mut frame = RenderFrame::new(layout.viewport);

    push_average_band(&mut frame, layout, style);
    push_gridlines(&mut frame, layout, style);
    push_axis_labels(&mut frame, layout, style);
    push_chart_line(&mut frame, layout, style);

    if let Some(index) = selected_index {
        if let (Some(point), Some(sample)) =
            (layout.coordinates.get(index), state.samples().get(index))
        {
            let tooltip = state.tooltip_text(sample);
            push_scrubber(&mut frame, layout, style, (point.x, point.y), &tooltip, measurer);
        }
    }

    frame
}

fn push_average_band(frame: &mut RenderFrame, layout: &ChartLayout, style: &ChartStyle) {
    frame.push_rect(
        ChartLayer::Background,
        RectPrimitive::from_rect(
            layout.average_band,
            style.average_band_color,
            style.px(style.average_band_corner_radius),
        ),
    );
}

fn push_gridlines(frame: &mut RenderFrame, layout: &ChartLayout, style: &ChartStyle) {
    let dash = style.px(style.gridline_dash_width);
    let width = layout.viewport.width_px();
    for &y in &layout.y_ticks {
        frame.push_line(
            ChartLayer::Grid,
            LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                style.px(style.gridline_stroke_width),
                style.gridline_color,
            )
            .dashed(DashPattern { on: dash, off: dash }),
        );
    }
}

fn push_axis_labels(frame: &mut RenderFrame, layout: &ChartLayout, style: &ChartStyle) {
    let text_style = style.label_text.scaled(style.density);
    let x_label_height = layout.x_labels.first().map_or(0.0, |label| label.size.height);
    let x_label_y = layout.viewport.height_px() - x_label_height;
    let single_x_label = layout.x_ticks.len() == 1;

    for (label, &tick) in layout.x_labels.iter().zip(&layout.x_ticks) {
        if label.text.is_empty() {
            continue;
        }
        let center = if single_x_label {
            layout.plot_area.center_x()
        } else {
            tick
        };
        frame.push_text(
            ChartLayer::Axis,
            TextPrimitive {
                text: label.text.clone(),
                x: center - label.size.width / 2.0,
                y: x_label_y,
                font_size_px: text_style.font_size_px,
                line_height_px: text_style.line_height_px,
                weight: text_style.weight,
                color: style.label_color,
            },
        );
    }

    let padding_bottom = style.px(style.y_label_padding_bottom);
    for (label, &tick) in layout.y_labels.iter().zip(&layout.y_ticks) {
        frame.push_text(
            ChartLayer::Axis,
            TextPrimitive {
                text: label.text.clone(),
                x: 0.0,
                y: tick - label.size.height - padding_bottom,
                font_size_px: text_style.font_size_px,
                line_height_px: text_style.line_height_px,
                weight: text_style.weight,
                color: style.label_color,
            },
        );
    }
}

fn push_chart_line(frame: &mut RenderFrame, layout: &ChartLayout, style: &ChartStyle) {
    if layout.path.is_empty() {
        return;
    }
    for pass in layout.band_clips.passes() {
        let color = match pass {
            StrokePass::Baseline => style.line_color_average,
            StrokePass::AboveBand(_) => style.line_color_above_average,
            StrokePass::BelowBand(_) => style.line_color_below_average,
        };
        frame.push_path(
            ChartLayer::Series,
            PathPrimitive {
                path: Arc::clone(&layout.path),
                stroke_width: style.px(style.line_stroke_width),
                color,
                round_cap: true,
                clip: pass.clip(),
            },
        );
    }
}

/// Tooltip box position: left of the scrubber line, flipped to the right
/// when it would start left of the plot area.
#[must_use]
pub fn tooltip_rect(
    point_x: f64,
    plot_area: Rect,
    tooltip_width: f64,
    tooltip_height: f64,
    outer_radius: f64,
    distance: f64,
) -> Rect {
    let mut left = point_x - outer_radius - distance - tooltip_width;
    if left < plot_area.left {
        left = point_x + outer_radius + distance;
    }
    Rect::from_origin_size(left, plot_area.top, tooltip_width, tooltip_height)
}

fn push_scrubber<M>(
    frame: &mut RenderFrame,
    layout: &ChartLayout,
    style: &ChartStyle,
    (x, y): (f64, f64),
    tooltip: &str,
    measurer: &M,
) where
    M: TextMeasurer + ?Sized,
{
    let scrubber = &style.scrubber;
    let plot = layout.plot_area;
    let outer_radius = style.px(scrubber.outer_circle_radius);

    frame.push_line(
        ChartLayer::Scrubber,
        LinePrimitive::new(
            x,
            plot.bottom,
            x,
            plot.top,
            style.px(scrubber.line_width),
            scrubber.line_color,
        ),
    );
    frame.push_circle(
        ChartLayer::Scrubber,
        CirclePrimitive {
            cx: x,
            cy: y,
            radius: outer_radius,
            color: scrubber.outer_circle_color,
        },
    );
    frame.push_circle(
        ChartLayer::Scrubber,
        CirclePrimitive {
            cx: x,
            cy: y,
            radius: style.px(scrubber.inner_circle_radius),
            color: scrubber.inner_circle_color,
        },
    );

    let text_style = scrubber.tooltip_text.scaled(style.density);
    let text_size = measurer.measure(tooltip, &text_style);
    let padding_h = style.px(scrubber.tooltip_padding_horizontal);
    let padding_v = style.px(scrubber.tooltip_padding_vertical);
    let rect = tooltip_rect(
        x,
        plot,
        text_size.width + padding_h * 2.0,
        text_size.height + padding_v * 2.0,
        outer_radius,
        style.px(scrubber.tooltip_to_line_distance),
    );

    frame.push_rect(
        ChartLayer::Scrubber,
        RectPrimitive::from_rect(
            rect,
            scrubber.tooltip_color,
            style.px(scrubber.tooltip_corner_radius),
        ),
    );
    frame.push_text(
        ChartLayer::Scrubber,
        TextPrimitive {
            text: tooltip.to_owned(),
            x: rect.left + padding_h,
            y: rect.top + padding_v,
            font_size_px: text_style.font_size_px,
            line_height_px: text_style.line_height_px,
            weight: text_style.weight,
            color: scrubber.tooltip_text_color,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::tooltip_rect;
    use crate::core::Rect;

    #[test]
    fn tooltip_flips_right_near_left_edge() {
        let plot = Rect::from_ltrb(40.0, 20.0, 400.0, 200.0);
        let left_side = tooltip_rect(300.0, plot, 100.0, 50.0, 5.0, 8.0);
        assert_eq!(left_side.left, 187.0);
        assert_eq!(left_side.top, 20.0);

        let flipped = tooltip_rect(60.0, plot, 100.0, 50.0, 5.0, 8.0);
        assert_eq!(flipped.left, 73.0);
        assert_eq!(flipped.bottom, 70.0);
    }
}
