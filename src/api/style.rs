use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;
use crate::text::TextStyle;

/// Colors and dimensions of the chart.
///
/// Dimensions are density-independent units; `density` converts them to
/// pixels at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Pixels per density-independent unit.
    pub density: f64,

    pub average_band_color: Color,
    pub average_band_corner_radius: f64,
    /// Gap between the widest Y label and the band's left edge.
    pub average_band_padding_start: f64,

    pub line_color_average: Color,
    pub line_color_above_average: Color,
    pub line_color_below_average: Color,
    pub line_stroke_width: f64,
    pub single_point_segment_length: f64,

    pub gridline_color: Color,
    pub gridline_stroke_width: f64,
    pub gridline_dash_width: f64,

    pub label_color: Color,
    pub label_text: TextStyle,
    pub x_label_padding_top: f64,
    pub y_label_padding_bottom: f64,
    pub y_label_padding_end: f64,

    pub scrubber: ScrubberStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub outer_circle_color: Color,
    pub outer_circle_radius: f64,
    pub inner_circle_color: Color,
    pub inner_circle_radius: f64,
    pub tooltip_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_text: TextStyle,
    pub tooltip_padding_horizontal: f64,
    pub tooltip_padding_vertical: f64,
    pub tooltip_corner_radius: f64,
    pub tooltip_to_line_distance: f64,
}

const PURPLE: Color = Color::from_hex(0x8F4EC6);
const LAVENDER: Color = Color::from_hex(0xF8F0FF);

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            density: 1.0,
            average_band_color: LAVENDER,
            average_band_corner_radius: 8.0,
            average_band_padding_start: 8.0,
            line_color_average: PURPLE,
            line_color_above_average: Color::from_hex(0xFFCA49),
            line_color_below_average: Color::from_hex(0x43AE0C),
            line_stroke_width: 4.0,
            single_point_segment_length: crate::core::SINGLE_POINT_SEGMENT_LENGTH,
            gridline_color: Color::from_hex(0x9A9A9D),
            gridline_stroke_width: 1.0,
            gridline_dash_width: 2.0,
            label_color: Color::from_hex(0x57575B),
            label_text: TextStyle::new(11.0, 13.0, 400),
            x_label_padding_top: 12.0,
            y_label_padding_bottom: 4.0,
            y_label_padding_end: 16.0,
            scrubber: ScrubberStyle::default(),
        }
    }
}

impl Default for ScrubberStyle {
    fn default() -> Self {
        Self {
            line_color: PURPLE,
            line_width: 1.0,
            outer_circle_color: PURPLE,
            outer_circle_radius: 5.0,
            inner_circle_color: LAVENDER,
            inner_circle_radius: 2.0,
            tooltip_color: PURPLE,
            tooltip_text_color: Color::WHITE,
            tooltip_text: TextStyle::new(15.0, 21.0, 400),
            tooltip_padding_horizontal: 8.0,
            tooltip_padding_vertical: 4.0,
            tooltip_corner_radius: 8.0,
            tooltip_to_line_distance: 8.0,
        }
    }
}

impl ChartStyle {
    /// Converts density-independent units to pixels.
    #[must_use]
    pub fn px(&self, value: f64) -> f64 {
        value * self.density
    }

    pub fn validate(&self) -> ChartResult<()> {
        require_positive("density", self.density)?;
        require_positive("line stroke width", self.line_stroke_width)?;
        require_positive("gridline stroke width", self.gridline_stroke_width)?;
        require_positive("gridline dash width", self.gridline_dash_width)?;
        require_positive("single point segment length", self.single_point_segment_length)?;
        for (name, value) in [
            ("average band corner radius", self.average_band_corner_radius),
            ("average band padding start", self.average_band_padding_start),
            ("x label padding top", self.x_label_padding_top),
            ("y label padding bottom", self.y_label_padding_bottom),
            ("y label padding end", self.y_label_padding_end),
        ] {
            require_non_negative(name, value)?;
        }
        validate_text_style("label", self.label_text)?;
        for color in [
            self.average_band_color,
            self.line_color_average,
            self.line_color_above_average,
            self.line_color_below_average,
            self.gridline_color,
            self.label_color,
        ] {
            color.validate()?;
        }
        self.scrubber.validate()
    }
}

impl ScrubberStyle {
    pub fn validate(&self) -> ChartResult<()> {
        require_positive("scrubber line width", self.line_width)?;
        require_positive("scrubber outer circle radius", self.outer_circle_radius)?;
        require_positive("scrubber inner circle radius", self.inner_circle_radius)?;
        for (name, value) in [
            ("tooltip horizontal padding", self.tooltip_padding_horizontal),
            ("tooltip vertical padding", self.tooltip_padding_vertical),
            ("tooltip corner radius", self.tooltip_corner_radius),
            ("tooltip to line distance", self.tooltip_to_line_distance),
        ] {
            require_non_negative(name, value)?;
        }
        validate_text_style("tooltip", self.tooltip_text)?;
        for color in [
            self.line_color,
            self.outer_circle_color,
            self.inner_circle_color,
            self.tooltip_color,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

fn validate_text_style(name: &str, style: TextStyle) -> ChartResult<()> {
    require_positive(&format!("{name} font size"), style.font_size_px)?;
    require_positive(&format!("{name} line height"), style.line_height_px)
}

fn require_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}
