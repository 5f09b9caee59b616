//! Text measurement seam.
//!
//! Layout only needs label extents; how glyphs are shaped is the host's
//! business. Backends supply a `TextMeasurer`, headless use gets a
//! deterministic estimate.

use serde::{Deserialize, Serialize};

/// Font parameters for one kind of label, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub line_height_px: f64,
    /// CSS-style weight, 100..=900.
    pub weight: u16,
}

impl TextStyle {
    #[must_use]
    pub const fn new(font_size_px: f64, line_height_px: f64, weight: u16) -> Self {
        Self {
            font_size_px,
            line_height_px,
            weight,
        }
    }

    #[must_use]
    pub fn scaled(self, density: f64) -> Self {
        Self {
            font_size_px: self.font_size_px * density,
            line_height_px: self.line_height_px * density,
            weight: self.weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Measures the laid-out size of a (possibly multi-line) string.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize {
        (**self).measure(text, style)
    }
}

/// Backend-independent estimate from per-character advance factors.
///
/// Width is the widest line; height is `lines * line_height`. Empty text
/// measures zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl EstimatedTextMeasurer {
    fn line_width(line: &str, font_size_px: f64) -> f64 {
        let units = line.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'A'..='Z' => 0.68,
                _ => 0.56,
            }
        });
        units * font_size_px
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }
        let weight_factor = if style.weight >= 600 { 1.06 } else { 1.0 };
        let (width, lines) = text.lines().fold((0.0_f64, 0_usize), |(width, lines), line| {
            (
                width.max(Self::line_width(line, style.font_size_px) * weight_factor),
                lines + 1,
            )
        });
        TextSize {
            width,
            height: lines as f64 * style.line_height_px,
        }
    }
}
