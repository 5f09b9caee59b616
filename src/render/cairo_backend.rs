use cairo::{Context, Format, ImageSurface, LineCap};
use pango::FontDescription;
use pango::prelude::FontMapExt;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LayerPrimitives, RectPrimitive, RenderFrame, Renderer};
use crate::text::{TextMeasurer, TextSize, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Draws offscreen into an image surface through `Renderer::render`, or in
/// place on a host-owned context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            self.draw_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_layer(
        &self,
        context: &Context,
        layer: &LayerPrimitives,
        stats: &mut CairoRenderStats,
    ) -> ChartResult<()> {
        for rect in &layer.rects {
            append_rect_path(context, *rect);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for line in &layer.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            match line.dash {
                Some(dash) => context.set_dash(&[dash.on, dash.off], 0.0),
                None => context.set_dash(&[], 0.0),
            }
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for path in &layer.paths {
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            if let Some(clip) = path.clip {
                context.rectangle(clip.left, clip.top, clip.width(), clip.height());
                context.clip();
            }
            context.new_path();
            for command in path.path.commands() {
                match *command {
                    PathCommand::MoveTo(p) => context.move_to(p.x, p.y),
                    PathCommand::LineTo(p) => context.line_to(p.x, p.y),
                    PathCommand::CubicTo {
                        control1,
                        control2,
                        end,
                    } => context.curve_to(
                        control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                    ),
                }
            }
            apply_color(context, path.color);
            context.set_line_width(path.stroke_width);
            context.set_line_cap(if path.round_cap {
                LineCap::Round
            } else {
                LineCap::Butt
            });
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.paths_drawn += 1;
        }

        for circle in &layer.circles {
            context.new_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            apply_color(context, circle.color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for text in &layer.texts {
            let layout = pangocairo::functions::create_layout(context);
            let description = font_description(&self.font_family, text.font_size_px, text.weight);
            layout.set_font_description(Some(&description));

            apply_color(context, text.color);
            for (index, line) in text.text.split('\n').enumerate() {
                if line.is_empty() {
                    continue;
                }
                layout.set_text(line);
                context.move_to(text.x, text.y + index as f64 * text.line_height_px);
                pangocairo::functions::show_layout(context, &layout);
            }
            stats.texts_drawn += 1;
        }

        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Measures labels with Pango so layout matches what `CairoRenderer` draws.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: pango::Context,
    font_family: String,
}

impl PangoTextMeasurer {
    #[must_use]
    pub fn new(font_family: impl Into<String>) -> Self {
        let font_map = pangocairo::FontMap::new();
        Self {
            context: font_map.create_context(),
            font_family: font_family.into(),
        }
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }
        let layout = pango::Layout::new(&self.context);
        let description = font_description(&self.font_family, style.font_size_px, style.weight);
        layout.set_font_description(Some(&description));

        // Lines are placed `line_height_px` apart, the same way the renderer
        // draws them.
        let mut width = 0_i32;
        let mut line_count = 0_usize;
        for line in text.split('\n') {
            line_count += 1;
            if line.is_empty() {
                continue;
            }
            layout.set_text(line);
            width = width.max(layout.pixel_size().0);
        }
        TextSize {
            width: f64::from(width),
            height: line_count as f64 * style.line_height_px,
        }
    }
}

fn font_description(family: &str, size_px: f64, weight: u16) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family(family);
    description.set_absolute_size(size_px * f64::from(pango::SCALE));
    description.set_weight(match weight {
        0..=149 => pango::Weight::Thin,
        150..=249 => pango::Weight::Ultralight,
        250..=349 => pango::Weight::Light,
        350..=449 => pango::Weight::Normal,
        450..=549 => pango::Weight::Medium,
        550..=649 => pango::Weight::Semibold,
        650..=749 => pango::Weight::Bold,
        750..=849 => pango::Weight::Ultrabold,
        _ => pango::Weight::Heavy,
    });
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    context.new_path();
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width.abs() * 0.5)
        .min(rect.height.abs() * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
