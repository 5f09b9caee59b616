use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CoordinateCache, ScrubberBehavior};
use crate::render::Renderer;
use crate::text::TextMeasurer;

use super::{ChartLayout, ChartStyle, EnergyChart};

impl<R: Renderer, M: TextMeasurer> EnergyChart<R, M> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the size used by the next render pass.
    ///
    /// Cached coordinates belong to the old size and are dropped.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.cache.clear();
        self.last_layout = None;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn scrubber_behavior(&self) -> ScrubberBehavior {
        self.scrubber
    }

    pub fn set_scrubber_behavior(&mut self, behavior: ScrubberBehavior) {
        self.scrubber = behavior;
    }

    #[must_use]
    pub fn coordinate_cache(&self) -> &CoordinateCache {
        &self.cache
    }

    /// Layout of the most recent render pass.
    #[must_use]
    pub fn last_layout(&self) -> Option<&ChartLayout> {
        self.last_layout.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }
}
