use tracing::{trace, warn};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::{CoordinateCache, ScrubberBehavior};
use crate::model::{ChartState, Sample};
use crate::render::{RenderFrame, Renderer};
use crate::text::{EstimatedTextMeasurer, TextMeasurer};

use super::{ChartLayout, ChartStyle, frame_builder};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host-facing facade of the energy usage chart.
///
/// Each render pass recomputes the whole layout from the given
/// [`ChartState`], hands the primitives to the renderer and keeps the
/// plotted coordinates for pointer hit-testing.
pub struct EnergyChart<R: Renderer, M: TextMeasurer = EstimatedTextMeasurer> {
    pub(super) renderer: R,
    pub(super) measurer: M,
    pub(super) viewport: Viewport,
    pub(super) style: ChartStyle,
    pub(super) scrubber: ScrubberBehavior,
    pub(super) cache: CoordinateCache,
    pub(super) last_layout: Option<ChartLayout>,
}

impl<R: Renderer, M: TextMeasurer> EnergyChart<R, M> {
    /// Computes layout and primitives for `state` without rendering.
    ///
    /// Updates the coordinate cache, so a following pointer event resolves
    /// against this pass.
    pub fn build_render_frame(
        &mut self,
        state: &ChartState,
        selected: Option<&Sample>,
    ) -> ChartResult<RenderFrame> {
        let layout = ChartLayout::compute(state, &self.style, self.viewport, &self.measurer);
        let selected_index = selected.and_then(|sample| {
            let index = state.index_of(sample);
            if index.is_none() {
                warn!(
                    epoch_seconds = sample.epoch_seconds(),
                    "selected sample is not part of chart state"
                );
            }
            index
        });

        let frame = frame_builder::build_render_frame(
            &layout,
            state,
            &self.style,
            selected_index,
            &self.measurer,
        );
        frame.validate()?;

        let counts = frame.counts();
        trace!(
            samples = state.samples().len(),
            selected_index,
            rects = counts.rects,
            lines = counts.lines,
            paths = counts.paths,
            circles = counts.circles,
            texts = counts.texts,
            "build render frame"
        );

        self.cache.store(layout.coordinates.clone(), selected_index);
        self.last_layout = Some(layout);
        Ok(frame)
    }

    pub fn render(&mut self, state: &ChartState, selected: Option<&Sample>) -> ChartResult<()> {
        let frame = self.build_render_frame(state, selected)?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, e.g. from a widget draw
    /// callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        state: &ChartState,
        selected: Option<&Sample>,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame(state, selected)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
