use tracing::warn;

use crate::interaction::{PointerEvent, PointerResolution, resolve_pointer};
use crate::model::{ChartState, Sample};
use crate::render::Renderer;
use crate::text::TextMeasurer;

use super::EnergyChart;

impl<R: Renderer, M: TextMeasurer> EnergyChart<R, M> {
    /// Resolves a tap or drag to the nearest plotted sample and reports it.
    ///
    /// `state` must be the state of the last render pass. `on_select` runs at
    /// most once per event; it never runs while scrubbing is disabled or
    /// nothing is plotted.
    pub fn handle_pointer<F>(
        &mut self,
        state: &ChartState,
        event: PointerEvent,
        scrubber_enabled: bool,
        mut on_select: F,
    ) -> PointerResolution
    where
        F: FnMut(Option<&Sample>),
    {
        if !scrubber_enabled || state.is_empty() {
            return PointerResolution::Ignored;
        }
        if self.cache.coordinates().len() != state.samples().len() {
            warn!(
                cached = self.cache.coordinates().len(),
                samples = state.samples().len(),
                "coordinate cache does not match chart state; render before hit-testing"
            );
            return PointerResolution::Ignored;
        }

        let resolution = resolve_pointer(event, &self.cache, scrubber_enabled, self.scrubber);
        if let PointerResolution::Selected(index) = resolution {
            on_select(state.samples().get(index));
            self.cache.set_selected_index(Some(index));
        }
        resolution
    }

    /// Clears the selection, reporting `None` to the host.
    pub fn clear_selection<F>(&mut self, mut on_select: F)
    where
        F: FnMut(Option<&Sample>),
    {
        if self.cache.selected_index().is_some() {
            self.cache.set_selected_index(None);
            on_select(None);
        }
    }
}
