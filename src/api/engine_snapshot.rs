use serde::Serialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::text::TextMeasurer;

use super::{ChartStyle, EnergyChart, LayoutSnapshot};

/// Serializable state of the chart after its last render pass, used by
/// regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub style: ChartStyle,
    pub selected_index: Option<usize>,
    pub layout: Option<LayoutSnapshot>,
}

impl<R: Renderer, M: TextMeasurer> EnergyChart<R, M> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.viewport,
            style: self.style,
            selected_index: self.cache.selected_index(),
            layout: self.last_layout.as_ref().map(|layout| layout.snapshot()),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
