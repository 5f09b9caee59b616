//! Pointer handling for the scrubber.
//!
//! Every event is resolved on its own against the coordinates of the latest
//! render pass: no drag state, no velocity. Render and hit-test must run on
//! the same thread, render first, for the cached coordinates to be current.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{PlottedPoint, nearest_sample};

/// Pointer input in the chart's local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Press at a position.
    Tap { x: f64, y: f64 },
    /// Current position during a horizontal drag.
    Drag { x: f64, y: f64 },
}

impl PointerEvent {
    #[must_use]
    pub fn x(self) -> f64 {
        match self {
            Self::Tap { x, .. } | Self::Drag { x, .. } => x,
        }
    }
}

/// Tuning for selection callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrubberBehavior {
    /// Skip the callback when the resolved sample is already the selected one.
    #[serde(default)]
    pub suppress_repeated_selection: bool,
}

/// Single-slot store for the plotted points of the most recent render.
///
/// Written by the render pass, read by pointer handling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateCache {
    coordinates: Vec<PlottedPoint>,
    selected_index: Option<usize>,
}

impl CoordinateCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot with the output of a render pass.
    pub fn store(&mut self, coordinates: Vec<PlottedPoint>, selected_index: Option<usize>) {
        self.coordinates = coordinates;
        self.selected_index = selected_index;
    }

    /// Records a selection made between render passes.
    pub fn set_selected_index(&mut self, selected_index: Option<usize>) {
        self.selected_index = selected_index;
    }

    pub fn clear(&mut self) {
        self.coordinates.clear();
        self.selected_index = None;
    }

    #[must_use]
    pub fn coordinates(&self) -> &[PlottedPoint] {
        &self.coordinates
    }

    /// Selection that was drawn by the last render, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Outcome of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResolution {
    /// Scrubbing disabled or nothing plotted.
    Ignored,
    /// Resolved to the sample already selected; callback suppressed.
    Unchanged(usize),
    Selected(usize),
}

/// Resolves a pointer event to a sample index.
#[must_use]
pub fn resolve_pointer(
    event: PointerEvent,
    cache: &CoordinateCache,
    scrubber_enabled: bool,
    behavior: ScrubberBehavior,
) -> PointerResolution {
    if !scrubber_enabled {
        return PointerResolution::Ignored;
    }
    let Some(index) = nearest_sample(event.x(), cache.coordinates()) else {
        return PointerResolution::Ignored;
    };
    trace!(pointer_x = event.x(), index, "resolve pointer");

    if behavior.suppress_repeated_selection && cache.selected_index() == Some(index) {
        PointerResolution::Unchanged(index)
    } else {
        PointerResolution::Selected(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateCache, PointerEvent, PointerResolution, ScrubberBehavior, resolve_pointer};
    use crate::core::PlottedPoint;

    fn cache() -> CoordinateCache {
        let mut cache = CoordinateCache::new();
        cache.store(
            vec![
                PlottedPoint::new(10.0, 5.0),
                PlottedPoint::new(60.0, 5.0),
                PlottedPoint::new(110.0, 5.0),
            ],
            Some(1),
        );
        cache
    }

    #[test]
    fn disabled_scrubber_ignores_events() {
        let resolution = resolve_pointer(
            PointerEvent::Tap { x: 60.0, y: 0.0 },
            &cache(),
            false,
            ScrubberBehavior::default(),
        );
        assert_eq!(resolution, PointerResolution::Ignored);
    }

    #[test]
    fn empty_cache_ignores_events() {
        let resolution = resolve_pointer(
            PointerEvent::Drag { x: 60.0, y: 0.0 },
            &CoordinateCache::new(),
            true,
            ScrubberBehavior::default(),
        );
        assert_eq!(resolution, PointerResolution::Ignored);
    }

    #[test]
    fn repeated_selection_is_reported_only_when_suppression_is_on() {
        let event = PointerEvent::Drag { x: 70.0, y: 0.0 };
        let plain = resolve_pointer(event, &cache(), true, ScrubberBehavior::default());
        assert_eq!(plain, PointerResolution::Selected(1));

        let suppressing = ScrubberBehavior {
            suppress_repeated_selection: true,
        };
        assert_eq!(
            resolve_pointer(event, &cache(), true, suppressing),
            PointerResolution::Unchanged(1)
        );
        assert_eq!(
            resolve_pointer(PointerEvent::Tap { x: 100.0, y: 0.0 }, &cache(), true, suppressing),
            PointerResolution::Selected(2)
        );
    }
}
