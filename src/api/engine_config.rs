use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::ScrubberBehavior;

use super::ChartStyle;

/// Bootstrap configuration for [`super::EnergyChart`].
///
/// Serializable so hosts can persist chart setup alongside their own state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub scrubber: ScrubberBehavior,
}

impl EnergyChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: ChartStyle::default(),
            scrubber: ScrubberBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.style.density = density;
        self
    }

    #[must_use]
    pub fn with_scrubber_behavior(mut self, scrubber: ScrubberBehavior) -> Self {
        self.scrubber = scrubber;
        self
    }
}
