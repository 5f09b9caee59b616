use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::interaction::CoordinateCache;
use crate::render::Renderer;
use crate::text::{EstimatedTextMeasurer, TextMeasurer};

use super::{EnergyChart, EnergyChartConfig};

impl<R: Renderer> EnergyChart<R, EstimatedTextMeasurer> {
    /// Creates a chart that measures labels with the built-in width table.
    pub fn new(renderer: R, config: EnergyChartConfig) -> ChartResult<Self> {
        Self::with_measurer(renderer, EstimatedTextMeasurer, config)
    }
}

impl<R: Renderer, M: TextMeasurer> EnergyChart<R, M> {
    /// Creates a chart with a backend-specific text measurer.
    pub fn with_measurer(renderer: R, measurer: M, config: EnergyChartConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        config.style.validate()?;

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            density = config.style.density,
            "create energy chart"
        );
        Ok(Self {
            renderer,
            measurer,
            viewport: config.viewport,
            style: config.style,
            scrubber: config.scrubber,
            cache: CoordinateCache::new(),
            last_layout: None,
        })
    }
}
