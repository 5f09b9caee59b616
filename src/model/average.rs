use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Typical usage for the period, drawn as the highlighted band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRange {
    pub average: f64,
    pub low: f64,
    pub high: f64,
    pub unit: String,
}

impl AverageRange {
    #[must_use]
    pub fn new(average: f64, low: f64, high: f64, unit: impl Into<String>) -> Self {
        Self {
            average,
            low,
            high,
            unit: unit.into(),
        }
    }

    /// Checks `low <= average <= high` with finite bounds.
    pub fn validate(&self) -> ChartResult<()> {
        let finite = self.low.is_finite() && self.average.is_finite() && self.high.is_finite();
        if !finite || self.low > self.average || self.average > self.high {
            return Err(ChartError::InvalidAverageRange {
                low: self.low,
                average: self.average,
                high: self.high,
            });
        }
        Ok(())
    }
}
