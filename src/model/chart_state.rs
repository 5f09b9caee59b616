use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisBounds, Y_TICK_COUNT};
use crate::error::{ChartError, ChartResult};
use crate::format::{LabelConfig, format_timestamp, label_pattern, tooltip_text};

use super::{AverageRange, Granularity, Sample, XLabelSelection};

/// Everything the chart draws, plus the bounds and labels derived from it.
///
/// The state is immutable once built; a data change means building a new
/// state. Derived values are computed on each call and never cached.
///
/// Deserialization runs the same validation as [`ChartState::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartStateData")]
pub struct ChartState {
    samples: Vec<Sample>,
    average_range: AverageRange,
    granularity: Granularity,
    label_config: LabelConfig,
}

/// Unvalidated wire form of [`ChartState`].
#[derive(Deserialize)]
struct ChartStateData {
    samples: Vec<Sample>,
    average_range: AverageRange,
    granularity: Granularity,
    #[serde(default)]
    label_config: LabelConfig,
}

impl TryFrom<ChartStateData> for ChartState {
    type Error = ChartError;

    fn try_from(data: ChartStateData) -> ChartResult<Self> {
        Ok(Self::new(data.samples, data.average_range, data.granularity)?
            .with_label_config(data.label_config))
    }
}

impl ChartState {
    /// Validates and builds a chart state.
    ///
    /// Rejects an inconsistent average range, non-finite or negative usage,
    /// non-finite cost, and timestamps that go backwards. Equal consecutive
    /// timestamps are accepted, but with more than one sample the first and
    /// last timestamps must differ for horizontal mapping to be finite.
    pub fn new(
        samples: Vec<Sample>,
        average_range: AverageRange,
        granularity: Granularity,
    ) -> ChartResult<Self> {
        average_range.validate()?;

        for (index, sample) in samples.iter().enumerate() {
            let usage = sample.usage_amount();
            if !usage.is_finite() || usage < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "usage amount at index {index} must be finite and >= 0"
                )));
            }
            if !sample.cost_amount().is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "cost amount at index {index} must be finite"
                )));
            }
        }
        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(ChartError::UnsortedSamples { index: index + 1 });
        }

        debug!(
            sample_count = samples.len(),
            ?granularity,
            "build chart state"
        );

        Ok(Self {
            samples,
            average_range,
            granularity,
            label_config: LabelConfig::default(),
        })
    }

    #[must_use]
    pub fn with_label_config(mut self, label_config: LabelConfig) -> Self {
        self.label_config = label_config;
        self
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn average_range(&self) -> &AverageRange {
        &self.average_range
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn label_config(&self) -> LabelConfig {
        self.label_config
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Epoch seconds of the first sample, `0` when empty.
    #[must_use]
    pub fn min_x(&self) -> i64 {
        self.samples.first().map_or(0, Sample::epoch_seconds)
    }

    /// Epoch seconds of the last sample, `0` when empty.
    #[must_use]
    pub fn max_x(&self) -> i64 {
        self.samples.last().map_or(0, Sample::epoch_seconds)
    }

    #[must_use]
    pub fn min_y(&self) -> u32 {
        0
    }

    /// Smallest multiple of three at or above the largest usage, or `3` when
    /// no sample has positive usage.
    #[must_use]
    pub fn max_y(&self) -> u32 {
        let max_usage = self
            .samples
            .iter()
            .map(Sample::usage_amount)
            .fold(0.0_f64, f64::max);
        if max_usage > 0.0 {
            ((max_usage / 3.0).ceil() * 3.0) as u32
        } else {
            3
        }
    }

    #[must_use]
    pub fn x_bounds(&self) -> AxisBounds {
        AxisBounds::new(self.min_x() as f64, self.max_x() as f64)
    }

    #[must_use]
    pub fn y_bounds(&self) -> AxisBounds {
        AxisBounds::new(f64::from(self.min_y()), f64::from(self.max_y()))
    }

    /// Domain pairs `(epoch seconds, usage)` in sample order.
    pub fn domain_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .map(|sample| (sample.epoch_seconds() as f64, sample.usage_amount()))
    }

    /// Label for one sample at this state's granularity.
    #[must_use]
    pub fn x_axis_label(&self, sample: &Sample) -> String {
        format_timestamp(
            sample.timestamp,
            label_pattern(self.granularity),
            self.label_config,
        )
    }

    #[must_use]
    pub fn x_axis_labels(&self) -> Vec<String> {
        match self.granularity.x_label_selection(self.samples.len()) {
            XLabelSelection::All => self
                .samples
                .iter()
                .map(|sample| self.x_axis_label(sample))
                .collect(),
            XLabelSelection::FirstAndLast => self
                .samples
                .first()
                .into_iter()
                .chain(self.samples.last())
                .map(|sample| self.x_axis_label(sample))
                .collect(),
        }
    }

    /// Four labels from `min_y` to `max_y`; the last carries the unit.
    #[must_use]
    pub fn y_axis_labels(&self) -> Vec<String> {
        let min = self.min_y();
        let step = (self.max_y() - min) / (Y_TICK_COUNT as u32 - 1);
        (0..Y_TICK_COUNT)
            .map(|index| {
                let value = min + step * index as u32;
                if index + 1 < Y_TICK_COUNT {
                    value.to_string()
                } else {
                    format!("{value} {}", self.average_range.unit)
                }
            })
            .collect()
    }

    /// Position of `sample` in this state, by value.
    #[must_use]
    pub fn index_of(&self, sample: &Sample) -> Option<usize> {
        self.samples.iter().position(|candidate| candidate == sample)
    }

    #[must_use]
    pub fn tooltip_text(&self, sample: &Sample) -> String {
        tooltip_text(
            &self.x_axis_label(sample),
            &sample.summary.usage,
            &sample.summary.cost,
        )
    }
}
