use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Energy consumed over one sample period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub amount: f64,
    pub unit: String,
}

/// Cost of one sample period in a given ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSnapshot {
    pub amount: f64,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub usage: UsageSnapshot,
    pub cost: CostSnapshot,
}

impl UsageSummary {
    #[must_use]
    pub fn new(
        usage_amount: f64,
        usage_unit: impl Into<String>,
        cost_amount: f64,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            usage: UsageSnapshot {
                amount: usage_amount,
                unit: usage_unit.into(),
            },
            cost: CostSnapshot {
                amount: cost_amount,
                currency_code: currency_code.into(),
            },
        }
    }
}

/// One timestamped point of the usage time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub summary: UsageSummary,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, summary: UsageSummary) -> Self {
        Self { timestamp, summary }
    }

    /// Builds a sample from epoch seconds; `None` when out of chrono's range.
    #[must_use]
    pub fn from_epoch_seconds(seconds: i64, summary: UsageSummary) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(seconds, 0).map(|timestamp| Self::new(timestamp, summary))
    }

    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }

    #[must_use]
    pub fn usage_amount(&self) -> f64 {
        self.summary.usage.amount
    }

    #[must_use]
    pub fn cost_amount(&self) -> f64 {
        self.summary.cost.amount
    }
}
