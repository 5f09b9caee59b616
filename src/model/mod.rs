//! Chart data model: samples, the average range, and the derived chart state.

pub mod average;
pub mod chart_state;
pub mod granularity;
pub mod sample;
pub mod usage;

pub use average::AverageRange;
pub use chart_state::ChartState;
pub use granularity::{Granularity, MAX_MONTH_X_AXIS_LABELS, XLabelSelection};
pub use sample::{CostSnapshot, Sample, UsageSnapshot, UsageSummary};
pub use usage::{DeviceUsageEntry, EnergyUsage, EnergyUsageDevice, OcfDeviceType};
