use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{AverageRange, ChartState, Granularity, Sample, UsageSummary};

/// Device categories reported by the energy service, keyed by OCF type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OcfDeviceType {
    Light,
    SmartLight,
    Thermostat,
    Plug,
    Doorbell,
    Sensor,
    Lock,
}

impl OcfDeviceType {
    pub const ALL: [Self; 7] = [
        Self::Light,
        Self::SmartLight,
        Self::Thermostat,
        Self::Plug,
        Self::Doorbell,
        Self::Sensor,
        Self::Lock,
    ];

    #[must_use]
    pub const fn ocf_type(self) -> &'static str {
        match self {
            Self::Light => "oic.d.light",
            Self::SmartLight => "oic.d.light.smart",
            Self::Thermostat => "oic.d.thermostat",
            Self::Plug => "oic.d.smartplug",
            Self::Doorbell => "telus.d.doorbell",
            Self::Sensor => "oic.d.sensor",
            Self::Lock => "oic.d.smartlock",
        }
    }

    pub fn from_ocf_type(value: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.ocf_type() == value)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown OCF device type `{value}`")))
    }
}

/// One point of a device's own usage series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceUsageEntry {
    pub entry: Sample,
    pub usage_percentage: f64,
    /// Runtime over the period, in minutes.
    pub runtime: u32,
}

/// Per-device breakdown carried alongside the household series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyUsageDevice {
    pub id: String,
    pub name: String,
    pub device_type: OcfDeviceType,
    pub image: Option<String>,
    pub usage_percentage: f64,
    pub summary: UsageSummary,
    pub runtime: u32,
    pub suggestion: Option<String>,
    pub usage_data: Vec<DeviceUsageEntry>,
}

/// Household usage for one period as delivered by the energy service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyUsage {
    pub summary: UsageSummary,
    pub history_start: DateTime<Utc>,
    pub historical_low: f64,
    pub historical_high: f64,
    pub usage_average: AverageRange,
    pub usage_data: Vec<Sample>,
    pub devices: Vec<EnergyUsageDevice>,
}

impl EnergyUsage {
    /// Builds the chart state for this period's series.
    pub fn chart_state(&self, granularity: Granularity) -> ChartResult<ChartState> {
        ChartState::new(
            self.usage_data.clone(),
            self.usage_average.clone(),
            granularity,
        )
    }

    /// Devices ordered by descending share of usage.
    #[must_use]
    pub fn devices_by_usage(&self) -> Vec<&EnergyUsageDevice> {
        let mut devices: Vec<_> = self.devices.iter().collect();
        devices.sort_by(|a, b| b.usage_percentage.total_cmp(&a.usage_percentage));
        devices
    }
}

#[cfg(test)]
mod tests {
    use super::OcfDeviceType;

    #[test]
    fn ocf_type_round_trips_through_lookup() {
        for kind in OcfDeviceType::ALL {
            assert_eq!(OcfDeviceType::from_ocf_type(kind.ocf_type()).unwrap(), kind);
        }
        assert!(OcfDeviceType::from_ocf_type("oic.d.toaster").is_err());
    }
}
