//! energy-chart: geometry engine for a smoothed energy usage line chart.
//!
//! Samples go in, backend-agnostic draw primitives come out: an average
//! band, dashed gridlines, axis labels, a line recolored above and below
//! the band, and an optional scrubber with tooltip. Pointer events resolve
//! to the nearest plotted sample.

pub mod api;
pub mod core;
pub mod error;
pub mod format;
pub mod interaction;
pub mod model;
pub mod render;
pub mod telemetry;
pub mod text;

pub use api::{ChartStyle, EnergyChart, EnergyChartConfig};
pub use error::{ChartError, ChartResult};
