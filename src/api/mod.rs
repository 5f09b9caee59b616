mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod frame_builder;
mod interaction_controller;
mod layout;
mod style;

pub use engine::EnergyChart;
pub use engine_config::EnergyChartConfig;
pub use engine_snapshot::ChartSnapshot;
pub use frame_builder::{build_render_frame, tooltip_rect};
pub use layout::{ChartLayout, LayoutSnapshot, MeasuredLabel};
pub use style::{ChartStyle, ScrubberStyle};
