//! Pure chart geometry: every function here is a total, side-effect free
//! mapping from domain data and pixel bounds to pixel-space output.

pub mod band;
pub mod hit_test;
pub mod path;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band::{BandClips, BandRegion, StrokePass, average_band_rect, split_band};
pub use hit_test::nearest_sample;
pub use path::{Path, PathCommand, SINGLE_POINT_SEGMENT_LENGTH, build_smoothed_path};
pub use scale::{AxisBounds, ScaleMapper, map_x, map_y};
pub use ticks::{
    AxisPadding, LabelExtents, TickPositions, Y_TICK_COUNT, tick_positions, x_tick_span,
    y_tick_span,
};
pub use types::{PlotArea, PlottedPoint, Rect, Viewport};
