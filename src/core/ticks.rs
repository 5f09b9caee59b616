use smallvec::SmallVec;

/// Pixel positions of axis ticks; inline for the label counts a chart uses.
pub type TickPositions = SmallVec<[f64; 8]>;

/// Number of horizontal gridlines and Y-axis labels.
pub const Y_TICK_COUNT: usize = 4;

/// Returns `count` evenly spaced positions from `first` to `last` inclusive.
///
/// `count == 1` yields `[first]`; `count == 0` yields nothing.
#[must_use]
pub fn tick_positions(first: f64, last: f64, count: usize) -> TickPositions {
    match count {
        0 => TickPositions::new(),
        1 => smallvec::smallvec![first],
        _ => {
            let step = (last - first) / (count - 1) as f64;
            (0..count)
                .map(|index| {
                    if index == count - 1 {
                        last
                    } else {
                        first + step * index as f64
                    }
                })
                .collect()
        }
    }
}

/// Measured extents that drive tick placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelExtents {
    pub widest_y_label_width: f64,
    pub y_label_height: f64,
    pub first_x_label_width: f64,
    pub last_x_label_width: f64,
    pub x_label_height: f64,
}

/// Fixed paddings around the axis labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPadding {
    /// Gap between the plot bottom and the X labels.
    pub x_label_top: f64,
    /// Gap between a Y label and the gridline below it.
    pub y_label_bottom: f64,
    /// Gap between the widest Y label and the first X tick.
    pub y_label_end: f64,
    /// Gridline stroke width; half of it is reserved below the lowest tick.
    pub gridline_width: f64,
}

/// Horizontal tick span: leaves room for the Y labels on the left and keeps
/// the outer X labels from clipping at the container edges.
#[must_use]
pub fn x_tick_span(extents: LabelExtents, padding: AxisPadding, container_width: f64) -> (f64, f64) {
    let first = (extents.widest_y_label_width + padding.y_label_end)
        .max(extents.first_x_label_width / 2.0);
    let last = container_width - extents.last_x_label_width / 2.0;
    (first, last)
}

/// Vertical tick span, bottom tick first.
#[must_use]
pub fn y_tick_span(extents: LabelExtents, padding: AxisPadding, container_height: f64) -> (f64, f64) {
    let first = container_height
        - extents.x_label_height
        - padding.x_label_top
        - padding.gridline_width / 2.0;
    let last = extents.y_label_height + padding.y_label_bottom;
    (first, last)
}
