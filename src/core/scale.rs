use serde::{Deserialize, Serialize};

use crate::core::types::{PlotArea, PlottedPoint};

/// Closed domain interval of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Maps a horizontal domain value (epoch seconds) into `area`.
///
/// A lone sample is placed at the horizontal centre of the area. With more
/// than one sample the caller must supply distinct first/last timestamps:
/// `min_x == max_x` divides by zero and yields a non-finite coordinate.
#[must_use]
pub fn map_x(value: f64, min_x: f64, max_x: f64, area: PlotArea, sample_count: usize) -> f64 {
    if sample_count == 1 {
        return area.center_x();
    }
    area.left + (value - min_x) / (max_x - min_x) * area.width()
}

/// Maps a vertical domain value into `area`; larger values sit higher.
#[must_use]
pub fn map_y(value: f64, min_y: f64, max_y: f64, area: PlotArea) -> f64 {
    area.bottom - (value - min_y) / (max_y - min_y) * area.height()
}

/// Domain-to-pixel mapper for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    area: PlotArea,
    sample_count: usize,
}

impl ScaleMapper {
    #[must_use]
    pub fn new(
        x_bounds: AxisBounds,
        y_bounds: AxisBounds,
        area: PlotArea,
        sample_count: usize,
    ) -> Self {
        Self {
            x_bounds,
            y_bounds,
            area,
            sample_count,
        }
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn map_x(self, value: f64) -> f64 {
        map_x(
            value,
            self.x_bounds.min,
            self.x_bounds.max,
            self.area,
            self.sample_count,
        )
    }

    #[must_use]
    pub fn map_y(self, value: f64) -> f64 {
        map_y(value, self.y_bounds.min, self.y_bounds.max, self.area)
    }

    /// Projects `(x, y)` domain pairs in order, one plotted point per pair.
    pub fn project<I>(self, values: I) -> Vec<PlottedPoint>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        values
            .into_iter()
            .map(|(x, y)| PlottedPoint::new(self.map_x(x), self.map_y(y)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisBounds, ScaleMapper, map_x, map_y};
    use crate::core::Rect;

    #[test]
    fn single_sample_maps_to_area_center() {
        let area = Rect::from_ltrb(40.0, 10.0, 240.0, 110.0);
        assert_eq!(map_x(1_000.0, 1_000.0, 1_000.0, area, 1), 140.0);
    }

    #[test]
    fn y_axis_is_inverted() {
        let area = Rect::from_ltrb(0.0, 20.0, 100.0, 220.0);
        assert_eq!(map_y(0.0, 0.0, 9.0, area), 220.0);
        assert_eq!(map_y(9.0, 0.0, 9.0, area), 20.0);
    }

    #[test]
    fn mapper_projects_in_input_order() {
        let mapper = ScaleMapper::new(
            AxisBounds::new(0.0, 10.0),
            AxisBounds::new(0.0, 3.0),
            Rect::from_ltrb(0.0, 0.0, 100.0, 30.0),
            2,
        );
        let points = mapper.project([(10.0, 0.0), (0.0, 3.0)]);
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].x, points[0].y), (100.0, 30.0));
        assert_eq!((points[1].x, points[1].y), (0.0, 0.0));
    }
}
