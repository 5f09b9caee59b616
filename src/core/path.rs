use serde::{Deserialize, Serialize};

use crate::core::types::{PlottedPoint, Rect};

/// Length of the flat segment drawn for a lone sample, in dp.
pub const SINGLE_POINT_SEGMENT_LENGTH: f64 = 96.0;

/// One drawing command of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PlottedPoint),
    LineTo(PlottedPoint),
    CubicTo {
        control1: PlottedPoint,
        control2: PlottedPoint,
        end: PlottedPoint,
    },
}

/// Open stroked path in pixel space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: PlottedPoint) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: PlottedPoint) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn cubic_to(&mut self, control1: PlottedPoint, control2: PlottedPoint, end: PlottedPoint) {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.x.is_finite() && p.y.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => [control1, control2, end]
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite()),
        })
    }

    /// Approximates the path by a polyline, evaluating each cubic at
    /// `steps_per_curve` evenly spaced parameters.
    #[must_use]
    pub fn flatten(&self, steps_per_curve: usize) -> Vec<PlottedPoint> {
        let steps = steps_per_curve.max(1);
        let mut out = Vec::new();
        let mut current = PlottedPoint::new(0.0, 0.0);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    out.push(p);
                    current = p;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        out.push(cubic_point(current, control1, control2, end, t));
                    }
                    current = end;
                }
            }
        }
        out
    }

    /// Bounding box of all command points, control points included.
    #[must_use]
    pub fn control_bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => vec![control1, control2, end],
        });
        let first = points.next()?;
        let init = Rect::from_ltrb(first.x, first.y, first.x, first.y);
        Some(points.fold(init, |acc, p| {
            Rect::from_ltrb(
                acc.left.min(p.x),
                acc.top.min(p.y),
                acc.right.max(p.x),
                acc.bottom.max(p.y),
            )
        }))
    }
}

fn cubic_point(
    start: PlottedPoint,
    control1: PlottedPoint,
    control2: PlottedPoint,
    end: PlottedPoint,
    t: f64,
) -> PlottedPoint {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    PlottedPoint::new(
        a * start.x + b * control1.x + c * control2.x + d * end.x,
        a * start.y + b * control1.y + c * control2.y + d * end.y,
    )
}

/// Builds the chart line through `points`.
///
/// - no points: empty path
/// - one point: flat segment of `single_point_length` centred on it
/// - otherwise one cubic per consecutive pair, both control points at the
///   pair's mid x, the first at the start's y and the second at the end's y
#[must_use]
pub fn build_smoothed_path(points: &[PlottedPoint], single_point_length: f64) -> Path {
    let mut path = Path::new();
    match points {
        [] => {}
        [only] => {
            let half = single_point_length / 2.0;
            path.move_to(PlottedPoint::new(only.x - half, only.y));
            path.line_to(PlottedPoint::new(only.x + half, only.y));
        }
        [first, ..] => {
            path.move_to(*first);
            for pair in points.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                let mid_x = (start.x + end.x) / 2.0;
                path.cubic_to(
                    PlottedPoint::new(mid_x, start.y),
                    PlottedPoint::new(mid_x, end.y),
                    end,
                );
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::{PathCommand, build_smoothed_path};
    use crate::core::PlottedPoint;

    #[test]
    fn control_points_hold_level_until_midpoint() {
        let points = [
            PlottedPoint::new(0.0, 100.0),
            PlottedPoint::new(50.0, 20.0),
            PlottedPoint::new(150.0, 60.0),
        ];
        let path = build_smoothed_path(&points, 96.0);
        assert_eq!(path.commands().len(), 3);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(points[0]));
        assert_eq!(
            path.commands()[2],
            PathCommand::CubicTo {
                control1: PlottedPoint::new(100.0, 20.0),
                control2: PlottedPoint::new(100.0, 60.0),
                end: points[2],
            }
        );
    }

    #[test]
    fn flatten_passes_through_every_point() {
        let points = [PlottedPoint::new(0.0, 10.0), PlottedPoint::new(10.0, 0.0)];
        let flat = build_smoothed_path(&points, 96.0).flatten(8);
        assert_eq!(flat.len(), 9);
        assert_eq!(flat[0], points[0]);
        let last = flat[8];
        assert!((last.x - 10.0).abs() < 1e-12 && last.y.abs() < 1e-12);
    }
}
