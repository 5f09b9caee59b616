use serde::{Deserialize, Serialize};

use crate::core::types::{PlottedPoint, Rect};

/// Average-band rectangle: `high_y`/`low_y` are the mapped range bounds, the
/// band runs from `left` to the right container edge.
#[must_use]
pub fn average_band_rect(left: f64, high_y: f64, low_y: f64, container_width: f64) -> Rect {
    Rect::from_ltrb(left, high_y, container_width, low_y)
}

/// Clip rectangles for the coloured re-draws of the chart line.
///
/// The band itself lies in neither rectangle, so the part of the line inside
/// it keeps the baseline colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandClips {
    pub above: Rect,
    pub below: Rect,
}

/// Which part of the container a pixel falls in relative to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandRegion {
    Above,
    Inside,
    Below,
    /// Left of the band, where neither clip reaches.
    Outside,
}

/// One stroke of the shared line path, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokePass {
    Baseline,
    AboveBand(Rect),
    BelowBand(Rect),
}

impl StrokePass {
    #[must_use]
    pub fn clip(self) -> Option<Rect> {
        match self {
            Self::Baseline => None,
            Self::AboveBand(rect) | Self::BelowBand(rect) => Some(rect),
        }
    }
}

/// Splits the container around `band` into above/below clip rectangles.
#[must_use]
pub fn split_band(band: Rect, container_width: f64, container_height: f64) -> BandClips {
    BandClips {
        above: Rect::from_ltrb(band.left, 0.0, container_width, band.top),
        below: Rect::from_ltrb(band.left, band.bottom, container_width, container_height),
    }
}

impl BandClips {
    /// The three strokes of one render: baseline, then above, then below.
    #[must_use]
    pub fn passes(self) -> [StrokePass; 3] {
        [
            StrokePass::Baseline,
            StrokePass::AboveBand(self.above),
            StrokePass::BelowBand(self.below),
        ]
    }

    /// Classifies a pixel. Boundary rows count as inside the band.
    #[must_use]
    pub fn region_of(self, point: PlottedPoint) -> BandRegion {
        if point.x < self.above.left {
            BandRegion::Outside
        } else if point.y < self.above.bottom {
            BandRegion::Above
        } else if point.y > self.below.top {
            BandRegion::Below
        } else {
            BandRegion::Inside
        }
    }
}
