use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Draw layers, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayer {
    Background,
    Grid,
    Axis,
    Series,
    Scrubber,
}

impl ChartLayer {
    pub const CANONICAL: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Axis,
        Self::Series,
        Self::Scrubber,
    ];
}

/// Primitives of one layer. Backends draw rects, lines, paths, circles and
/// texts in that order, each kind in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayer,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: ChartLayer) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

/// Primitive totals of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrimitiveCounts {
    pub rects: usize,
    pub lines: usize,
    pub paths: usize,
    pub circles: usize,
    pub texts: usize,
}

impl RenderFrame {
    /// Empty frame with one entry per canonical layer.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: ChartLayer::CANONICAL
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayer) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: ChartLayer) -> &mut LayerPrimitives {
        if let Some(position) = self.layers.iter().position(|layer| layer.kind == kind) {
            return &mut self.layers[position];
        }
        self.layers.push(LayerPrimitives::new(kind));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn push_rect(&mut self, kind: ChartLayer, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_line(&mut self, kind: ChartLayer, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_path(&mut self, kind: ChartLayer, path: PathPrimitive) {
        self.layer_mut(kind).paths.push(path);
    }

    pub fn push_circle(&mut self, kind: ChartLayer, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: ChartLayer, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for path in &layer.paths {
                path.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn counts(&self) -> PrimitiveCounts {
        self.layers
            .iter()
            .fold(PrimitiveCounts::default(), |acc, layer| PrimitiveCounts {
                rects: acc.rects + layer.rects.len(),
                lines: acc.lines + layer.lines.len(),
                paths: acc.paths + layer.paths.len(),
                circles: acc.circles + layer.circles.len(),
                texts: acc.texts + layer.texts.len(),
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
