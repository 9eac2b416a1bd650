//! Shape, vector and stroke payloads.

use crate::paint::Paint;
use serde::{Deserialize, Serialize};

/// Basic geometric shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Polygon,
}

/// Where a stroke sits relative to the node outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Center,
    Outside,
}

/// Stroke paints plus their alignment and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strokes {
    #[serde(default)]
    pub paints: Vec<Paint>,
    #[serde(default)]
    pub align: StrokeAlign,
    #[serde(default = "default_stroke_weight")]
    pub weight: f64,
}

fn default_stroke_weight() -> f64 {
    1.0
}

impl Default for Strokes {
    fn default() -> Self {
        Self {
            paints: Vec::new(),
            align: StrokeAlign::default(),
            weight: default_stroke_weight(),
        }
    }
}

impl Strokes {
    pub fn new(paints: Vec<Paint>) -> Self {
        Self {
            paints,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paints.is_empty()
    }
}

/// Per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// The radius if all four corners agree.
    pub fn as_uniform(&self) -> Option<f64> {
        let r = self.top_left;
        (self.top_right == r && self.bottom_right == r && self.bottom_left == r).then_some(r)
    }
}

/// Rectangle, ellipse or polygon layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub shape: ShapeKind,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Strokes,
    /// `None` when the node exposes no corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners: Option<CornerRadii>,
}

impl ShapeNode {
    pub fn new(shape: ShapeKind) -> Self {
        let corners = match shape {
            ShapeKind::Ellipse => None,
            ShapeKind::Rectangle | ShapeKind::Polygon => Some(CornerRadii::default()),
        };
        Self {
            shape,
            fills: Vec::new(),
            strokes: Strokes::default(),
            corners,
        }
    }
}

/// Free-form vector path layer. Path data is opaque to the converter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorNode {
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Strokes,
}
