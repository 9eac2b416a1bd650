//! Container payloads: frames, components, instances and opaque nodes.

use super::NodeId;
use super::shape::{CornerRadii, Strokes};
use crate::paint::Paint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    Frame,
    Component,
    Instance,
}

/// Independent stroke weights for each edge of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeWeights {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeWeights {
    pub fn uniform(weight: f64) -> Self {
        Self {
            top: weight,
            right: weight,
            bottom: weight,
            left: weight,
        }
    }
}

/// A frame-like node that owns an ordered list of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    pub container: ContainerKind,
    #[serde(default)]
    pub backgrounds: Vec<Paint>,
    #[serde(default)]
    pub strokes: Strokes,
    #[serde(default)]
    pub edge_weights: EdgeWeights,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners: Option<CornerRadii>,
    /// Children in paint order (back to front).
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl ContainerNode {
    pub fn new(container: ContainerKind) -> Self {
        Self {
            container,
            backgrounds: Vec::new(),
            strokes: Strokes::default(),
            edge_weights: EdgeWeights::default(),
            corners: Some(CornerRadii::default()),
            children: Vec::new(),
        }
    }
}

/// Any node type the converter does not restyle (groups, lines, slices...).
///
/// Its children, if any, are still traversed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherNode {
    /// Host type name, kept for diagnostics.
    pub type_name: String,
    #[serde(default)]
    pub children: Vec<NodeId>,
}
