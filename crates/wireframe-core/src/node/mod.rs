//! Scene node definitions.
//!
//! Nodes live in a flat table keyed by [`NodeId`]. Children are owned through
//! the id lists of their parent; the `parent` field is a non-owning back
//! reference used only for lookups.

mod container;
mod shape;
mod text;

pub use container::{ContainerKind, ContainerNode, EdgeWeights, OtherNode};
pub use shape::{CornerRadii, ShapeKind, ShapeNode, StrokeAlign, Strokes, VectorNode};
pub use text::{TextAutoResize, TextNode};

use crate::paint::Paint;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for nodes.
pub type NodeId = Uuid;

/// Variant-specific node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Text(TextNode),
    Shape(ShapeNode),
    Vector(VectorNode),
    Container(ContainerNode),
    Other(OtherNode),
}

/// Flat host-level type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Text,
    Rectangle,
    Ellipse,
    Polygon,
    Vector,
    Frame,
    Component,
    Instance,
    Other,
}

/// A node of the design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    /// Free-form layer name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    /// Top-left corner, relative to the parent.
    pub position: Point,
    pub size: Size,
    pub kind: NodeKind,
}

impl SceneNode {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent: None,
            position: Point::ZERO,
            size: Size::new(100.0, 100.0),
            kind,
        }
    }

    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Text(TextNode::new(characters)))
    }

    pub fn rectangle(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Shape(ShapeNode::new(ShapeKind::Rectangle)))
    }

    pub fn ellipse(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Shape(ShapeNode::new(ShapeKind::Ellipse)))
    }

    pub fn polygon(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Shape(ShapeNode::new(ShapeKind::Polygon)))
    }

    pub fn vector(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Vector(VectorNode::default()))
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::container(name, ContainerKind::Frame)
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::container(name, ContainerKind::Component)
    }

    pub fn instance(name: impl Into<String>) -> Self {
        Self::container(name, ContainerKind::Instance)
    }

    pub fn container(name: impl Into<String>, kind: ContainerKind) -> Self {
        Self::with_kind(name, NodeKind::Container(ContainerNode::new(kind)))
    }

    pub fn other(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            NodeKind::Other(OtherNode {
                type_name: type_name.into(),
                children: Vec::new(),
            }),
        )
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the paint stack: fills, or backgrounds for containers.
    pub fn with_fills(mut self, paints: Vec<Paint>) -> Self {
        if let Some(stack) = self.paints_mut() {
            *stack = paints;
        }
        self
    }

    pub fn with_strokes(mut self, strokes: Strokes) -> Self {
        if let Some(slot) = self.strokes_mut() {
            *slot = strokes;
        }
        self
    }

    pub fn with_corners(mut self, corners: CornerRadii) -> Self {
        match &mut self.kind {
            NodeKind::Shape(shape) if shape.corners.is_some() => shape.corners = Some(corners),
            NodeKind::Container(container) if container.corners.is_some() => {
                container.corners = Some(corners)
            }
            _ => {}
        }
        self
    }

    /// Host-level type tag.
    pub fn node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::Shape(shape) => match shape.shape {
                ShapeKind::Rectangle => NodeType::Rectangle,
                ShapeKind::Ellipse => NodeType::Ellipse,
                ShapeKind::Polygon => NodeType::Polygon,
            },
            NodeKind::Vector(_) => NodeType::Vector,
            NodeKind::Container(container) => match container.container {
                ContainerKind::Frame => NodeType::Frame,
                ContainerKind::Component => NodeType::Component,
                ContainerKind::Instance => NodeType::Instance,
            },
            NodeKind::Other(_) => NodeType::Other,
        }
    }

    /// Rectangles and frames take part in the nested-square contrast rule.
    pub fn is_rectangle_or_frame(&self) -> bool {
        matches!(self.node_type(), NodeType::Rectangle | NodeType::Frame)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_))
    }

    /// The node's paint stack: fills, or backgrounds for containers.
    pub fn paints(&self) -> Option<&[Paint]> {
        match &self.kind {
            NodeKind::Text(text) => Some(&text.fills),
            NodeKind::Shape(shape) => Some(&shape.fills),
            NodeKind::Vector(vector) => Some(&vector.fills),
            NodeKind::Container(container) => Some(&container.backgrounds),
            NodeKind::Other(_) => None,
        }
    }

    pub fn paints_mut(&mut self) -> Option<&mut Vec<Paint>> {
        match &mut self.kind {
            NodeKind::Text(text) => Some(&mut text.fills),
            NodeKind::Shape(shape) => Some(&mut shape.fills),
            NodeKind::Vector(vector) => Some(&mut vector.fills),
            NodeKind::Container(container) => Some(&mut container.backgrounds),
            NodeKind::Other(_) => None,
        }
    }

    /// Whether the node carries at least one paint, visible or not.
    pub fn is_paint_bearing(&self) -> bool {
        self.paints().is_some_and(|paints| !paints.is_empty())
    }

    pub fn strokes(&self) -> Option<&Strokes> {
        match &self.kind {
            NodeKind::Shape(shape) => Some(&shape.strokes),
            NodeKind::Vector(vector) => Some(&vector.strokes),
            NodeKind::Container(container) => Some(&container.strokes),
            NodeKind::Text(_) | NodeKind::Other(_) => None,
        }
    }

    pub fn strokes_mut(&mut self) -> Option<&mut Strokes> {
        match &mut self.kind {
            NodeKind::Shape(shape) => Some(&mut shape.strokes),
            NodeKind::Vector(vector) => Some(&mut vector.strokes),
            NodeKind::Container(container) => Some(&mut container.strokes),
            NodeKind::Text(_) | NodeKind::Other(_) => None,
        }
    }

    pub fn corners(&self) -> Option<&CornerRadii> {
        match &self.kind {
            NodeKind::Shape(shape) => shape.corners.as_ref(),
            NodeKind::Container(container) => container.corners.as_ref(),
            _ => None,
        }
    }

    pub fn corners_mut(&mut self) -> Option<&mut CornerRadii> {
        match &mut self.kind {
            NodeKind::Shape(shape) => shape.corners.as_mut(),
            NodeKind::Container(container) => container.corners.as_mut(),
            _ => None,
        }
    }

    /// Ordered child ids; empty for leaf variants.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Container(container) => &container.children,
            NodeKind::Other(other) => &other.children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.kind {
            NodeKind::Container(container) => Some(&mut container.children),
            NodeKind::Other(other) => Some(&mut other.children),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match &mut self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Bounding box relative to the parent.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}
