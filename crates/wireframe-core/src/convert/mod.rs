//! Per-node style converters.
//!
//! Each converter computes the replacement style from the node's current
//! state, its parent and the [`WireframeStyle`], then writes it back through
//! the [`Host`]. Decisions depend only on current node state and never on
//! conversion history.
//!
//! Running a converter over its own output is stable under mono only. Under
//! dark-mode the `background` and `fill` colors are themselves below the
//! darkness threshold, as is the blueprint `background`, so a second pass
//! turns those surfaces into `fill_inverted`.

mod container;
mod shape;
mod text;
mod vector;

pub use container::{container_background, convert_container};
pub use shape::{convert_shape, shape_fill};
pub use text::{FontLoader, convert_text, restored_text_size};
pub use vector::{convert_vector, vector_fill};

use crate::error::WireframeResult;
use crate::host::Host;
use crate::node::{CornerRadii, NodeId, NodeType, SceneNode, Strokes};
use crate::paint::{Paint, PaintColor};
use crate::style::WireframeStyle;

/// Restyle a single node according to its variant.
///
/// Returns `false` for node types that are left untouched. Children are not
/// visited here.
pub fn convert_node<H: Host + ?Sized>(
    host: &mut H,
    id: NodeId,
    style: &WireframeStyle,
    fonts: &mut FontLoader,
) -> WireframeResult<bool> {
    let node_type = host.get(id)?.node_type();
    log::debug!("Converting {:?} node {}", node_type, id);
    match node_type {
        NodeType::Text => convert_text(host, id, style, fonts)?,
        NodeType::Rectangle | NodeType::Ellipse | NodeType::Polygon => {
            convert_shape(host, id, style)?
        }
        NodeType::Vector => convert_vector(host, id, style)?,
        NodeType::Frame | NodeType::Component | NodeType::Instance => {
            convert_container(host, id, style)?
        }
        NodeType::Other => return Ok(false),
    }
    Ok(true)
}

/// A single solid paint, or no paint at all.
fn single_paint(color: Option<PaintColor>) -> Vec<Paint> {
    color.map(Paint::solid).into_iter().collect()
}

/// Replace existing strokes with one theme stroke, keeping alignment and
/// weight. Nodes without strokes stay without strokes.
fn wireframe_strokes(strokes: &Strokes, style: &WireframeStyle) -> Strokes {
    let paints = if strokes.is_empty() {
        Vec::new()
    } else {
        vec![Paint::solid(style.colors().stroke)]
    };
    Strokes {
        paints,
        align: strokes.align,
        weight: strokes.weight,
    }
}

/// Set all four corners to the style radius, or to zero when rounding is
/// off. Ellipses and nodes without corner radii are left alone.
fn apply_corner_radius(node: &mut SceneNode, style: &WireframeStyle) {
    if node.node_type() == NodeType::Ellipse {
        return;
    }
    if let Some(corners) = node.corners_mut() {
        *corners = CornerRadii::uniform(style.corner_radius());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ConversionOptions;

    #[test]
    fn test_wireframe_strokes_keep_alignment_and_weight() {
        let style = WireframeStyle::default();
        let original = Strokes {
            paints: vec![Paint::solid(PaintColor::rgb(1.0, 0.0, 0.0)); 2],
            align: crate::node::StrokeAlign::Outside,
            weight: 3.0,
        };
        let converted = wireframe_strokes(&original, &style);
        assert_eq!(converted.paints, vec![Paint::solid(style.colors().stroke)]);
        assert_eq!(converted.align, crate::node::StrokeAlign::Outside);
        assert!((converted.weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wireframe_strokes_never_adds_strokes() {
        let style = WireframeStyle::default();
        let converted = wireframe_strokes(&Strokes::default(), &style);
        assert!(converted.paints.is_empty());
    }

    #[test]
    fn test_corner_radius_rounded_and_sharp() {
        let rounded = WireframeStyle::default();
        let sharp = WireframeStyle::new(&ConversionOptions {
            rounded_corners: false,
            ..ConversionOptions::default()
        });

        let mut rect = SceneNode::rectangle("r");
        apply_corner_radius(&mut rect, &rounded);
        assert_eq!(rect.corners(), Some(&CornerRadii::uniform(8.0)));

        let mut rounded_source = SceneNode::frame("f").with_corners(CornerRadii::uniform(24.0));
        apply_corner_radius(&mut rounded_source, &sharp);
        assert_eq!(rounded_source.corners(), Some(&CornerRadii::uniform(0.0)));

        let mut ellipse = SceneNode::ellipse("e");
        apply_corner_radius(&mut ellipse, &rounded);
        assert!(ellipse.corners().is_none());
    }

    #[test]
    fn test_single_paint() {
        assert!(single_paint(None).is_empty());
        assert_eq!(
            single_paint(Some(PaintColor::black())),
            vec![Paint::solid(PaintColor::black())]
        );
    }
}
