//! Rectangle, ellipse and polygon conversion.

use super::{apply_corner_radius, single_paint, wireframe_strokes};
use crate::contrast::is_bottom_left_square;
use crate::error::WireframeResult;
use crate::host::Host;
use crate::node::{NodeId, SceneNode};
use crate::paint::PaintColor;
use crate::predicates::{has_dark_fill, has_non_white_fills, has_visible_fills};
use crate::style::WireframeStyle;

/// Replacement fill for a shape; `None` means transparent.
///
/// Darkness is judged on the shape's own fill, not its parent's.
pub fn shape_fill(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    style: &WireframeStyle,
) -> Option<PaintColor> {
    let paints = node.paints().unwrap_or_default();
    let colors = style.colors();

    if !has_visible_fills(paints) {
        None
    } else if is_bottom_left_square(node, parent, style) {
        Some(colors.content_light)
    } else if !has_non_white_fills(paints) {
        Some(colors.background)
    } else if has_dark_fill(paints, style.kind()) {
        Some(colors.fill_inverted)
    } else {
        Some(colors.fill)
    }
}

/// Restyle a shape in place. Position and size are restored exactly.
pub fn convert_shape<H: Host + ?Sized>(
    host: &mut H,
    id: NodeId,
    style: &WireframeStyle,
) -> WireframeResult<()> {
    let (fill, position, size) = {
        let node = host.get(id)?;
        let parent = host.parent_of(node);
        (shape_fill(node, parent, style), node.position, node.size)
    };

    let node = host.get_mut(id)?;
    if let Some(paints) = node.paints_mut() {
        *paints = single_paint(fill);
    }
    if let Some(strokes) = node.strokes_mut() {
        *strokes = wireframe_strokes(strokes, style);
    }
    apply_corner_radius(node, style);

    node.position = position;
    node.size = size;
    Ok(())
}
