//! Frame, component and instance conversion.

use super::{apply_corner_radius, single_paint, wireframe_strokes};
use crate::classify::classify;
use crate::error::WireframeResult;
use crate::host::Host;
use crate::node::{NodeId, NodeKind, SceneNode};
use crate::paint::PaintColor;
use crate::predicates::{has_dark_fill, has_non_white_fills, has_visible_fills};
use crate::style::WireframeStyle;

/// Replacement background for a container; `None` means transparent.
///
/// Icon and logo containers always end up transparent so they never cover
/// their content.
pub fn container_background(node: &SceneNode, style: &WireframeStyle) -> Option<PaintColor> {
    let backgrounds = node.paints().unwrap_or_default();
    let colors = style.colors();

    if !has_visible_fills(backgrounds) || classify(node).keeps_transparent_background() {
        None
    } else if !has_non_white_fills(backgrounds) {
        Some(colors.background)
    } else if has_dark_fill(backgrounds, style.kind()) {
        Some(colors.fill_inverted)
    } else {
        Some(colors.fill)
    }
}

/// Restyle a container's own background, strokes and corners.
///
/// Per-edge stroke weights are left as they were. Children are visited by
/// the traversal, after this returns.
pub fn convert_container<H: Host + ?Sized>(
    host: &mut H,
    id: NodeId,
    style: &WireframeStyle,
) -> WireframeResult<()> {
    let node = host.get_mut(id)?;
    let background = container_background(node, style);

    if let NodeKind::Container(container) = &mut node.kind {
        container.backgrounds = single_paint(background);
        container.strokes = wireframe_strokes(&container.strokes, style);
    }
    apply_corner_radius(node, style);
    Ok(())
}
