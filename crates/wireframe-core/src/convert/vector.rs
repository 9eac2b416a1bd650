//! Vector conversion.

use super::single_paint;
use crate::classify::in_icon_context;
use crate::contrast::resolve_contrast;
use crate::error::WireframeResult;
use crate::host::Host;
use crate::node::{NodeId, SceneNode};
use crate::paint::PaintColor;
use crate::predicates::{has_dark_fill, has_non_white_fills, has_visible_fills};
use crate::style::WireframeStyle;

/// Replacement fill for a vector; `None` means transparent.
///
/// Icons take a contrast color so they stay readable on their container.
pub fn vector_fill(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    style: &WireframeStyle,
) -> Option<PaintColor> {
    let paints = node.paints().unwrap_or_default();
    let colors = style.colors();

    if !has_visible_fills(paints) {
        None
    } else if in_icon_context(node, parent) {
        Some(resolve_contrast(node, parent, style))
    } else if !has_non_white_fills(paints) {
        Some(colors.background)
    } else if has_dark_fill(paints, style.kind()) {
        Some(colors.fill_inverted)
    } else {
        Some(colors.content)
    }
}

/// Restyle a vector in place. Wireframe vectors never keep strokes.
pub fn convert_vector<H: Host + ?Sized>(
    host: &mut H,
    id: NodeId,
    style: &WireframeStyle,
) -> WireframeResult<()> {
    let fill = {
        let node = host.get(id)?;
        vector_fill(node, host.parent_of(node), style)
    };

    let node = host.get_mut(id)?;
    if let Some(paints) = node.paints_mut() {
        *paints = single_paint(fill);
    }
    if let Some(strokes) = node.strokes_mut() {
        strokes.paints.clear();
    }
    Ok(())
}
