//! Visibility and luminance predicates over paints.
//!
//! The luminance model is a fixed heuristic used to sort paints into "dark"
//! and "light", not calibrated colorimetry.

use crate::paint::{Paint, PaintColor};
use crate::theme::ThemeKind;

/// Whether a paint actually renders.
///
/// A paint can be present yet invisible through its visibility flag, a zero
/// opacity, or a zero alpha channel on its color.
pub fn is_effectively_visible(paint: &Paint) -> bool {
    if !paint.visible {
        return false;
    }
    if paint.opacity == Some(0.0) {
        return false;
    }
    if let Some(color) = paint.color() {
        if color.a == Some(0.0) {
            return false;
        }
    }
    true
}

/// True iff at least one paint is effectively visible.
pub fn has_visible_fills(paints: &[Paint]) -> bool {
    paints.iter().any(is_effectively_visible)
}

/// Solid paint whose RGB channels are all within tolerance of 1.0.
pub fn is_white_fill(paint: &Paint) -> bool {
    paint
        .color()
        .is_some_and(|color| color.approx_eq(&PaintColor::white()))
}

/// True iff some effectively-visible paint is not white.
pub fn has_non_white_fills(paints: &[Paint]) -> bool {
    paints
        .iter()
        .any(|paint| is_effectively_visible(paint) && !is_white_fill(paint))
}

/// BT.709 relative luminance.
pub fn luminance(color: &PaintColor) -> f64 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

/// Solid paint darker than the theme's threshold. Non-solid paints are never dark.
pub fn is_dark_fill(paint: &Paint, theme: ThemeKind) -> bool {
    paint
        .color()
        .is_some_and(|color| luminance(&color) < theme.luminance_threshold())
}

/// The paint a viewer actually sees on top of the stack.
///
/// Among visible paints, prefers the topmost (last) solid one, then the
/// topmost of any kind.
pub fn most_visible_paint(paints: &[Paint]) -> Option<&Paint> {
    let visible: Vec<&Paint> = paints
        .iter()
        .filter(|paint| is_effectively_visible(paint))
        .collect();
    match visible.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => visible
            .iter()
            .rev()
            .find(|paint| paint.is_solid())
            .or(visible.last())
            .copied(),
    }
}

/// Whether the topmost visible paint of a stack is dark.
pub fn has_dark_fill(paints: &[Paint], theme: ThemeKind) -> bool {
    most_visible_paint(paints).is_some_and(|paint| is_dark_fill(paint, theme))
}

/// Whether any solid paint in the stack carries `color`, visible or not.
pub fn has_fill_color(paints: &[Paint], color: &PaintColor) -> bool {
    paints
        .iter()
        .filter_map(Paint::color)
        .any(|candidate| candidate.approx_eq(color))
}
