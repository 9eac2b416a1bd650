//! Foreground color resolution against a node's surroundings.

use crate::node::{NodeType, SceneNode};
use crate::paint::PaintColor;
use crate::predicates::{has_dark_fill, has_fill_color};
use crate::style::WireframeStyle;
use crate::theme::ThemeKind;

/// Detect the nested-square collision: a rectangle or frame inside a
/// rectangle or frame whose fill would match the child's own converted fill.
///
/// Matches under blueprint when the parent carries `fill_inverted`, and under
/// dark-mode when the parent carries `fill`.
pub fn is_bottom_left_square(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    style: &WireframeStyle,
) -> bool {
    let Some(parent) = parent else {
        return false;
    };
    if !node.is_rectangle_or_frame() || !parent.is_rectangle_or_frame() {
        return false;
    }
    let parent_paints = parent.paints().unwrap_or_default();
    let colors = style.colors();
    match style.kind() {
        ThemeKind::Blueprint => has_fill_color(parent_paints, &colors.fill_inverted),
        ThemeKind::DarkMode => has_fill_color(parent_paints, &colors.fill),
        ThemeKind::Mono => false,
    }
}

/// Pick a foreground color that stays legible on the node's parent.
///
/// Rules are tried in order and the first match wins. Under dark-mode the
/// returned `content_light` is the theme's dark gray, used for text on that
/// theme's light surfaces.
pub fn resolve_contrast(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    style: &WireframeStyle,
) -> PaintColor {
    let colors = style.colors();
    let theme = style.kind();
    let parent_paints = parent.and_then(SceneNode::paints).unwrap_or_default();
    let parent_bears_paint = parent.is_some_and(SceneNode::is_paint_bearing);

    if node.node_type() == NodeType::Text && parent_bears_paint {
        if theme == ThemeKind::DarkMode
            && (has_fill_color(parent_paints, &colors.fill_inverted)
                || has_fill_color(parent_paints, &colors.background))
        {
            return colors.content_light;
        }

        if has_dark_fill(parent_paints, theme) || theme == ThemeKind::DarkMode {
            return colors.content_light;
        }
    }

    if parent_bears_paint && is_bottom_left_square(node, parent, style) {
        return colors.content_light;
    }

    if theme == ThemeKind::Blueprint && has_fill_color(parent_paints, &colors.fill) {
        return colors.content_light;
    }

    colors.content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Paint;
    use crate::style::ConversionOptions;

    fn style(theme: ThemeKind) -> WireframeStyle {
        WireframeStyle::new(&ConversionOptions {
            theme,
            ..ConversionOptions::default()
        })
    }

    fn filled_rect(color: PaintColor) -> SceneNode {
        SceneNode::rectangle("parent").with_fills(vec![Paint::solid(color)])
    }

    fn filled_frame(color: PaintColor) -> SceneNode {
        SceneNode::frame("parent").with_fills(vec![Paint::solid(color)])
    }

    #[test]
    fn test_text_on_dark_parent_gets_light_content() {
        let style = style(ThemeKind::Mono);
        let parent = filled_rect(PaintColor::rgb(0.05, 0.05, 0.05));
        let text = SceneNode::text("label", "Hi");
        assert_eq!(resolve_contrast(&text, Some(&parent), &style), style.colors().content_light);
    }

    #[test]
    fn test_text_on_light_parent_gets_content() {
        let style = style(ThemeKind::Mono);
        let parent = filled_rect(PaintColor::rgb(0.9, 0.9, 0.9));
        let text = SceneNode::text("label", "Hi");
        assert_eq!(resolve_contrast(&text, Some(&parent), &style), style.colors().content);
    }

    #[test]
    fn test_text_without_parent_gets_content() {
        let style = style(ThemeKind::DarkMode);
        let text = SceneNode::text("label", "Hi");
        assert_eq!(resolve_contrast(&text, None, &style), style.colors().content);
    }

    #[test]
    fn test_dark_mode_text_on_inverted_or_background_surface() {
        let style = style(ThemeKind::DarkMode);
        let text = SceneNode::text("label", "Hi");
        for color in [style.colors().fill_inverted, style.colors().background] {
            let parent = filled_frame(color);
            assert_eq!(
                resolve_contrast(&text, Some(&parent), &style),
                style.colors().content_light
            );
        }
    }

    #[test]
    fn test_dark_mode_text_on_any_painted_parent_is_biased() {
        let style = style(ThemeKind::DarkMode);
        let parent = filled_rect(PaintColor::rgb(0.95, 0.95, 0.95));
        let text = SceneNode::text("label", "Hi");
        assert_eq!(resolve_contrast(&text, Some(&parent), &style), style.colors().content_light);
    }

    #[test]
    fn test_dark_mode_text_on_unpainted_parent_gets_content() {
        let style = style(ThemeKind::DarkMode);
        let parent = SceneNode::frame("empty");
        let text = SceneNode::text("label", "Hi");
        assert_eq!(resolve_contrast(&text, Some(&parent), &style), style.colors().content);
    }

    #[test]
    fn test_bottom_left_square_detection() {
        let blueprint = style(ThemeKind::Blueprint);
        let dark = style(ThemeKind::DarkMode);
        let mono = style(ThemeKind::Mono);
        let square = SceneNode::rectangle("square");

        let navy = filled_frame(blueprint.colors().fill_inverted);
        assert!(is_bottom_left_square(&square, Some(&navy), &blueprint));
        assert!(!is_bottom_left_square(&square, Some(&navy), &dark));

        let dark_fill = filled_rect(dark.colors().fill);
        assert!(is_bottom_left_square(&square, Some(&dark_fill), &dark));
        assert!(!is_bottom_left_square(&square, Some(&dark_fill), &mono));

        let ellipse = SceneNode::ellipse("dot");
        assert!(!is_bottom_left_square(&ellipse, Some(&navy), &blueprint));

        let component = SceneNode::component("parent")
            .with_fills(vec![Paint::solid(blueprint.colors().fill_inverted)]);
        assert!(!is_bottom_left_square(&square, Some(&component), &blueprint));
        assert!(!is_bottom_left_square(&square, None, &blueprint));
    }

    #[test]
    fn test_square_in_square_resolves_to_content_light() {
        let style = style(ThemeKind::Blueprint);
        let parent = filled_frame(style.colors().fill_inverted);
        let square = SceneNode::rectangle("square");
        assert_eq!(resolve_contrast(&square, Some(&parent), &style), style.colors().content_light);
    }

    #[test]
    fn test_blueprint_fill_parent_requires_light_content() {
        let style = style(ThemeKind::Blueprint);
        let parent = filled_frame(style.colors().fill);
        let vector = SceneNode::vector("icon");
        assert_eq!(resolve_contrast(&vector, Some(&parent), &style), style.colors().content_light);
    }

    #[test]
    fn test_default_is_content() {
        let style = style(ThemeKind::Blueprint);
        let parent = filled_frame(PaintColor::rgb(0.9, 0.9, 0.9));
        let vector = SceneNode::vector("icon");
        assert_eq!(resolve_contrast(&vector, Some(&parent), &style), style.colors().content);
    }
}
