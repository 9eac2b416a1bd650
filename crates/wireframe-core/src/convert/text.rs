//! Text conversion.

use crate::contrast::resolve_contrast;
use crate::error::WireframeResult;
use crate::host::Host;
use crate::node::{NodeId, TextAutoResize};
use crate::paint::Paint;
use crate::style::WireframeStyle;
use crate::theme::FontSpec;
use kurbo::Size;
use std::collections::HashSet;

/// Tracks which fonts were loaded during one run so each is requested from
/// the host once.
#[derive(Debug, Default)]
pub struct FontLoader {
    loaded: HashSet<FontSpec>,
}

impl FontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `font` unless this run already did.
    pub fn ensure_loaded<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        font: &FontSpec,
    ) -> WireframeResult<()> {
        if self.loaded.contains(font) {
            return Ok(());
        }
        host.load_font(font)?;
        self.loaded.insert(font.clone());
        Ok(())
    }

    pub fn is_loaded(&self, font: &FontSpec) -> bool {
        self.loaded.contains(font)
    }
}

/// Size a text box must have after a font change, given its original
/// auto-resize mode, its size before the change and the size the host laid
/// it out at afterwards.
pub fn restored_text_size(mode: TextAutoResize, original: Size, relaid: Size) -> Size {
    match mode {
        TextAutoResize::None | TextAutoResize::Truncate => original,
        TextAutoResize::Height => Size::new(original.width, relaid.height),
        TextAutoResize::WidthAndHeight => relaid,
    }
}

/// Recolor a text node and switch it to the style font.
///
/// Fill and font are changed first; the box is then resized according to the
/// auto-resize mode the node had before conversion, since the font change
/// may itself have resized it.
pub fn convert_text<H: Host + ?Sized>(
    host: &mut H,
    id: NodeId,
    style: &WireframeStyle,
    fonts: &mut FontLoader,
) -> WireframeResult<()> {
    let (color, position, size, font_size, auto_resize) = {
        let node = host.get(id)?;
        let Some(text) = node.as_text() else {
            return Ok(());
        };
        let parent = host.parent_of(node);
        (
            resolve_contrast(node, parent, style),
            node.position,
            node.size,
            text.font_size,
            text.auto_resize,
        )
    };

    if let Some(fills) = host.get_mut(id)?.paints_mut() {
        *fills = vec![Paint::solid(color)];
    }

    fonts.ensure_loaded(host, &style.font)?;
    host.set_font(id, &style.font)?;

    let node = host.get_mut(id)?;
    if let Some(text) = node.as_text_mut() {
        text.font_size = font_size;
        text.auto_resize = auto_resize;
    }
    node.position = position;
    node.size = restored_text_size(auto_resize, size, node.size);
    Ok(())
}
