//! In-memory host implementation.

use crate::document::SceneDocument;
use crate::error::{WireframeError, WireframeResult};
use crate::host::Host;
use crate::message::CoreMessage;
use crate::node::{NodeId, SceneNode, TextAutoResize, TextNode};
use crate::theme::FontSpec;
use kurbo::Size;
use std::collections::HashSet;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Host backed by a [`SceneDocument`], for tests and headless conversion.
///
/// Everything the converter tells the UI or the user is recorded so callers
/// can inspect it afterwards.
#[derive(Debug, Default)]
pub struct MemoryHost {
    document: SceneDocument,
    selection: Vec<NodeId>,
    /// `None` means every font can be loaded.
    available_fonts: Option<HashSet<FontSpec>>,
    loaded_fonts: HashSet<FontSpec>,
    font_loads: Vec<FontSpec>,
    locked: HashSet<NodeId>,
    notifications: Vec<String>,
    messages: Vec<CoreMessage>,
    viewport: Vec<NodeId>,
    closed: bool,
}

impl MemoryHost {
    /// Create a host over a document with an empty selection.
    pub fn new(document: SceneDocument) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: Vec<NodeId>) -> Self {
        self.selection = selection;
        self
    }

    /// Restrict loadable fonts to `fonts`.
    pub fn with_available_fonts(mut self, fonts: impl IntoIterator<Item = FontSpec>) -> Self {
        self.available_fonts = Some(fonts.into_iter().collect());
        self
    }

    /// Mark a node as impossible to duplicate.
    pub fn lock(&mut self, id: NodeId) {
        self.locked.insert(id);
    }

    pub fn document(&self) -> &SceneDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut SceneDocument {
        &mut self.document
    }

    pub fn into_document(self) -> SceneDocument {
        self.document
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Messages posted to the UI, oldest first.
    pub fn messages(&self) -> &[CoreMessage] {
        &self.messages
    }

    /// Nodes the viewport was last asked to show.
    pub fn viewport(&self) -> &[NodeId] {
        &self.viewport
    }

    /// Every successful font load request, in order.
    pub fn font_loads(&self) -> &[FontSpec] {
        &self.font_loads
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Average glyph advance as a fraction of the font size.
fn glyph_advance(font: &FontSpec) -> f64 {
    match font.family.as_str() {
        "Figma Hand" => 0.55,
        "Times New Roman" => 0.45,
        _ => 0.5,
    }
}

/// Lay out a text box for `font`, honoring its auto-resize mode.
fn layout_text(text: &TextNode, font: &FontSpec, current: Size) -> Size {
    let advance = text.font_size * glyph_advance(font);
    let line_height = text.font_size * LINE_HEIGHT;
    match text.auto_resize {
        TextAutoResize::WidthAndHeight => Size::new(
            text.longest_line() as f64 * advance,
            text.line_count() as f64 * line_height,
        ),
        TextAutoResize::Height => {
            let rows: usize = if current.width <= 0.0 {
                text.line_count()
            } else {
                text.characters
                    .lines()
                    .map(|line| {
                        let width = line.chars().count() as f64 * advance;
                        ((width / current.width).ceil() as usize).max(1)
                    })
                    .sum::<usize>()
                    .max(1)
            };
            Size::new(current.width, rows as f64 * line_height)
        }
        TextAutoResize::None | TextAutoResize::Truncate => current,
    }
}

impl Host for MemoryHost {
    fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.document.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.document.get_mut(id)
    }

    fn selection(&self) -> Vec<NodeId> {
        self.selection.clone()
    }

    fn clone_subtree(&mut self, id: NodeId) -> WireframeResult<NodeId> {
        if self.locked.contains(&id) {
            let name = self.get(id)?.name.clone();
            return Err(WireframeError::NonCloneable(name));
        }
        self.document.duplicate(id)
    }

    fn load_font(&mut self, font: &FontSpec) -> WireframeResult<()> {
        if let Some(available) = &self.available_fonts {
            if !available.contains(font) {
                return Err(WireframeError::FontUnavailable {
                    family: font.family.clone(),
                    style: font.style.clone(),
                });
            }
        }
        self.loaded_fonts.insert(font.clone());
        self.font_loads.push(font.clone());
        Ok(())
    }

    fn set_font(&mut self, id: NodeId, font: &FontSpec) -> WireframeResult<()> {
        if !self.loaded_fonts.contains(font) {
            return Err(WireframeError::Host(format!("Font {} has not been loaded", font)));
        }
        let node = self.get_mut(id)?;
        let current = node.size;
        let Some(text) = node.as_text_mut() else {
            return Err(WireframeError::Host(format!("Node {} is not a text node", id)));
        };
        text.font = font.clone();
        let relaid = layout_text(text, font, current);
        node.size = relaid;
        Ok(())
    }

    fn set_selection(&mut self, ids: &[NodeId]) {
        self.selection = ids.to_vec();
    }

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]) {
        self.viewport = ids.to_vec();
    }

    fn notify(&mut self, message: &str) {
        log::info!("Notification: {}", message);
        self.notifications.push(message.to_string());
    }

    fn post_message(&mut self, message: &CoreMessage) {
        log::trace!("UI message: {:?}", message);
        self.messages.push(*message);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
