//! Capability surface the converter needs from the host editor.

use crate::error::{WireframeError, WireframeResult};
use crate::message::CoreMessage;
use crate::node::{NodeId, SceneNode};
use crate::theme::FontSpec;

/// The host document and UI, as seen by the converter.
///
/// The host is assumed reliable. All calls happen on one logical thread; a
/// conversion never issues two calls concurrently.
pub trait Host {
    /// Read a node.
    fn node(&self, id: NodeId) -> Option<&SceneNode>;

    /// Mutate a node's paints, strokes, radii or geometry in place.
    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;

    /// Currently selected top-level nodes, in selection order.
    fn selection(&self) -> Vec<NodeId>;

    /// Duplicate a subtree and return the id of the copy.
    fn clone_subtree(&mut self, id: NodeId) -> WireframeResult<NodeId>;

    /// Make a font available for assignment. Idempotent.
    fn load_font(&mut self, font: &FontSpec) -> WireframeResult<()>;

    /// Assign a font to a text node.
    ///
    /// The host re-lays out the text box according to its current
    /// auto-resize mode, which may change its size.
    fn set_font(&mut self, id: NodeId, font: &FontSpec) -> WireframeResult<()>;

    fn set_selection(&mut self, ids: &[NodeId]);

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]);

    /// Show a transient notification to the user.
    fn notify(&mut self, message: &str);

    /// Send a message to the settings UI.
    fn post_message(&mut self, message: &CoreMessage);

    /// End the plugin session.
    fn close(&mut self);

    /// Read a node, failing if it does not exist.
    fn get(&self, id: NodeId) -> WireframeResult<&SceneNode> {
        self.node(id).ok_or(WireframeError::NodeNotFound(id))
    }

    /// Mutate a node, failing if it does not exist.
    fn get_mut(&mut self, id: NodeId) -> WireframeResult<&mut SceneNode> {
        self.node_mut(id).ok_or(WireframeError::NodeNotFound(id))
    }

    /// The parent of a node, if it has one.
    fn parent_of(&self, node: &SceneNode) -> Option<&SceneNode> {
        node.parent.and_then(|parent| self.node(parent))
    }
}
