//! Name-based node classification.
//!
//! These are heuristics over free-text layer names: a frame called
//! "Notification icons" is an icon container whether or not it holds icons,
//! and an icon container named "Glyphs" is missed. Converters only consume
//! [`NodeClass`], so a structural classifier can replace this one later.

use crate::node::SceneNode;

/// Role of a node as guessed from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Plain,
    /// Holds icon glyphs; its background must stay transparent.
    IconContainer,
    /// A tab bar or similar group of tabs.
    TabContainer,
    /// A single tab.
    Tab,
    /// Holds a logo; its background must stay transparent.
    LogoContainer,
}

impl NodeClass {
    /// Containers whose own background would obscure their content.
    pub fn keeps_transparent_background(&self) -> bool {
        matches!(self, NodeClass::IconContainer | NodeClass::LogoContainer)
    }
}

/// Classify a node by its name (case-insensitive).
pub fn classify(node: &SceneNode) -> NodeClass {
    let name = node.name.to_lowercase();
    if name.contains("iconbutton") || (name.contains("icon") && node.is_container()) {
        NodeClass::IconContainer
    } else if name.contains("logo") {
        NodeClass::LogoContainer
    } else if name == "tab" || name.contains(".tab") {
        NodeClass::Tab
    } else if name.contains("tab") && !name.contains("button") {
        NodeClass::TabContainer
    } else {
        NodeClass::Plain
    }
}

/// Whether a vector sits in a button or icon, judged from its own and its
/// parent's names.
pub fn in_icon_context(node: &SceneNode, parent: Option<&SceneNode>) -> bool {
    let Some(parent) = parent else {
        return false;
    };
    let parent_name = parent.name.to_lowercase();
    parent_name.contains("button")
        || parent_name.contains("icon")
        || node.name.to_lowercase().contains("icon")
}
