//! In-memory scene document.

use crate::error::{WireframeError, WireframeResult};
use crate::node::{NodeId, SceneNode};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// A design document: a flat node table plus the ordered top-level nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Document name.
    pub name: String,
    /// All nodes in the document, keyed by ID.
    pub nodes: HashMap<NodeId, SceneNode>,
    /// Top-level nodes (back to front).
    pub roots: Vec<NodeId>,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            name: "Untitled".to_string(),
            nodes: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Add a top-level node.
    pub fn add_root(&mut self, mut node: SceneNode) -> NodeId {
        let id = node.id;
        node.parent = None;
        self.roots.push(id);
        self.nodes.insert(id, node);
        id
    }

    /// Append a node to the children of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> WireframeResult<NodeId> {
        let id = node.id;
        let children = self
            .nodes
            .get_mut(&parent)
            .ok_or(WireframeError::NodeNotFound(parent))?
            .children_mut()
            .ok_or(WireframeError::NotAContainer(parent))?;
        children.push(id);
        node.parent = Some(parent);
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Find the first node with the given name (roots first, then depth-first).
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if node.name == name {
                return Some(id);
            }
            stack.extend(node.children().iter().rev().copied());
        }
        None
    }

    /// Deep-copy the subtree rooted at `id`, assigning fresh ids.
    ///
    /// The copy is inserted directly after the original in its parent's
    /// child list (or among the roots) and its id is returned.
    pub fn duplicate(&mut self, id: NodeId) -> WireframeResult<NodeId> {
        let original = self.nodes.get(&id).ok_or(WireframeError::NodeNotFound(id))?;
        let parent = original.parent;

        let new_id = self.copy_subtree(id, parent)?;

        let siblings = match parent {
            Some(parent_id) => self
                .nodes
                .get_mut(&parent_id)
                .and_then(SceneNode::children_mut)
                .ok_or(WireframeError::NotAContainer(parent_id))?,
            None => &mut self.roots,
        };
        let index = siblings
            .iter()
            .position(|&sibling| sibling == id)
            .map_or(siblings.len(), |pos| pos + 1);
        siblings.insert(index, new_id);
        Ok(new_id)
    }

    fn copy_subtree(&mut self, id: NodeId, parent: Option<NodeId>) -> WireframeResult<NodeId> {
        let root_copy = Uuid::new_v4();
        let mut stack = vec![(id, root_copy, parent)];
        while let Some((source, new_id, new_parent)) = stack.pop() {
            let mut copy = self
                .nodes
                .get(&source)
                .cloned()
                .ok_or(WireframeError::NodeNotFound(source))?;
            copy.id = new_id;
            copy.parent = new_parent;
            if let Some(children) = copy.children_mut() {
                for child in children.iter_mut() {
                    let child_copy = Uuid::new_v4();
                    stack.push((*child, child_copy, Some(new_id)));
                    *child = child_copy;
                }
            }
            self.nodes.insert(new_id, copy);
        }
        Ok(root_copy)
    }

    /// Rebuild every `parent` back reference from the child lists.
    pub fn relink(&mut self) {
        let links: Vec<(NodeId, NodeId)> = self
            .nodes
            .values()
            .flat_map(|node| node.children().iter().map(move |&child| (child, node.id)))
            .collect();
        for node in self.nodes.values_mut() {
            node.parent = None;
        }
        for (child, parent) in links {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.parent = Some(parent);
            }
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> WireframeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the child lists form a forest over the node table.
    ///
    /// Every node must be keyed by its own id and reachable from exactly one
    /// root along exactly one path, which rules out cycles and shared children.
    pub fn validate(&self) -> WireframeResult<()> {
        if let Some((key, node)) = self.nodes.iter().find(|(key, node)| **key != node.id) {
            return Err(WireframeError::InvalidDocument(format!(
                "node stored under {} has id {}",
                key, node.id
            )));
        }

        let mut seen = HashSet::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.clone();
        while let Some(id) = stack.pop() {
            let node = self.nodes.get(&id).ok_or_else(|| {
                WireframeError::InvalidDocument(format!("reference to missing node {}", id))
            })?;
            if !seen.insert(id) {
                return Err(WireframeError::InvalidDocument(format!(
                    "node {} is reachable more than once",
                    id
                )));
            }
            stack.extend_from_slice(node.children());
        }

        if seen.len() != self.nodes.len() {
            return Err(WireframeError::InvalidDocument(format!(
                "{} node(s) are not reachable from the roots",
                self.nodes.len() - seen.len()
            )));
        }
        Ok(())
    }

    /// Parse from JSON, validating the tree and restoring parent links.
    pub fn from_json(json: &str) -> WireframeResult<Self> {
        let mut document: SceneDocument = serde_json::from_str(json)?;
        document.validate()?;
        document.relink();
        Ok(document)
    }
}
