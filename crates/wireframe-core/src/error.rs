//! Error types for wireframe conversion.

use crate::node::NodeId;
use thiserror::Error;

/// Result type for wireframe operations.
pub type WireframeResult<T> = Result<T, WireframeError>;

/// Errors that can occur while resolving configuration or converting nodes.
#[derive(Debug, Error)]
pub enum WireframeError {
    /// Theme name outside the closed set of known themes.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// A node id did not resolve to a node.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Attempted to attach children to a node that cannot hold them.
    #[error("Node {0} cannot hold children")]
    NotAContainer(NodeId),

    /// The host refused to duplicate a selected root.
    #[error("Node '{0}' cannot be cloned")]
    NonCloneable(String),

    /// The host could not load the requested font.
    #[error("Font unavailable: {family} {style}")]
    FontUnavailable { family: String, style: String },

    /// A loaded document does not form a tree.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A conversion was requested with nothing selected.
    #[error("Nothing selected")]
    EmptySelection,

    /// Any other failure reported by the host.
    #[error("Host error: {0}")]
    Host(String),

    /// Message or document (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
