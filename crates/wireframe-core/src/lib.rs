//! Wireframe Core Library
//!
//! Host-agnostic style resolution and tree conversion for turning design
//! documents into themed wireframes.

pub mod classify;
pub mod contrast;
pub mod convert;
pub mod document;
pub mod error;
pub mod host;
pub mod memory;
pub mod message;
pub mod node;
pub mod paint;
pub mod predicates;
pub mod session;
pub mod style;
pub mod theme;
pub mod traversal;

pub use classify::{NodeClass, classify};
pub use contrast::resolve_contrast;
pub use document::SceneDocument;
pub use error::{WireframeError, WireframeResult};
pub use host::Host;
pub use memory::MemoryHost;
pub use message::{CoreMessage, UiMessage};
pub use node::{NodeId, NodeKind, NodeType, SceneNode};
pub use paint::{Paint, PaintColor, PaintKind};
pub use session::{ConversionReport, SessionConfig, SessionController, SessionOutcome};
pub use style::{ConversionOptions, WireframeStyle};
pub use theme::{FontChoice, FontSpec, Palette, Theme, ThemeKind};
pub use traversal::{ConversionProgress, ProgressThrottle, TraversalReport, convert_tree};
