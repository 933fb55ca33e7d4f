//! Boundary to the rich-text editor library.
//!
//! The bridge never touches editor internals; it drives the editor through
//! [`EditorSurface`] only. [`EditorBuffer`] is the built-in rope-backed
//! implementation for headless embedders and tests.

mod buffer;

pub use buffer::EditorBuffer;

use thiserror::Error;

use crate::host::EditorNode;

/// Failure reported by an editor backend during instantiation.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct EditorInitError {
    reason: String,
}

impl EditorInitError {
    /// Wrap a backend failure description.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// One rich-text editor instance bound to a mount node.
///
/// Implementations own the editor's internal resources; `destroy` releases
/// them and must be the last call on the handle.
pub trait EditorSurface: Sized {
    /// Bind a new editor instance to the mount node.
    ///
    /// # Errors
    /// Returns an error if the backend cannot initialize against the node.
    fn instantiate(node: &EditorNode) -> Result<Self, EditorInitError>;

    /// The plain-text (markdown) serialization of the current content.
    fn markdown(&self) -> String;

    /// Replace the content from its plain-text serialization.
    fn set_markdown(&mut self, value: &str);

    /// Release internal resources (internal nodes, internal listeners).
    fn destroy(&mut self);
}
