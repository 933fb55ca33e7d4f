//! Mount-time error types.
//!
//! Every variant here is fatal for the document instance: a half-initialized
//! bridge would misapply or drop every subsequent update, so mount failures
//! propagate to the caller and leave no listener registered.

use thiserror::Error;

/// Errors raised while mounting a document instance.
#[derive(Debug, Error)]
pub enum Error {
    /// The host subtree has no editor mount node.
    #[error("host `{id}`: editor mount node not found")]
    MountNodeMissing {
        /// Identifier of the host element.
        id: String,
    },

    /// The editor library failed to bind to the mount node.
    #[error("host `{id}`: editor failed to initialize: {reason}")]
    EditorInit {
        /// Identifier of the host element.
        id: String,
        /// Backend-reported failure description.
        reason: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
