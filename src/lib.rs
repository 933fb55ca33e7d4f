// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Markbridge
//!
//! A headless sync and drag-detection core for an embedded markdown editor.
//!
//! Markbridge mediates between a rich-text editing surface, a hidden
//! plain-text mirror field, and a bidirectional update channel to a remote
//! controller that owns the canonical document state. It handles the two
//! parts of that arrangement with real state-machine behavior:
//!
//! - **Drag gesture detection**: page-wide drag events fire once per DOM
//!   element boundary crossed; [`drag::DragDetector`] debounces them into
//!   coarse `dragstart`/`dragend` notifications per gesture.
//! - **Editor/remote reconciliation**: [`bridge::SyncBridge`] applies inbound
//!   content updates behind a three-way guard (instance id, value changed,
//!   no pending local edit) so remote echoes never clobber keystrokes.
//!
//! Rendering, markdown grammar and upload transport live elsewhere; this
//! crate only models the boundaries ([`editor::EditorSurface`],
//! [`channel::RemoteChannel`], [`host::HostElement`]).
//!
//! ## Modules
//!
//! - [`component`]: Mount/unmount lifecycle wiring
//! - [`drag`]: Drag gesture detector
//! - [`bridge`]: Editor sync bridge
//! - [`editor`]: Editor surface boundary and rope-backed buffer
//! - [`channel`]: Remote channel boundary and wire messages
//! - [`host`]: Host element model
//! - [`listener`]: Document-wide listener registration
//! - [`error`]: Mount-time errors

pub mod bridge;
pub mod channel;
pub mod component;
pub mod drag;
pub mod editor;
pub mod error;
pub mod host;
pub mod listener;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bridge::{SyncBridge, UpdateOutcome};
    pub use crate::channel::{OutboundEvent, RemoteChannel, RemoteUpdate};
    pub use crate::component::Component;
    pub use crate::drag::{DragDetector, DragEvent, DragPayload, DropEffect};
    pub use crate::editor::{EditorBuffer, EditorSurface};
    pub use crate::error::{Error, Result};
    pub use crate::host::HostElement;
    pub use crate::listener::EventRoot;
}
