//! Editor sync bridge.
//!
//! Owns one editor instance and its plain-text mirror field, and reconciles
//! inbound remote updates against local edit state. The three-way guard in
//! [`SyncBridge::apply_remote_update`] prevents cross-talk between instances,
//! echo re-render loops, and loss of unsaved keystrokes.

use tracing::{debug, trace};

use crate::channel::RemoteUpdate;
use crate::editor::EditorSurface;
use crate::error::{Error, Result};
use crate::host::{HostElement, MirrorField};

/// Disposition of one inbound remote update.
///
/// Rejections are expected routing noise on a multi-instance page, never
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Guard passed; mirror and editor were rewritten.
    Applied,
    /// The message targets a different document instance.
    IdMismatch,
    /// The value already matches the editor content; no write performed.
    Unchanged,
    /// A local edit is pending; the remote value was dropped to protect
    /// unsaved keystrokes.
    LocallyDirty,
}

/// One mounted document instance: editor, mirror field, and edit state.
///
/// Constructed by [`SyncBridge::mount`] (the instance is Ready from then on)
/// and consumed by [`SyncBridge::unmount`], which destroys the editor. The
/// mirror and the editor buffer are the only mutable shared state, and both
/// are owned exclusively here.
#[derive(Debug)]
pub struct SyncBridge<E: EditorSurface> {
    id: String,
    editor: E,
    mirror: MirrorField,
    changed_since_update: bool,
}

impl<E: EditorSurface> SyncBridge<E> {
    /// Mount against a host element: locate the editor mount node and bind a
    /// new editor instance to it, then seed the mirror from the editor.
    ///
    /// # Errors
    /// Fatal for the instance if the mount node is absent or the editor
    /// backend fails to initialize; no partial state is left behind.
    pub fn mount(host: HostElement) -> Result<Self> {
        let (id, editor_node, mut mirror) = host.into_parts();
        let node = editor_node.ok_or_else(|| Error::MountNodeMissing { id: id.clone() })?;
        let editor = E::instantiate(&node).map_err(|err| Error::EditorInit {
            id: id.clone(),
            reason: err.to_string(),
        })?;
        mirror.set_value(&editor.markdown());
        trace!(%id, "sync bridge mounted");
        Ok(Self {
            id,
            editor,
            mirror,
            changed_since_update: false,
        })
    }

    /// Identifier of this document instance.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The editor handle.
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Current value of the plain-text mirror field.
    pub fn mirror_value(&self) -> &str {
        self.mirror.value()
    }

    /// Whether a local edit occurred since the last applied remote update or
    /// mirror flush.
    pub const fn is_dirty(&self) -> bool {
        self.changed_since_update
    }

    /// Apply a remote content update if the guard passes.
    ///
    /// Guard order: the message must target this instance, the value must
    /// differ from the editor's current serialization, and no local edit may
    /// be pending. Missing content normalizes to `""` before comparison, so
    /// the editor and mirror never see a null-ish sentinel.
    pub fn apply_remote_update(&mut self, update: &RemoteUpdate) -> UpdateOutcome {
        if update.id != self.id {
            trace!(id = %self.id, target = %update.id, "remote update for another instance");
            return UpdateOutcome::IdMismatch;
        }
        let value = update.normalized_value();
        if value == self.editor.markdown() {
            debug!(id = %self.id, "remote update matches editor content, skipped");
            return UpdateOutcome::Unchanged;
        }
        if self.changed_since_update {
            debug!(id = %self.id, "remote update dropped, local edits pending");
            return UpdateOutcome::LocallyDirty;
        }
        self.mirror.set_value(value);
        self.editor.set_markdown(value);
        self.changed_since_update = false;
        debug!(id = %self.id, len = value.len(), "remote update applied");
        UpdateOutcome::Applied
    }

    /// Run a local edit against the editor.
    ///
    /// The single entry point for local changes: refreshes the mirror from
    /// the editor afterwards and marks the instance dirty so the next remote
    /// update cannot clobber the edit.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut E),
    {
        f(&mut self.editor);
        self.mirror.set_value(&self.editor.markdown());
        self.changed_since_update = true;
    }

    /// Read the mirror for out-of-band form submission and clear the dirty
    /// flag: once the value is handed to the controller, the next remote
    /// update (usually the echo of this very content) may apply again.
    pub fn flush_for_submit(&mut self) -> &str {
        self.changed_since_update = false;
        self.mirror.value()
    }

    /// Tear the instance down, destroying the editor. Terminal.
    pub fn unmount(mut self) {
        trace!(id = %self.id, "sync bridge unmounted");
        self.editor.destroy();
    }
}
