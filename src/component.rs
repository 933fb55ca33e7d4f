//! Component lifecycle wiring.
//!
//! [`Component`] ties one drag detector and one sync bridge to the same
//! mount/unmount lifecycle and the same outbound channel. The two share no
//! other state. All entry points run to completion on the host runtime's
//! single event queue; ordering between drag events, remote messages and
//! local edits is whatever the runtime delivers.

use tracing::{debug, trace};

use crate::bridge::{SyncBridge, UpdateOutcome};
use crate::channel::{MARKDOWN_UPDATED, RemoteChannel, RemoteUpdate};
use crate::drag::{DragDetector, DragEvent, DragOutcome};
use crate::editor::EditorSurface;
use crate::error::Result;
use crate::host::HostElement;
use crate::listener::{DragEventKind, EventRoot, ListenerGuard};

/// One mounted editing component.
#[derive(Debug)]
pub struct Component<E: EditorSurface, C: RemoteChannel> {
    detector: DragDetector,
    bridge: SyncBridge<E>,
    channel: C,
    _listeners: ListenerGuard,
}

impl<E: EditorSurface, C: RemoteChannel> Component<E, C> {
    /// Mount: register the four drag listeners on the event root and bring
    /// the sync bridge up.
    ///
    /// # Errors
    /// Propagates bridge mount failures; the listener registrations acquired
    /// before the failure are released on unwind, leaving no partial state.
    pub fn mount(host: HostElement, channel: C, root: &EventRoot) -> Result<Self> {
        Self::mount_with(host, channel, root, DragDetector::new())
    }

    /// Mount with a pre-configured drag detector (e.g. a custom end
    /// threshold).
    ///
    /// # Errors
    /// Same as [`Component::mount`].
    pub fn mount_with(
        host: HostElement,
        channel: C,
        root: &EventRoot,
        detector: DragDetector,
    ) -> Result<Self> {
        let listeners = root.register(&DragEventKind::ALL);
        let bridge = SyncBridge::mount(host)?;
        trace!(id = %bridge.id(), "component mounted");
        Ok(Self {
            detector,
            bridge,
            channel,
            _listeners: listeners,
        })
    }

    /// Identifier of this component's document instance.
    pub fn id(&self) -> &str {
        self.bridge.id()
    }

    /// The drag detector.
    pub const fn detector(&self) -> &DragDetector {
        &self.detector
    }

    /// The outbound channel.
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Current value of the plain-text mirror field.
    pub fn mirror_value(&self) -> &str {
        self.bridge.mirror_value()
    }

    /// The editor handle.
    pub const fn editor(&self) -> &E {
        self.bridge.editor()
    }

    /// Whether a local edit is pending.
    pub const fn is_dirty(&self) -> bool {
        self.bridge.is_dirty()
    }

    /// Handle one document-level drag event, pushing any coarse notification
    /// to the remote controller. Returns the outcome so the embedder can
    /// apply the browser-affordance side effects (suppress-default,
    /// drop-effect).
    pub fn on_drag(&mut self, event: &DragEvent) -> DragOutcome {
        let outcome = self.detector.handle(event);
        if let Some(notice) = outcome.notice {
            self.channel.push(notice);
        }
        outcome
    }

    /// Handle one inbound remote message.
    ///
    /// Only `markdown-updated` is subscribed; other event names and
    /// malformed payloads are routing noise and are ignored with a debug
    /// log. Returns the update disposition when the message was for this
    /// subscription.
    pub fn on_remote_message(&mut self, event: &str, payload: &str) -> Option<UpdateOutcome> {
        if event != MARKDOWN_UPDATED {
            trace!(event, "unsubscribed remote event ignored");
            return None;
        }
        match RemoteUpdate::from_json(payload) {
            Ok(update) => Some(self.bridge.apply_remote_update(&update)),
            Err(err) => {
                debug!(%err, "malformed markdown-updated payload ignored");
                None
            }
        }
    }

    /// Apply an already-decoded remote update.
    pub fn apply_remote_update(&mut self, update: &RemoteUpdate) -> UpdateOutcome {
        self.bridge.apply_remote_update(update)
    }

    /// Run a local edit against the editor; marks the instance dirty and
    /// refreshes the mirror.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut E),
    {
        self.bridge.edit(f);
    }

    /// Read the mirror for form submission, clearing the dirty flag.
    pub fn flush_for_submit(&mut self) -> &str {
        self.bridge.flush_for_submit()
    }

    /// Unmount: destroy the editor and release the drag listeners.
    pub fn unmount(self) {
        trace!(id = %self.bridge.id(), "component unmounted");
        self.bridge.unmount();
        // _listeners drops here, releasing the registrations.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::OutboundEvent;
    use crate::drag::DragPayload;
    use crate::editor::EditorBuffer;

    #[derive(Debug, Default)]
    struct RecordingChannel {
        pushed: Vec<OutboundEvent>,
    }

    impl RemoteChannel for RecordingChannel {
        fn push(&mut self, event: OutboundEvent) {
            self.pushed.push(event);
        }
    }

    fn mounted(root: &EventRoot) -> Component<EditorBuffer, RecordingChannel> {
        Component::mount(
            HostElement::new("doc-1"),
            RecordingChannel::default(),
            root,
        )
        .unwrap()
    }

    #[test]
    fn test_drag_notices_reach_the_channel() {
        let root = EventRoot::new();
        let mut component = mounted(&root);
        component.on_drag(&DragEvent::Enter(DragPayload::files()));
        component.on_drag(&DragEvent::Leave);
        assert_eq!(
            component.channel().pushed,
            vec![OutboundEvent::DragStart, OutboundEvent::DragEnd]
        );
    }

    #[test]
    fn test_silent_drag_events_push_nothing() {
        let root = EventRoot::new();
        let mut component = mounted(&root);
        component.on_drag(&DragEvent::Enter(DragPayload::new(["text/plain"])));
        component.on_drag(&DragEvent::Over(DragPayload::new(["text/plain"])));
        assert!(component.channel().pushed.is_empty());
    }

    #[test]
    fn test_remote_message_dispatch() {
        let root = EventRoot::new();
        let mut component = mounted(&root);
        let outcome =
            component.on_remote_message(MARKDOWN_UPDATED, r#"{"id":"doc-1","value":"hello"}"#);
        assert_eq!(outcome, Some(UpdateOutcome::Applied));
        assert_eq!(component.mirror_value(), "hello");
    }

    #[test]
    fn test_unsubscribed_event_name_is_ignored() {
        let root = EventRoot::new();
        let mut component = mounted(&root);
        let outcome = component.on_remote_message("presence-updated", r#"{"id":"doc-1"}"#);
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_malformed_payload_is_ignored() {
        let root = EventRoot::new();
        let mut component = mounted(&root);
        let outcome = component.on_remote_message(MARKDOWN_UPDATED, "not json");
        assert_eq!(outcome, None);
        assert_eq!(component.mirror_value(), "");
    }

    #[test]
    fn test_mount_failure_leaves_no_listeners() {
        let root = EventRoot::new();
        let result = Component::<EditorBuffer, _>::mount(
            HostElement::bare("doc-1"),
            RecordingChannel::default(),
            &root,
        );
        assert!(result.is_err());
        assert_eq!(root.active_listeners(), 0);
    }

    #[test]
    fn test_unmount_releases_listeners() {
        let root = EventRoot::new();
        let component = mounted(&root);
        assert_eq!(root.active_listeners(), 4);
        component.unmount();
        assert_eq!(root.active_listeners(), 0);
    }
}
