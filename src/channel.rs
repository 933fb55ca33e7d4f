//! Bidirectional message boundary to the remote controller.
//!
//! Outbound: coarse drag notifications pushed through [`RemoteChannel`] with
//! an empty payload. Inbound: `markdown-updated` messages carrying the
//! canonical plain-text serialization of one document, decoded here and
//! routed by the component.

use serde::{Deserialize, Serialize};

/// Name of the inbound message carrying canonical document content.
pub const MARKDOWN_UPDATED: &str = "markdown-updated";

/// Coarse drag notifications pushed to the remote controller.
///
/// The controller-side handlers are idempotent: repeated `dragstart` pushes
/// are treated as a no-op refresh of the drag-affordance UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundEvent {
    /// A file-bearing drag entered the page.
    DragStart,
    /// The drag gesture ended (full pointer exit or drop).
    DragEnd,
}

impl OutboundEvent {
    /// Wire name of the event.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::DragEnd => "dragend",
        }
    }
}

/// Outbound half of the remote channel.
///
/// Notifications carry no payload beyond the event name; the transport owns
/// routing, retries and reconnects.
pub trait RemoteChannel {
    /// Push a notification for this component instance to the controller.
    fn push(&mut self, event: OutboundEvent);
}

/// Inbound canonical-content update targeting one document instance.
///
/// `value` may be missing or null on the wire; it normalizes to the empty
/// string before being applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUpdate {
    /// Identifier of the targeted document instance.
    pub id: String,
    /// Canonical plain-text serialization, or none for "no content".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl RemoteUpdate {
    /// Build an update with content.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: Some(value.into()),
        }
    }

    /// Decode a `markdown-updated` payload.
    ///
    /// # Errors
    /// Returns an error if the payload is not a valid update object.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// The update value with missing content normalized to `""`.
    pub fn normalized_value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_event_wire_names() {
        assert_eq!(OutboundEvent::DragStart.name(), "dragstart");
        assert_eq!(OutboundEvent::DragEnd.name(), "dragend");
    }

    #[test]
    fn test_from_json_with_value() {
        let update = RemoteUpdate::from_json(r#"{"id":"doc-1","value":"hello"}"#).unwrap();
        assert_eq!(update.id, "doc-1");
        assert_eq!(update.normalized_value(), "hello");
    }

    #[test]
    fn test_from_json_missing_value_normalizes_to_empty() {
        let update = RemoteUpdate::from_json(r#"{"id":"doc-1"}"#).unwrap();
        assert_eq!(update.value, None);
        assert_eq!(update.normalized_value(), "");
    }

    #[test]
    fn test_from_json_null_value_normalizes_to_empty() {
        let update = RemoteUpdate::from_json(r#"{"id":"doc-1","value":null}"#).unwrap();
        assert_eq!(update.normalized_value(), "");
    }

    #[test]
    fn test_from_json_rejects_missing_id() {
        assert!(RemoteUpdate::from_json(r#"{"value":"hello"}"#).is_err());
    }

    #[test]
    fn test_update_roundtrips_through_json() {
        let update = RemoteUpdate::new("doc-1", "hello");
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(RemoteUpdate::from_json(&json).unwrap(), update);
    }
}
