//! Page-wide drag gesture detection.
//!
//! Browser drag events fire once per DOM element boundary crossed, not once
//! per gesture: dragging a file across a nested layout produces a burst of
//! enter/leave pairs. [`DragDetector`] debounces those into at most one
//! coarse `dragstart`/`dragend` notification pair per gesture using a signed
//! nesting counter.
//!
//! The counter is never read as the sole trigger for "end": `dragend` fires
//! once the counter falls to the end threshold or below, tolerating counters
//! that were never perfectly balanced (browsers drop or reorder boundary
//! events around iframes and text selections). A drop always ends the
//! gesture regardless of counter state.

use tracing::trace;

use crate::channel::OutboundEvent;

/// Transfer types that mark a drag payload as file-bearing: the standard
/// `Files` entry plus the legacy Mozilla file-list type.
const FILE_BEARING_TYPES: [&str; 2] = ["Files", "application/x-moz-file"];

/// Counter value at or below which a `dragleave` ends the gesture.
///
/// 1 rather than 0 tolerates enter/leave imbalance; the exact value is a
/// tolerance, not a policy.
const DEFAULT_END_THRESHOLD: i32 = 1;

/// The declared transfer-type set of a drag payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    types: Vec<String>,
}

impl DragPayload {
    /// A payload declaring the given transfer types.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// A payload carrying files, as browsers declare it.
    pub fn files() -> Self {
        Self::new(["Files"])
    }

    /// Whether the declared type set includes a file-bearing type.
    pub fn has_files(&self) -> bool {
        self.types
            .iter()
            .any(|t| FILE_BEARING_TYPES.contains(&t.as_str()))
    }
}

/// One document-level drag event, as delivered by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// Pointer entered an element boundary while dragging.
    Enter(DragPayload),
    /// Pointer is moving over the page while dragging.
    Over(DragPayload),
    /// Pointer left an element boundary while dragging.
    Leave,
    /// Payload was dropped.
    Drop,
}

/// Cursor affordance requested for the current `dragover`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// Reject the drop (default for non-file payloads).
    None,
    /// Offer a copy cursor for file-bearing payloads.
    Copy,
}

/// What the embedder must do after one drag event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// Suppress the browser's default handling of the event.
    pub suppress_default: bool,
    /// Drop-effect to set on the transfer; only present for `dragover`.
    pub drop_effect: Option<DropEffect>,
    /// Coarse notification to push to the remote controller.
    pub notice: Option<OutboundEvent>,
}

impl DragOutcome {
    const fn quiet(suppress_default: bool) -> Self {
        Self {
            suppress_default,
            drop_effect: None,
            notice: None,
        }
    }
}

/// Debounces nested drag events into coarse start/end notifications.
///
/// One detector per mounted component; its state is scoped to drag gestures
/// and carries no document content.
#[derive(Debug)]
pub struct DragDetector {
    depth: i32,
    end_threshold: i32,
}

impl Default for DragDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DragDetector {
    /// A detector with the default end threshold.
    pub const fn new() -> Self {
        Self {
            depth: 0,
            end_threshold: DEFAULT_END_THRESHOLD,
        }
    }

    /// Override the counter value at or below which `dragleave` ends the
    /// gesture.
    #[must_use]
    pub const fn with_end_threshold(mut self, threshold: i32) -> Self {
        self.end_threshold = threshold;
        self
    }

    /// Current nesting depth. Exposed for diagnostics; not meaningful beyond
    /// the current gesture because enter/leave pairs are not guaranteed to
    /// balance.
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// Handle one drag event and report the required side effects.
    pub fn handle(&mut self, event: &DragEvent) -> DragOutcome {
        let outcome = match event {
            DragEvent::Enter(payload) => self.on_enter(payload),
            DragEvent::Over(payload) => Self::on_over(payload),
            DragEvent::Leave => self.on_leave(),
            DragEvent::Drop => self.on_drop(),
        };
        trace!(depth = self.depth, notice = ?outcome.notice, "drag event handled");
        outcome
    }

    fn on_enter(&mut self, payload: &DragPayload) -> DragOutcome {
        self.depth += 1;
        DragOutcome {
            // Start is not gated by depth: the controller treats repeated
            // starts as a no-op refresh.
            notice: payload.has_files().then_some(OutboundEvent::DragStart),
            ..DragOutcome::quiet(true)
        }
    }

    fn on_over(payload: &DragPayload) -> DragOutcome {
        let effect = if payload.has_files() {
            DropEffect::Copy
        } else {
            DropEffect::None
        };
        DragOutcome {
            drop_effect: Some(effect),
            ..DragOutcome::quiet(true)
        }
    }

    fn on_leave(&mut self) -> DragOutcome {
        self.depth -= 1;
        DragOutcome {
            notice: (self.depth <= self.end_threshold).then_some(OutboundEvent::DragEnd),
            ..DragOutcome::quiet(true)
        }
    }

    fn on_drop(&mut self) -> DragOutcome {
        self.depth -= 1;
        DragOutcome {
            notice: Some(OutboundEvent::DragEnd),
            ..DragOutcome::quiet(false)
        }
    }
}
