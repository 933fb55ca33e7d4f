//! Document-wide drag listener registry.
//!
//! Drag events must be observed anywhere on the page, not just over the
//! editor, so the four drag listeners attach to the page-wide event root
//! (the `document` in a browser host) rather than the component's own
//! element. Registration is modeled as a scoped acquisition: the guard
//! returned by [`EventRoot::register`] releases every registration it
//! acquired when dropped, so repeated mount/unmount cycles stay exactly
//! balanced and handlers never accumulate across remounts.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::trace;

/// The four document-level drag events a component listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DragEventKind {
    /// `dragenter`
    Enter,
    /// `dragover`
    Over,
    /// `dragleave`
    Leave,
    /// `drop`
    Drop,
}

impl DragEventKind {
    /// All kinds, in registration order.
    pub const ALL: [Self; 4] = [Self::Enter, Self::Over, Self::Leave, Self::Drop];
}

/// Opaque handle to one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: BTreeMap<ListenerId, DragEventKind>,
}

impl Registry {
    fn register(&mut self, kind: DragEventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.insert(id, kind);
        id
    }
}

/// Handle to the page-wide event root.
///
/// Clones share the same registry; the host runtime is single-threaded, so
/// shared ownership is plain `Rc`.
#[derive(Debug, Clone, Default)]
pub struct EventRoot {
    registry: Rc<RefCell<Registry>>,
}

impl EventRoot {
    /// An event root with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one listener per kind. The registrations are released when
    /// the returned guard drops.
    pub fn register(&self, kinds: &[DragEventKind]) -> ListenerGuard {
        let ids = {
            let mut registry = self.registry.borrow_mut();
            kinds.iter().map(|&kind| registry.register(kind)).collect()
        };
        trace!(count = kinds.len(), "drag listeners registered");
        ListenerGuard {
            registry: Rc::clone(&self.registry),
            ids,
        }
    }

    /// Number of currently registered listeners.
    pub fn active_listeners(&self) -> usize {
        self.registry.borrow().active.len()
    }
}

/// Scoped listener registration.
///
/// Dropping the guard unregisters everything it acquired, exactly once.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Rc<RefCell<Registry>>,
    ids: Vec<ListenerId>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut registry = self.registry.borrow_mut();
        for id in self.ids.drain(..) {
            registry.active.remove(&id);
        }
        trace!("drag listeners released");
    }
}
