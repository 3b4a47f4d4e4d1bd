//! Global pointer listeners.
//!
//! `PointerDispatcher` is the headless counterpart of document-level
//! `pointermove`/`pointerup` listeners: the host feeds every pointer event it
//! sees into `dispatch`, and whatever is subscribed at that moment receives
//! it, regardless of which element the cursor is over.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};

use crate::{Dispose, PointerEvent};

new_key_type! {
    pub struct ListenerKey;
}

pub type PointerListener = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct Registry {
    listeners: SlotMap<ListenerKey, PointerListener>,
}

/// Shared handle to one listener registry. Clones refer to the same registry.
#[derive(Clone, Default)]
pub struct PointerDispatcher(Rc<RefCell<Registry>>);

impl PointerDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&PointerEvent) + 'static) -> Subscription {
        let key = self.0.borrow_mut().listeners.insert(Rc::new(listener));
        log::trace!("pointer listener {key:?} subscribed");

        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.0);
        let dispose = Dispose::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.remove(key);
                log::trace!("pointer listener {key:?} unsubscribed");
            }
        });

        Subscription { key, dispose }
    }

    /// Delivers `event` to every listener subscribed when dispatch starts.
    ///
    /// A listener removed by an earlier listener in the same dispatch is
    /// skipped; one added during dispatch first sees the next event.
    pub fn dispatch(&self, event: &PointerEvent) {
        let snapshot: Vec<(ListenerKey, PointerListener)> = self
            .0
            .borrow()
            .listeners
            .iter()
            .map(|(k, l)| (k, l.clone()))
            .collect();

        for (key, listener) in snapshot {
            if !self.0.borrow().listeners.contains_key(key) {
                continue;
            }
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }
}

impl std::fmt::Debug for PointerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerDispatcher")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration guard. Unsubscribes exactly once: on `unsubscribe` or on drop.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
#[derive(Debug)]
pub struct Subscription {
    key: ListenerKey,
    dispose: Dispose,
}

impl Subscription {
    pub fn key(&self) -> ListenerKey {
        self.key
    }

    pub fn is_active(&self) -> bool {
        !self.dispose.is_disposed()
    }

    pub fn unsubscribe(self) {
        self.dispose.run();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose.run();
    }
}
