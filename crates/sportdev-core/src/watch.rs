//! Session-change notification.
//!
//! The shell needs to re-derive which views are reachable whenever sign-in or
//! sign-out happens. Rather than a bare callback registration, subscriptions
//! hand back a [`WatchHandle`] whose lifetime controls the subscription:
//! dropping it (or calling [`WatchHandle::cancel`]) unsubscribes, which lets
//! the shell tie the subscription to its mount/unmount scope.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::services::AuthSession;

type Listener = Rc<dyn Fn(Option<&AuthSession>)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A broadcast point for auth-session changes.
#[derive(Clone, Default)]
pub struct SessionWatch {
    inner: Rc<RefCell<Registry>>,
}

impl SessionWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The subscription lives as long as the returned
    /// handle does.
    pub fn subscribe(&self, listener: impl Fn(Option<&AuthSession>) + 'static) -> WatchHandle {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        WatchHandle {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Notify every live listener of the new session value.
    pub fn notify(&self, session: Option<&AuthSession>) {
        // Snapshot first so listeners may subscribe or cancel reentrantly.
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(session);
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Unsubscribe token returned by [`SessionWatch::subscribe`].
pub struct WatchHandle {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl WatchHandle {
    /// Remove the listener now instead of waiting for drop.
    pub fn cancel(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
