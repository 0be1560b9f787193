//! Change notification for translator state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A callback run after the locale, the translations or the plugins change.
///
/// Listeners are identified by their `Rc` allocation: registering a clone of
/// the same `Rc` twice registers it once.
pub type Listener = Rc<dyn Fn()>;

type ListenerList = Rc<RefCell<Vec<Listener>>>;

/// An ordered set of listeners.
#[derive(Default)]
pub(crate) struct Notifier {
    listeners: ListenerList,
}

impl Notifier {
    /// Register `listener` unless it is already registered.
    pub(crate) fn listen(&self, listener: Listener) -> Unsubscribe {
        {
            let mut listeners = self.listeners.borrow_mut();
            if !listeners.iter().any(|known| Rc::ptr_eq(known, &listener)) {
                listeners.push(Rc::clone(&listener));
            }
        }
        Unsubscribe {
            listeners: Rc::downgrade(&self.listeners),
            listener,
        }
    }

    /// Call every listener in registration order.
    ///
    /// Runs over a snapshot, so listeners may unsubscribe while being called.
    pub(crate) fn trigger(&self) {
        let snapshot = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Handle returned by [`Translator::listen`](crate::Translator::listen).
///
/// Dropping the handle keeps the listener registered. Call
/// [`unsubscribe`](Self::unsubscribe) to remove it; further calls do nothing.
#[must_use = "dropping the handle leaves no way to remove the listener"]
pub struct Unsubscribe {
    listeners: Weak<RefCell<Vec<Listener>>>,
    listener: Listener,
}

impl Unsubscribe {
    /// Remove the listener. Does nothing if it is already gone or the
    /// translator was dropped.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .retain(|known| !Rc::ptr_eq(known, &self.listener));
        }
    }
}
