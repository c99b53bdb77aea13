// ABOUTME: Change notification for record-store writes
// ABOUTME: Listeners registered on the ledger are called with the key of each successful write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitbalance_core::keys::StorageKey;
use std::fmt;
use tracing::debug;

type Listener = Box<dyn FnMut(&StorageKey)>;

/// Synchronous fan-out of "this key changed" events
///
/// Listeners run in subscription order on the writer's thread. Recomputing
/// metrics or advice in response is the listener's job.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Listener>,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChangeNotifier {
    /// Notifier with no listeners
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StorageKey) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Call every listener with `key`
    pub fn notify(&mut self, key: &StorageKey) {
        debug!(%key, listeners = self.listeners.len(), "record changed");
        for listener in &mut self.listeners {
            listener(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listeners_called_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Rc::clone(&seen);
        notifier.subscribe(move |key| first.borrow_mut().push(format!("a:{key}")));
        let second = Rc::clone(&seen);
        notifier.subscribe(move |key| second.borrow_mut().push(format!("b:{key}")));

        notifier.notify(&StorageKey::UserInfo);
        assert_eq!(*seen.borrow(), vec!["a:user_info", "b:user_info"]);
        assert_eq!(notifier.listener_count(), 2);
    }
}
