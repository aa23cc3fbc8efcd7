//! Synchronous listener registry.

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut() + Send>;

/// Ordered list of change listeners.
///
/// [`notify`](Self::notify) calls every listener exactly once, on the
/// caller's thread, in registration order. There is no queueing and no
/// deduplication.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its handle.
    pub fn subscribe(&mut self, listener: impl FnMut() + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the handle was unknown or
    /// already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self) {
        tracing::trace!(listeners = self.listeners.len(), "notifying listeners");
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn notifies_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        for tag in ["a", "b", "c"] {
            let log = Arc::clone(&log);
            notifier.subscribe(move || log.lock().unwrap().push(tag));
        }

        notifier.notify();
        notifier.notify();

        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = {
            let log = Arc::clone(&log);
            notifier.subscribe(move || log.lock().unwrap().push(1))
        };
        {
            let log = Arc::clone(&log);
            notifier.subscribe(move || log.lock().unwrap().push(2));
        }

        assert!(notifier.unsubscribe(first));
        assert!(!notifier.unsubscribe(first));
        assert_eq!(notifier.len(), 1);

        notifier.notify();
        assert_eq!(*log.lock().unwrap(), vec![2]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut notifier = ChangeNotifier::new();
        let a = notifier.subscribe(|| {});
        notifier.unsubscribe(a);
        let b = notifier.subscribe(|| {});

        assert_ne!(a, b);
        assert!(!notifier.is_empty());
    }
}
