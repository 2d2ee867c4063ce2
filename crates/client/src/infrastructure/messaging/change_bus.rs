//! Change bus for observing store mutations.
//!
//! Push-based: subscribers register callbacks that are invoked synchronously,
//! in subscription order, after every store mutation. The bus holds strong
//! references to subscribers, so they persist until explicitly removed or the
//! bus is dropped.
//!
//! Callbacks run while the subscriber list is locked and must not call back
//! into the bus.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use gcms_domain::CollectionKind;

/// Which persisted namespace an event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreNamespace {
    Session,
    Collections,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
}

/// Published after a store mutation or rehydration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SessionChanged {
        authenticated: bool,
    },
    /// Also published when an update or remove matched nothing
    CollectionChanged {
        kind: CollectionKind,
        change: ChangeKind,
    },
    Hydrated {
        namespace: StoreNamespace,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreEvent) + Send + 'static>;

#[derive(Clone, Default)]
pub struct ChangeBus {
    subscribers: Arc<Mutex<Vec<(SubscriptionId, Subscriber)>>>,
    next_id: Arc<AtomicU64>,
}

impl ChangeBus {
    /// Create a new ChangeBus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all store events.
    pub fn subscribe(&self, callback: impl FnMut(&StoreEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        match self.subscribers.lock() {
            Ok(mut guard) => guard.push((id, Box::new(callback))),
            Err(e) => tracing::error!("Failed to acquire change bus lock: {}", e),
        }
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match self.subscribers.lock() {
            Ok(mut guard) => {
                let before = guard.len();
                guard.retain(|(existing, _)| *existing != id);
                guard.len() != before
            }
            Err(e) => {
                tracing::error!("Failed to acquire change bus lock: {}", e);
                false
            }
        }
    }

    /// Dispatch an event to all subscribers.
    pub fn publish(&self, event: StoreEvent) {
        tracing::trace!(?event, "Publishing store event");
        match self.subscribers.lock() {
            Ok(mut guard) => {
                for (_, subscriber) in guard.iter_mut() {
                    subscriber(&event);
                }
            }
            Err(e) => tracing::error!("Failed to acquire change bus lock: {}", e),
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        match self.subscribers.lock() {
            Ok(guard) => guard.len(),
            Err(e) => {
                tracing::error!("Failed to acquire change bus lock: {}", e);
                0
            }
        }
    }

    /// Clear all subscribers.
    pub fn clear(&self) {
        match self.subscribers.lock() {
            Ok(mut guard) => guard.clear(),
            Err(e) => tracing::error!("Failed to acquire change bus lock: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    fn session_event() -> StoreEvent {
        StoreEvent::SessionChanged {
            authenticated: true,
        }
    }

    #[test]
    fn test_subscribe_and_publish() {
        let bus = ChangeBus::new();
        let counter = Arc::new(AtomicU32::new(0));

        let c = counter.clone();
        bus.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(session_event());
        bus.publish(session_event());

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscribers_run_in_order() {
        let bus = ChangeBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second"] {
            let seen = seen.clone();
            bus.subscribe(move |_| seen.lock().unwrap().push(label));
        }
        bus.publish(session_event());

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = ChangeBus::new();
        let counter = Arc::new(AtomicU32::new(0));

        let c = counter.clone();
        let id = bus.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));

        bus.publish(session_event());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = ChangeBus::new();
        let clone = bus.clone();
        bus.subscribe(|_| {});
        let second = clone.subscribe(|_| {});

        assert_eq!(bus.subscriber_count(), 2);
        assert_ne!(SubscriptionId(0), second);

        clone.clear();
        assert_eq!(bus.subscriber_count(), 0);
    }
}
