//! Emitter capability and the in-process implementation.
//!
//! The adapter consumes the [`EventSource`] trait rather than a concrete
//! emitter type, so any object that supports named-event subscription can
//! be promisified. [`EventEmitter`] is the bundled implementation used by
//! callers that do not already have one.
//!
//! # Dispatch Semantics
//!
//! Listeners for a name are invoked synchronously, in registration order,
//! within [`EventSource::emit`]. Dispatch works on a snapshot of the
//! listener list taken before the first callback runs, so a callback may
//! add or remove listeners on the same emitter mid-dispatch. Listeners
//! added during a dispatch do not observe that dispatch.

use evow_types::ListenerId;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Callback invoked when a subscribed event name is emitted.
///
/// Receives the full ordered argument sequence the event carried.
pub type ListenerCallback = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Named-event subscription capability.
///
/// This is the contract [`promisify_events`](crate::promisify_events)
/// requires of its emitter argument. Implementors must support multiple
/// independent listeners per name and invoke them synchronously, in
/// registration order, when that name is emitted.
///
/// Removal is keyed by [`ListenerId`] and must be idempotent: removing a
/// registration that is already gone is a no-op returning `false`.
pub trait EventSource {
    /// Registers a callback for an event name.
    ///
    /// Returns the id of the new registration. The same callback may be
    /// registered more than once; each registration is independent.
    fn add_listener(&self, event: &str, callback: ListenerCallback) -> ListenerId;

    /// Removes one registration.
    ///
    /// Returns `true` if the registration existed and was removed,
    /// `false` if it was already gone.
    fn remove_listener(&self, event: &str, id: ListenerId) -> bool;

    /// Emits an event, invoking every listener registered for the name
    /// with the given argument sequence.
    ///
    /// Returns the number of listeners invoked.
    fn emit(&self, event: &str, args: Vec<Value>) -> usize;

    /// Returns the number of listeners currently registered for a name.
    fn listener_count(&self, event: &str) -> usize;
}

/// One listener registration.
struct Registration {
    id: ListenerId,
    callback: ListenerCallback,
}

/// In-process event emitter.
///
/// Cloning is cheap and clones share the same listener table, so a clone
/// captured by a callback observes (and may modify) the same registrations
/// as the original.
///
/// # Example
///
/// ```
/// use evow::{EventEmitter, EventSource};
/// use serde_json::json;
/// use std::sync::{Arc, Mutex};
///
/// let emitter = EventEmitter::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// emitter.add_listener("tick", Arc::new(move |args| {
///     sink.lock().unwrap().extend(args.to_vec());
/// }));
///
/// emitter.emit("tick", vec![json!(1), json!(2)]);
/// assert_eq!(*seen.lock().unwrap(), vec![json!(1), json!(2)]);
/// ```
#[derive(Clone, Default)]
pub struct EventEmitter {
    /// Map of event names to registrations, in registration order.
    listeners: Arc<RwLock<HashMap<String, Vec<Registration>>>>,
}

impl EventEmitter {
    /// Creates a new emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the total number of registrations across all event names.
    #[must_use]
    pub fn total_listener_count(&self) -> usize {
        self.listeners.read().values().map(Vec::len).sum()
    }
}

impl EventSource for EventEmitter {
    fn add_listener(&self, event: &str, callback: ListenerCallback) -> ListenerId {
        let id = ListenerId::new();
        self.listeners
            .write()
            .entry(event.to_string())
            .or_default()
            .push(Registration { id, callback });
        tracing::debug!(event = event, listener = %id, "listener added");
        id
    }

    fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let Some(list) = listeners.get_mut(event) else {
            return false;
        };

        let before = list.len();
        list.retain(|reg| reg.id != id);
        let removed = list.len() != before;

        if list.is_empty() {
            listeners.remove(event);
        }
        if removed {
            tracing::debug!(event = event, listener = %id, "listener removed");
        }
        removed
    }

    fn emit(&self, event: &str, args: Vec<Value>) -> usize {
        // Snapshot under the lock, invoke outside it: callbacks are allowed
        // to add or remove listeners on this emitter mid-dispatch.
        let snapshot: Vec<ListenerCallback> = {
            let listeners = self.listeners.read();
            listeners
                .get(event)
                .map(|list| list.iter().map(|reg| Arc::clone(&reg.callback)).collect())
                .unwrap_or_default()
        };

        for callback in &snapshot {
            callback(&args);
        }
        tracing::debug!(event = event, delivered = snapshot.len(), "emit");
        snapshot.len()
    }

    fn listener_count(&self, event: &str) -> usize {
        self.listeners.read().get(event).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("total_listeners", &self.total_listener_count())
            .finish_non_exhaustive()
    }
}
