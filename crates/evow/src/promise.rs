//! The event-to-future adapter.
//!
//! [`promisify_events`] registers one listener per resolve name and per
//! reject name on the caller's emitter, then hands back an [`EventPromise`].
//! The first of those listeners to fire performs the settle-once transition:
//!
//! ```text
//! emit("name", args)
//!     │
//!     ▼
//! ┌──────────────────────────────────────────────┐
//! │ settle handler for "name"                    │
//! │  1. take the settle sender (first fire wins) │
//! │  2. remove every listener this invocation    │
//! │     registered, both name sets               │
//! │  3. send Fulfilled(args) / Rejected          │
//! └──────────────────────────────────────────────┘
//!     │
//!     ▼
//! EventPromise resolves
//! ```
//!
//! Listener removal happens before the settlement is sent, so by the time
//! the caller observes the result every registration owned by the
//! invocation is gone.

use crate::emitter::EventSource;
use crate::error::PromiseError;
use crate::trigger::Trigger;
use evow_types::ListenerId;
use parking_lot::Mutex;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Outcome carried over the settle channel.
enum Settlement {
    Fulfilled(Vec<Value>),
    Rejected { event: String, args: Vec<Value> },
}

/// Bookkeeping shared by every handler one invocation registers.
struct Invocation {
    /// Taken by the first handler to fire. `None` afterwards.
    settle_tx: Mutex<Option<oneshot::Sender<Settlement>>>,
    /// Every registration this invocation owns, across both name sets.
    registrations: Mutex<Vec<(String, ListenerId)>>,
}

impl Invocation {
    /// Removes every listener this invocation registered. Idempotent:
    /// the list is drained, and removal of an already-removed id is a
    /// no-op at the emitter.
    fn remove_all<E: EventSource>(&self, emitter: &E) {
        for (event, id) in self.registrations.lock().drain(..) {
            emitter.remove_listener(&event, id);
        }
    }
}

/// Builds the callback registered for one event name.
fn settle_handler<E>(
    invocation: Arc<Invocation>,
    emitter: E,
    event: String,
    rejects: bool,
) -> crate::emitter::ListenerCallback
where
    E: EventSource + Clone + Send + Sync + 'static,
{
    Arc::new(move |args: &[Value]| {
        // First fire wins; later fires (including a sibling handler in the
        // same dispatch snapshot) find the sender gone and return.
        let Some(tx) = invocation.settle_tx.lock().take() else {
            return;
        };

        invocation.remove_all(&emitter);

        tracing::debug!(event = %event, rejected = rejects, "invocation settled");
        let args = args.to_vec();
        let settlement = if rejects {
            Settlement::Rejected {
                event: event.clone(),
                args,
            }
        } else {
            Settlement::Fulfilled(args)
        };
        // The caller may have dropped the promise; nothing left to notify.
        let _ = tx.send(settlement);
    })
}

/// Converts named emitter events into a single deferred result.
///
/// Registers a listener for every name in `resolve` and every name in
/// `reject`. The returned [`EventPromise`] settles the first time any one
/// of those names is emitted: fulfilled with the event's full ordered
/// argument sequence for a resolve name, rejected with
/// [`PromiseError::Rejected`] for a reject name. At that point every
/// listener the call registered is removed, across both name sets.
///
/// If no named event ever fires the future stays pending indefinitely;
/// wrap it in `tokio::time::timeout` if a deadline is needed.
///
/// # Arguments
///
/// * `emitter` - The event source to subscribe on; borrowed, never owned.
/// * `resolve` - Names whose emission fulfills the result.
/// * `reject` - Names whose emission rejects the result.
///
/// # Errors
///
/// Returns [`PromiseError::NoEvents`] when both triggers normalize to no
/// names. This is checked before any listener is registered.
///
/// # Example
///
/// ```
/// use evow::{promisify_events, EventEmitter, EventSource, Trigger};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let emitter = EventEmitter::new();
/// let promise = promisify_events(&emitter, ["done", "closed"], "error").unwrap();
///
/// emitter.emit("closed", vec![json!("eof")]);
///
/// assert_eq!(promise.await.unwrap(), vec![json!("eof")]);
/// assert_eq!(emitter.listener_count("done"), 0);
/// # }
/// ```
pub fn promisify_events<E>(
    emitter: &E,
    resolve: impl Into<Trigger>,
    reject: impl Into<Trigger>,
) -> Result<EventPromise, PromiseError>
where
    E: EventSource + Clone + Send + Sync + 'static,
{
    let resolve_events = resolve.into().normalize();
    let reject_events = reject.into().normalize();

    if resolve_events.is_empty() && reject_events.is_empty() {
        return Err(PromiseError::NoEvents);
    }

    let (settle_tx, settle_rx) = oneshot::channel();
    let invocation = Arc::new(Invocation {
        settle_tx: Mutex::new(Some(settle_tx)),
        registrations: Mutex::new(Vec::new()),
    });

    for (events, rejects) in [(&resolve_events, false), (&reject_events, true)] {
        for event in events {
            let handler = settle_handler(
                Arc::clone(&invocation),
                emitter.clone(),
                event.clone(),
                rejects,
            );
            let id = emitter.add_listener(event, handler);
            invocation.registrations.lock().push((event.clone(), id));
        }
    }

    // A dispatch on another thread may settle while registration is still
    // running; sweep anything recorded after the handler drained the list.
    if invocation.settle_tx.lock().is_none() {
        invocation.remove_all(emitter);
    }

    tracing::debug!(
        resolve = resolve_events.len(),
        reject = reject_events.len(),
        "listeners registered"
    );

    let detach_emitter = emitter.clone();
    let detach_invocation = Arc::clone(&invocation);
    Ok(EventPromise {
        settle_rx,
        detach: Box::new(move || detach_invocation.remove_all(&detach_emitter)),
    })
}

/// A single-settlement future returned by [`promisify_events`].
///
/// Resolves to the fulfilling event's argument sequence, or to
/// [`PromiseError::Rejected`] when a reject-designated event fired first.
///
/// Dropping an unsettled promise does NOT remove the invocation's
/// listeners; they stay registered until a matching event fires. Use
/// [`detach`](Self::detach) for deterministic teardown.
#[must_use = "an EventPromise settles only when polled or detached"]
pub struct EventPromise {
    settle_rx: oneshot::Receiver<Settlement>,
    detach: Box<dyn FnOnce() + Send>,
}

impl EventPromise {
    /// Removes every listener the invocation registered, without waiting
    /// for an event.
    ///
    /// A no-op when the invocation already settled (the listeners are
    /// gone by then). After detaching, no settlement will ever be
    /// observed for this invocation.
    pub fn detach(self) {
        (self.detach)();
        tracing::debug!("invocation detached");
    }
}

impl Future for EventPromise {
    type Output = Result<Vec<Value>, PromiseError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.settle_rx).poll(cx) {
            Poll::Ready(Ok(Settlement::Fulfilled(args))) => Poll::Ready(Ok(args)),
            Poll::Ready(Ok(Settlement::Rejected { event, args })) => {
                Poll::Ready(Err(PromiseError::Rejected { event, args }))
            }
            Poll::Ready(Err(_)) => Poll::Ready(Err(PromiseError::Detached)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl std::fmt::Debug for EventPromise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventPromise").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::EventEmitter;
    use serde_json::json;

    #[test]
    fn no_events_fails_before_registration() {
        let emitter = EventEmitter::new();

        let result = promisify_events(&emitter, Trigger::None, Trigger::None);

        assert!(matches!(result, Err(PromiseError::NoEvents)));
        assert_eq!(emitter.total_listener_count(), 0);
    }

    #[test]
    fn empty_names_count_as_absent() {
        let emitter = EventEmitter::new();

        let result = promisify_events(&emitter, "", Trigger::Many(vec![String::new()]));

        assert!(matches!(result, Err(PromiseError::NoEvents)));
        assert_eq!(emitter.total_listener_count(), 0);
    }

    #[test]
    fn registers_one_listener_per_name() {
        let emitter = EventEmitter::new();

        let promise = promisify_events(&emitter, ["a", "b"], "c").expect("valid invocation");

        assert_eq!(emitter.listener_count("a"), 1);
        assert_eq!(emitter.listener_count("b"), 1);
        assert_eq!(emitter.listener_count("c"), 1);

        promise.detach();
    }

    #[test]
    fn duplicate_names_register_once() {
        let emitter = EventEmitter::new();

        let promise =
            promisify_events(&emitter, vec!["a", "a"], Trigger::None).expect("valid invocation");

        assert_eq!(emitter.listener_count("a"), 1);
        promise.detach();
    }

    #[tokio::test]
    async fn settles_once_even_when_both_sides_share_a_dispatch() {
        let emitter = EventEmitter::new();

        // Same name on both sides: one dispatch reaches both handlers,
        // only the first (the resolve handler, registered first) settles.
        let promise = promisify_events(&emitter, "flip", "flip").expect("valid invocation");

        assert_eq!(emitter.listener_count("flip"), 2);
        emitter.emit("flip", vec![json!("winner")]);

        assert_eq!(promise.await.unwrap(), vec![json!("winner")]);
        assert_eq!(emitter.listener_count("flip"), 0);
    }

    #[tokio::test]
    async fn detach_then_emit_settles_nothing() {
        let emitter = EventEmitter::new();

        let promise = promisify_events(&emitter, "done", "fail").expect("valid invocation");
        promise.detach();

        assert_eq!(emitter.total_listener_count(), 0);
        assert_eq!(emitter.emit("done", vec![json!(1)]), 0);
        assert_eq!(emitter.emit("fail", Vec::new()), 0);
    }

    #[tokio::test]
    async fn detach_after_settlement_is_a_noop() {
        let emitter = EventEmitter::new();

        let promise = promisify_events(&emitter, "done", Trigger::None).expect("valid invocation");
        emitter.emit("done", Vec::new());

        // Already settled; the registration list was drained by the handler.
        promise.detach();
        assert_eq!(emitter.total_listener_count(), 0);
    }
}
