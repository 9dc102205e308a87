//! Event-to-future adapter for named emitter events.
//!
//! evow turns discrete, named event notifications from an event-emitting
//! object into a single deferred result: a future that settles exactly once,
//! the first time any of the named events fires.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  add_listener   ┌──────────────────┐
//! │  Emitter   │ ◄────────────── │ promisify_events │
//! │ (caller's) │                 │   (invocation)   │
//! └────────────┘                 └──────────────────┘
//!       │ emit("name", args)              │
//!       ▼                                 ▼
//! ┌────────────┐  settle once    ┌──────────────────┐
//! │  handler   │ ──────────────► │   EventPromise   │
//! │ (per name) │  remove all     │    (Future)      │
//! └────────────┘  listeners      └──────────────────┘
//! ```
//!
//! One call to [`promisify_events`] registers a handler per resolve name and
//! per reject name. The first handler to fire removes every listener the
//! call registered, then settles the returned [`EventPromise`]: fulfilled
//! with the event's full argument sequence for a resolve name, rejected with
//! [`PromiseError::Rejected`] for a reject name.
//!
//! # Settle-Once Invariant
//!
//! At most one settlement occurs per invocation, and every listener the
//! invocation registered is removed before the settlement becomes observable
//! to the caller. No handler owned by a settled invocation fires again.
//!
//! # Example
//!
//! ```
//! use evow::{promisify_events, EventEmitter, EventSource, Trigger};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let emitter = EventEmitter::new();
//! let promise = promisify_events(&emitter, "done", Trigger::None).unwrap();
//!
//! emitter.emit("done", vec![json!(42)]);
//!
//! assert_eq!(promise.await.unwrap(), vec![json!(42)]);
//! assert_eq!(emitter.listener_count("done"), 0);
//! # }
//! ```
//!
//! # Abandonment and Cancellation
//!
//! Dropping an unsettled [`EventPromise`] leaves its listeners registered
//! until a matching event eventually fires. For deterministic teardown use
//! [`EventPromise::detach`], which removes every listener the invocation
//! registered without waiting for an event.
//!
//! # Crate Structure
//!
//! - [`EventSource`], [`EventEmitter`] - the emitter capability and an
//!   in-process implementation
//! - [`Trigger`] - resolve/reject event-name selection
//! - [`promisify_events`], [`EventPromise`] - the adapter
//! - [`PromiseError`] - validation, rejection, and teardown errors

mod emitter;
mod error;
mod promise;
mod trigger;

pub use emitter::{EventEmitter, EventSource, ListenerCallback};
pub use error::PromiseError;
pub use promise::{promisify_events, EventPromise};
pub use trigger::Trigger;

// Re-export from evow_types for convenience
pub use evow_types::{ErrorCode, ListenerId};
