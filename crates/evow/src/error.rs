//! Adapter errors.
//!
//! All adapter errors use the `PROMISE_` prefix for their codes:
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`PromiseError::NoEvents`] | `PROMISE_NO_EVENTS` | No |
//! | [`PromiseError::Rejected`] | `PROMISE_REJECTED` | No |
//! | [`PromiseError::Detached`] | `PROMISE_DETACHED` | No |
//!
//! [`Rejected`](PromiseError::Rejected) is not an implementation fault: it
//! is the documented outcome when a reject-designated event fires first,
//! carried on the future's failure channel. The only error raised before
//! settlement is [`NoEvents`](PromiseError::NoEvents), which occurs
//! synchronously, before any listener is registered.

use evow_types::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Adapter error.
///
/// # Example
///
/// ```
/// use evow::{ErrorCode, PromiseError};
///
/// let err = PromiseError::NoEvents;
/// assert_eq!(err.code(), "PROMISE_NO_EVENTS");
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum PromiseError {
    /// Both the resolve and reject triggers normalized to no names.
    ///
    /// Raised synchronously by
    /// [`promisify_events`](crate::promisify_events), before any listener
    /// is registered. An invocation with nothing to wait for could never
    /// settle.
    #[error("at least one event must be specified")]
    NoEvents,

    /// A reject-designated event fired before any resolve-designated one.
    ///
    /// Carries the name of the event that fired and the full ordered
    /// argument sequence it was emitted with.
    #[error("rejected by event {event:?}")]
    Rejected {
        /// Name of the reject event that fired.
        event: String,
        /// Argument sequence the event carried.
        args: Vec<Value>,
    },

    /// The invocation's listeners were torn down before settlement.
    ///
    /// Observed when the settle channel closes without a settlement, so no
    /// event can ever complete the future.
    #[error("listeners detached before settlement")]
    Detached,
}

impl PromiseError {
    /// Returns `true` if this is the reject-event outcome.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the argument sequence of the rejection, if any.
    #[must_use]
    pub fn rejection_args(&self) -> Option<&[Value]> {
        match self {
            Self::Rejected { args, .. } => Some(args),
            _ => None,
        }
    }
}

impl ErrorCode for PromiseError {
    /// Returns a machine-readable error code.
    ///
    /// All adapter errors use the `PROMISE_` prefix.
    fn code(&self) -> &'static str {
        match self {
            Self::NoEvents => "PROMISE_NO_EVENTS",
            Self::Rejected { .. } => "PROMISE_REJECTED",
            Self::Detached => "PROMISE_DETACHED",
        }
    }

    /// Returns whether the error is recoverable.
    ///
    /// None of these are: an empty invocation stays empty on retry, a
    /// rejection is the event's verdict, and a detached invocation has no
    /// listeners left to settle it.
    fn is_recoverable(&self) -> bool {
        match self {
            Self::NoEvents => false,
            Self::Rejected { .. } => false,
            Self::Detached => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evow_types::assert_error_codes;
    use serde_json::json;

    /// All variants for exhaustive testing
    fn all_variants() -> Vec<PromiseError> {
        vec![
            PromiseError::NoEvents,
            PromiseError::Rejected {
                event: "bad".into(),
                args: vec![json!(1)],
            },
            PromiseError::Detached,
        ]
    }

    #[test]
    fn all_error_codes_valid() {
        assert_error_codes(&all_variants(), "PROMISE_");
    }

    #[test]
    fn no_events_error() {
        let err = PromiseError::NoEvents;
        assert_eq!(err.code(), "PROMISE_NO_EVENTS");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("at least one event"));
    }

    #[test]
    fn rejected_error_carries_event_and_args() {
        let err = PromiseError::Rejected {
            event: "bad".into(),
            args: vec![json!("boom"), json!(2)],
        };

        assert_eq!(err.code(), "PROMISE_REJECTED");
        assert!(err.is_rejection());
        assert_eq!(
            err.rejection_args(),
            Some(&[json!("boom"), json!(2)][..])
        );
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn detached_error() {
        let err = PromiseError::Detached;
        assert_eq!(err.code(), "PROMISE_DETACHED");
        assert!(!err.is_rejection());
        assert!(err.rejection_args().is_none());
        assert!(err.to_string().contains("detached"));
    }
}
