//! Identifier types for evow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single listener registration on an emitter.
///
/// Each call to `add_listener` produces a fresh [`ListenerId`], even when
/// the same callback is attached to the same event name twice. Removal is
/// keyed by this id, so one registration can be detached without touching
/// its siblings.
///
/// # Equality Semantics
///
/// Two ids are equal only if they came from the same registration. There is
/// no notion of "same callback" equality.
///
/// # Example
///
/// ```
/// use evow_types::ListenerId;
///
/// let id = ListenerId::new();
/// println!("registered: {}", id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub Uuid);

#[allow(clippy::new_without_default)] // Default intentionally not implemented - see below
impl ListenerId {
    /// Creates a new [`ListenerId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

// NOTE: ListenerId intentionally does NOT implement Default.
// Default::default() would produce an id that no emitter has handed out,
// so removal keyed on it silently matches nothing. Ids come from
// add_listener only.

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lsn:{}", self.0)
    }
}
