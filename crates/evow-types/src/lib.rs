//! Core types for evow.
//!
//! This crate provides the foundational types shared across the evow
//! workspace: the identifier for listener registrations and the unified
//! error-code interface.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  evow-types : ListenerId, ErrorCode          ◄── HERE   │
//! ├─────────────────────────────────────────────────────────┤
//! │  evow       : EventSource, Trigger, promisify_events    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Identifier Design
//!
//! Listener registrations are identified by UUID so that removal is exact:
//! two listeners attached to the same event name with the same callback are
//! still distinct registrations, and removing one never disturbs the other.
//!
//! # Example
//!
//! ```
//! use evow_types::ListenerId;
//!
//! let a = ListenerId::new();
//! let b = ListenerId::new();
//! assert_ne!(a, b);
//! ```

mod error;
mod id;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::ListenerId;
