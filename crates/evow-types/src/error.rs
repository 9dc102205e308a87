//! Unified error interface for evow.
//!
//! This module provides the [`ErrorCode`] trait for standardized error
//! handling across the workspace.
//!
//! # Design
//!
//! All evow error types should implement [`ErrorCode`] to provide:
//!
//! - **Machine-readable codes**: For programmatic error handling
//! - **Recoverability info**: For retry logic and user feedback
//!
//! # Example
//!
//! ```
//! use evow_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum WaitError {
//!     NothingToWaitFor,
//!     Interrupted,
//! }
//!
//! impl ErrorCode for WaitError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::NothingToWaitFor => "WAIT_NOTHING_TO_WAIT_FOR",
//!             Self::Interrupted => "WAIT_INTERRUPTED",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Interrupted)
//!     }
//! }
//!
//! let err = WaitError::Interrupted;
//! assert_eq!(err.code(), "WAIT_INTERRUPTED");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for evow errors.
///
/// Implement this trait for all error types to enable consistent error
/// code format across crates and standardized logging.
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g., `"PROMISE_NO_EVENTS"`
/// - **Namespace-prefixed**: e.g., `"PROMISE_"` for the adapter layer
/// - **Stable**: Codes should not change once defined (API contract)
///
/// # Recoverability
///
/// An error is recoverable if retrying the operation may succeed or the
/// user can take action to fix it. Invalid input is never recoverable:
/// it will not change on retry.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    ///
    /// # Format
    ///
    /// - UPPER_SNAKE_CASE
    /// - Prefixed with the owning domain (e.g., `"PROMISE_"`)
    /// - Stable across versions (breaking change if modified)
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable.
    ///
    /// # Returns
    ///
    /// - `true`: Retry may succeed, or user can take corrective action
    /// - `false`: Retry will not help, requires code/config change
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows evow conventions.
///
/// # Checks
///
/// 1. Code is UPPER_SNAKE_CASE
/// 2. Code starts with expected prefix
/// 3. Code is not empty
///
/// # Panics
///
/// Panics with descriptive message if validation fails.
///
/// # Example
///
/// ```
/// use evow_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// enum MyError { Timeout }
///
/// impl ErrorCode for MyError {
///     fn code(&self) -> &'static str { "MY_TIMEOUT" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_code(&MyError::Timeout, "MY_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");

    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates multiple error codes at once.
///
/// Use this to verify all variants of an error enum.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    // Must not start or end with underscore
    if s.starts_with('_') || s.ends_with('_') {
        return false;
    }

    // Must not have consecutive underscores
    if s.contains("__") {
        return false;
    }

    // All chars must be uppercase letters, digits, or underscore
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl ErrorCode for TestError {
        fn code(&self) -> &'static str {
            match self {
                Self::Transient => "TEST_TRANSIENT",
                Self::Permanent => "TEST_PERMANENT",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Transient)
        }
    }

    #[test]
    fn error_code_trait() {
        let transient = TestError::Transient;
        assert_eq!(transient.code(), "TEST_TRANSIENT");
        assert!(transient.is_recoverable());

        let permanent = TestError::Permanent;
        assert_eq!(permanent.code(), "TEST_PERMANENT");
        assert!(!permanent.is_recoverable());
    }

    #[test]
    fn assert_error_code_valid() {
        assert_error_code(&TestError::Transient, "TEST_");
    }

    #[test]
    fn assert_error_codes_all_variants() {
        assert_error_codes(&[TestError::Transient, TestError::Permanent], "TEST_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn assert_error_code_wrong_prefix() {
        assert_error_code(&TestError::Transient, "WRONG_");
    }

    #[test]
    fn is_upper_snake_case_valid() {
        assert!(is_upper_snake_case("HELLO"));
        assert!(is_upper_snake_case("HELLO_WORLD"));
        assert!(is_upper_snake_case("ERROR_123"));
    }

    #[test]
    fn is_upper_snake_case_invalid() {
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("hello"));
        assert!(!is_upper_snake_case("Hello_World"));
        assert!(!is_upper_snake_case("_HELLO"));
        assert!(!is_upper_snake_case("HELLO_"));
        assert!(!is_upper_snake_case("HELLO__WORLD"));
    }
}
