//! Error types for the topfreq library.
//!
//! The tracker's operational API is total: recording a hit, reading the
//! ranked window, and resetting never fail. The only error type here is
//! [`InvariantError`], returned when an internal consistency check finds
//! the tracker's data structures out of agreement
//! (see [`TopNTracker::check_invariants`](crate::tracker::TopNTracker::check_invariants)).
//!
//! ## Example Usage
//!
//! ```
//! use topfreq::tracker::TopNTracker;
//!
//! let mut tracker: TopNTracker<&str> = TopNTracker::new(10);
//! tracker.record_hit("10.0.0.1");
//! assert!(tracker.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal tracker invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("window longer than capacity");
        assert_eq!(err.to_string(), "window longer than capacity");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("stale membership entry");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("stale membership entry"));
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
