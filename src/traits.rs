//! # Hit Tracker Trait
//!
//! Defines the operation set a frequency tracker exposes to callers, kept
//! separate from the concrete [`TopNTracker`](crate::tracker::TopNTracker)
//! so request-handling layers can depend on the contract alone.
//!
//! ## Trait Summary
//!
//! | Method         | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `record_hit`   | Attribute one event to a key; never fails      |
//! | `top_n`        | Ranked `(key, count)` pairs, highest first     |
//! | `reset`        | Drop all counts and the ranked window          |
//! | `len`          | Distinct keys ever seen since the last reset   |
//! | `ranked_len`   | Current ranked window size (≤ capacity)        |
//! | `capacity`     | Maximum ranked window size (N)                 |
//!
//! `top_n` must not mutate observable state; `record_hit` accepts any key
//! without validation — malformed input is the caller's concern.

/// Core contract for a top-N hit frequency tracker.
pub trait HitTracker<K> {
    /// Records one hit for `key`, creating its count at 1 if unseen.
    fn record_hit(&mut self, key: K);

    /// Returns the ranked window as `(key, count)` pairs, highest count
    /// first. Length is `ranked_len()`, never more than `capacity()`.
    fn top_n(&self) -> Vec<(K, u64)>;

    /// Clears all counts and the ranked window.
    fn reset(&mut self);

    /// Returns the number of distinct keys seen since the last reset.
    fn len(&self) -> usize;

    /// Returns `true` if no key has been seen since the last reset.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current size of the ranked window.
    fn ranked_len(&self) -> usize;

    /// Returns the maximum size of the ranked window.
    fn capacity(&self) -> usize;
}
