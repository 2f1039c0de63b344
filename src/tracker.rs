//! # Top-N Frequency Tracker
//!
//! Tracks exact hit counts for an unbounded stream of keys and maintains a
//! bounded window of the N most frequently seen keys, sorted and ready to
//! read at any time. Designed for request-handling layers that want "most
//! frequent addresses so far" without re-sorting the whole key space.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                       TopNTracker<K>                             │
//!   │                                                                  │
//!   │   counts: FxHashMap<K, u64>     exact count per key ever seen    │
//!   │   index:  FxHashMap<K, NodeId>  ranked keys → window node        │
//!   │   window: RankList<K>           ≤ N keys, sorted by count        │
//!   │                                                                  │
//!   │   window (ascending by count, ties keep earlier arrivals high):  │
//!   │                                                                  │
//!   │     front ─► [k_min] ◄──► [k_mid] ◄──► [k_max] ◄── back          │
//!   │              count=2       count=7       count=31                │
//!   │              (next to                    (rank 1,                │
//!   │               be displaced)               reported first)        │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Update Flow
//!
//! ```text
//!   record_hit(key)                       new count = counts[key] + 1
//!        │
//!        ▼
//!   first hit?  ──yes──►  window below capacity? ──yes──► insert at front
//!        │                        └──no──► not ranked (yet)
//!        no
//!        ▼
//!   already ranked? ──yes──────────────────────────┐
//!        │                                         │
//!        no                                        ▼
//!        ▼                                  walk toward back while the
//!   count beats window minimum strictly?    next node's count is still
//!        │yes                               smaller, then relocate
//!        ▼                                  after the last such node
//!   insert above the minimum, evict the
//!   minimum once the window overflows,
//!   then walk as above
//! ```
//!
//! Counts only ever grow by 1, so after an update the window is at most one
//! rank class out of place; the local walk from the updated node restores
//! sortedness in amortized O(1), worst case O(N).
//!
//! ## Operations
//!
//! | Method               | Time      | Notes                                |
//! |----------------------|-----------|--------------------------------------|
//! | `record_hit`         | O(1) am.  | May insert/evict/relocate one node   |
//! | `top_n`              | O(N)      | Snapshot, highest count first        |
//! | `reset`              | O(n)      | Drops counts and window wholesale    |
//! | `count`              | O(1)      | Exact count for one key              |
//! | `is_ranked`          | O(1)      | Window membership                    |
//! | `min_ranked_count`   | O(1)      | Current displacement threshold       |
//!
//! ## Resource Model
//!
//! The count table grows without bound as new distinct keys arrive; that is
//! the accepted cost of exact counting, not a leak. Callers needing bounded
//! memory must bound their key space or call `reset` periodically.
//!
//! ## Example Usage
//!
//! ```
//! use topfreq::tracker::TopNTracker;
//!
//! let mut tracker: TopNTracker<&str> = TopNTracker::new(3);
//!
//! tracker.record_hit("10.0.0.1");
//! tracker.record_hit("8.8.8.8");
//! tracker.record_hit("8.8.8.8");
//!
//! assert_eq!(tracker.top_n(), vec![("8.8.8.8", 2), ("10.0.0.1", 1)]);
//! ```
//!
//! ## Thread Safety
//!
//! `TopNTracker` is **not** thread-safe: a hit is a multi-step read-modify-
//! write across the count table and the window, and a torn update observed
//! by a concurrent reader would break the sortedness invariant. Use
//! [`ConcurrentTopNTracker`] to serialize the whole state under one lock.

use std::hash::Hash;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::ds::rank_list::{NodeId, RankList};
use crate::error::InvariantError;
use crate::traits::HitTracker;

/// Window size used by [`TopNTracker::default`], matching the original
/// request-tracking deployment.
pub const DEFAULT_CAPACITY: usize = 100;

/// Tracks exact per-key hit counts and the N most frequent keys.
///
/// See module-level documentation for the update algorithm and invariants.
#[derive(Debug)]
pub struct TopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    counts: FxHashMap<K, u64>,
    index: FxHashMap<K, NodeId>,
    window: RankList<K>,
    capacity: usize,
}

impl<K> TopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a tracker whose ranked window holds at most `capacity` keys.
    ///
    /// `capacity == 0` is valid: counts still accumulate, the window stays
    /// empty, and `top_n` always returns an empty vector.
    pub fn new(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::default(),
            index: FxHashMap::default(),
            window: RankList::with_capacity(capacity),
            capacity,
        }
    }

    /// Records one hit for `key`, creating its count at 1 if unseen.
    ///
    /// Total over any key; never fails and never blocks.
    pub fn record_hit(&mut self, key: K) {
        let count = *self
            .counts
            .entry(key.clone())
            .and_modify(|c| *c += 1)
            .or_insert(1);

        if count > 1 {
            let node = match self.index.get(&key) {
                Some(&id) => Some(id),
                None => self.admit_over_min(key, count),
            };
            if let Some(id) = node {
                self.reposition(id, count);
            }
        } else if self.window.len() < self.capacity {
            // New keys are tied for the lowest count ever ranked, so the
            // low end is their correct position.
            let id = self.window.push_front(key.clone());
            self.index.insert(key, id);
        }
    }

    /// Returns the ranked window as `(key, count)` pairs, highest first.
    pub fn top_n(&self) -> Vec<(K, u64)> {
        self.window
            .iter_rev()
            .map(|key| {
                let count = self.counts.get(key).copied().unwrap_or(0);
                (key.clone(), count)
            })
            .collect()
    }

    /// Clears all counts and the ranked window.
    pub fn reset(&mut self) {
        self.counts.clear();
        self.index.clear();
        self.window.clear();
    }

    /// Returns the exact hit count for `key`, if it has ever been seen.
    pub fn count(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Returns `true` if `key` currently occupies a window slot.
    pub fn is_ranked(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the lowest count currently in the window, the threshold a
    /// non-ranked key must strictly exceed to displace an entry.
    pub fn min_ranked_count(&self) -> Option<u64> {
        let low = self.window.front_id()?;
        let key = self.window.get(low)?;
        self.counts.get(key).copied()
    }

    /// Returns the number of distinct keys seen since the last reset.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no key has been seen since the last reset.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the current size of the ranked window.
    pub fn ranked_len(&self) -> usize {
        self.window.len()
    }

    /// Returns the maximum size of the ranked window.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Validates the tracker's internal invariants.
    ///
    /// Checks that the membership index mirrors the window exactly, the
    /// window never exceeds capacity, counts ascend from front to back, and
    /// every ranked key has a positive count. Intended for tests and debug
    /// assertions; operational paths never produce these states.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.window.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "window length {} exceeds capacity {}",
                self.window.len(),
                self.capacity
            )));
        }
        if self.index.len() != self.window.len() {
            return Err(InvariantError::new(format!(
                "membership index has {} entries, window has {}",
                self.index.len(),
                self.window.len()
            )));
        }

        let mut walked = 0usize;
        let mut prev_count: Option<u64> = None;
        let mut current = self.window.front_id();
        while let Some(id) = current {
            walked += 1;
            if walked > self.window.len() {
                return Err(InvariantError::new("window links form a cycle"));
            }
            let key = self
                .window
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale node {:?} in window", id)))?;
            match self.index.get(key) {
                Some(&mapped) if mapped == id => {}
                Some(&mapped) => {
                    return Err(InvariantError::new(format!(
                        "membership entry points at {:?}, window node is {:?}",
                        mapped, id
                    )));
                }
                None => {
                    return Err(InvariantError::new(
                        "ranked key missing from membership index",
                    ));
                }
            }
            let count = self.counts.get(key).copied().ok_or_else(|| {
                InvariantError::new("ranked key missing from frequency table")
            })?;
            if count == 0 {
                return Err(InvariantError::new("ranked key has zero count"));
            }
            if let Some(prev) = prev_count {
                if count < prev {
                    return Err(InvariantError::new(format!(
                        "window not sorted: count {} follows {}",
                        count, prev
                    )));
                }
            }
            prev_count = Some(count);
            current = self.window.next_id(id);
        }

        if walked != self.window.len() {
            return Err(InvariantError::new(format!(
                "window walk visited {} nodes, length is {}",
                walked,
                self.window.len()
            )));
        }
        Ok(())
    }

    // Non-ranked repeat hit: admit `key` just above the low end if its count
    // strictly beats the current minimum, evicting the minimum once the
    // window overflows. Returns the new node, or None if the key stays out.
    fn admit_over_min(&mut self, key: K, count: u64) -> Option<NodeId> {
        let low = self.window.front_id()?;
        let low_key = self.window.get(low)?;
        let low_count = self.counts.get(low_key).copied()?;
        if low_count >= count {
            return None;
        }

        let id = self.window.insert_after(low, key.clone())?;
        self.index.insert(key, id);
        if self.window.len() > self.capacity {
            if let Some(evicted) = self.window.remove(low) {
                self.index.remove(&evicted);
            }
        }
        Some(id)
    }

    // Walk toward the back past nodes with strictly smaller counts and
    // relocate after the last one. The strict comparison stops the walk at
    // equal counts, which is what keeps earlier arrivals ranked higher.
    fn reposition(&mut self, id: NodeId, count: u64) {
        let mut dest = None;
        let mut cursor = self.window.next_id(id);
        while let Some(next) = cursor {
            let next_count = self
                .window
                .get(next)
                .and_then(|key| self.counts.get(key).copied())
                .unwrap_or(u64::MAX);
            if next_count >= count {
                break;
            }
            dest = Some(next);
            cursor = self.window.next_id(next);
        }
        if let Some(dest) = dest {
            self.window.move_after(id, dest);
        }
    }
}

impl<K> Default for TopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K> HitTracker<K> for TopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn record_hit(&mut self, key: K) {
        TopNTracker::record_hit(self, key)
    }

    fn top_n(&self) -> Vec<(K, u64)> {
        TopNTracker::top_n(self)
    }

    fn reset(&mut self) {
        TopNTracker::reset(self)
    }

    fn len(&self) -> usize {
        TopNTracker::len(self)
    }

    fn ranked_len(&self) -> usize {
        TopNTracker::ranked_len(self)
    }

    fn capacity(&self) -> usize {
        TopNTracker::capacity(self)
    }
}

/// Thread-safe wrapper serializing a whole [`TopNTracker`] under one
/// `parking_lot::Mutex`.
///
/// A hit touches the count table and the window in several steps, so the
/// lock must cover the entire tracker; per-structure locks would let a
/// reader observe a torn update.
#[derive(Debug)]
pub struct ConcurrentTopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    inner: Mutex<TopNTracker<K>>,
}

impl<K> ConcurrentTopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a tracker whose ranked window holds at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(TopNTracker::new(capacity)),
        }
    }

    /// Records one hit for `key`.
    pub fn record_hit(&self, key: K) {
        let mut tracker = self.inner.lock();
        tracker.record_hit(key)
    }

    /// Tries to record a hit without blocking; returns `false` if the lock
    /// is held.
    pub fn try_record_hit(&self, key: K) -> bool {
        if let Some(mut tracker) = self.inner.try_lock() {
            tracker.record_hit(key);
            true
        } else {
            false
        }
    }

    /// Returns the ranked window as `(key, count)` pairs, highest first.
    pub fn top_n(&self) -> Vec<(K, u64)> {
        let tracker = self.inner.lock();
        tracker.top_n()
    }

    /// Tries to snapshot the ranked window without blocking.
    pub fn try_top_n(&self) -> Option<Vec<(K, u64)>> {
        let tracker = self.inner.try_lock()?;
        Some(tracker.top_n())
    }

    /// Clears all counts and the ranked window.
    pub fn reset(&self) {
        let mut tracker = self.inner.lock();
        tracker.reset()
    }

    /// Returns the exact hit count for `key`, if it has ever been seen.
    pub fn count(&self, key: &K) -> Option<u64> {
        let tracker = self.inner.lock();
        tracker.count(key)
    }

    /// Returns `true` if `key` currently occupies a window slot.
    pub fn is_ranked(&self, key: &K) -> bool {
        let tracker = self.inner.lock();
        tracker.is_ranked(key)
    }

    /// Returns the number of distinct keys seen since the last reset.
    pub fn len(&self) -> usize {
        let tracker = self.inner.lock();
        tracker.len()
    }

    /// Returns `true` if no key has been seen since the last reset.
    pub fn is_empty(&self) -> bool {
        let tracker = self.inner.lock();
        tracker.is_empty()
    }

    /// Returns the current size of the ranked window.
    pub fn ranked_len(&self) -> usize {
        let tracker = self.inner.lock();
        tracker.ranked_len()
    }

    /// Returns the maximum size of the ranked window.
    pub fn capacity(&self) -> usize {
        let tracker = self.inner.lock();
        tracker.capacity()
    }

    /// Validates the tracker's internal invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let tracker = self.inner.lock();
        tracker.check_invariants()
    }
}

impl<K> Default for ConcurrentTopNTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
