//! topfreq: top-N frequency tracking primitives for hit streams.
//!
//! Tracks exact hit counts for an unbounded stream of keys and keeps the
//! N most frequently seen keys ranked, ready to read in O(N) at any time.

pub mod ds;
pub mod error;
pub mod prelude;
pub mod tracker;
pub mod traits;
