pub use crate::ds::{NodeId, RankList};
pub use crate::error::InvariantError;
pub use crate::tracker::{ConcurrentTopNTracker, TopNTracker, DEFAULT_CAPACITY};
pub use crate::traits::HitTracker;
