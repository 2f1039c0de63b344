pub mod rank_list;

pub use rank_list::{NodeId, RankList};
