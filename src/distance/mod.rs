//! Distance ranking of nodes from a source node.

mod ranking;

pub use ranking::{rank_by_distance, Neighbor};
