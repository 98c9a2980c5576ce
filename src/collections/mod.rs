//! Auxiliary structures consumed by the graph algorithms.
//!
//! The decrease-key priority queue Dijkstra needs is `keyed_priority_queue`'s
//! `KeyedPriorityQueue`, keyed by vertex ID.
mod disjoint_set;
pub use self::disjoint_set::*;
