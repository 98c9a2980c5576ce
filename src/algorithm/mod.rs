//! Graph algorithms
//!
//! Every family is an extension trait with a blanket implementation, so bringing
//! `graphalgo::algorithm::*` into scope is all it takes to call e.g. `g.dinic(s, t)`.
//! Traits that only make sense for one shape bound on it:
//! [TopologicalSort] needs a directed graph, [CutVertices] and [MinimumSpanningTree]
//! an undirected one, and the weighted families a [crate::graph::Weight].
mod dfs;
pub use self::dfs::DepthFirstSearch;
pub use self::dfs::DfsTimes;
mod traversal;
pub use self::traversal::*;
mod toposort;
pub use self::toposort::*;
mod scc;
pub use self::scc::*;
mod cut;
pub use self::cut::*;
mod mst;
pub use self::mst::*;
mod shortest_path;
pub use self::shortest_path::*;
mod all_pairs;
pub use self::all_pairs::*;
mod max_flow;
pub use self::max_flow::*;
mod euler;
pub use self::euler::*;
