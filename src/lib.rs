//! Adjacency-list graphs, directed or undirected, weighted or not, and a suite of
//! classic algorithms over them.
//!
//! Graph shape lives in the type: `AdjacentListGraph<D, W>` is parameterised by a
//! direction marker ([graph::Directed] or [graph::Undirected]) and a weight type
//! (any primitive integer, or [graph::Unweighted]).
//! Algorithms are extension traits in [algorithm] with blanket implementations,
//! and an algorithm that only makes sense for one shape (e.g. minimum spanning trees
//! for undirected weighted graphs) simply does not exist for the others.
//!
//! ```rust
//! use graphalgo::{algorithm::*, graph::*};
//!
//! let g = DirectedGraph::<u32>::from_edges([(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)]);
//! assert_eq!(g.dinic(VertexId::new(0), VertexId::new(3)).unwrap(), 4);
//! ```
pub mod algorithm;
pub mod collections;
mod error;
pub use self::error::*;
pub mod graph;
