//! Graph identifiers, edges, weights, the graph traits and the adjacency-list store.
//!
//! # Vertices and edges
//!
//! Vertices are dense `usize` IDs wrapped in [VertexId]; a graph of `N` vertices owns
//! exactly `0..N`, and the only way to get more is [GrowableGraph::add_vertex].
//! Algorithm authors may feel free to copy IDs and to index plain vectors by them.
//! Edges are plain values, [Edge], compared structurally.
//!
//! # Shapes
//!
//! [AdjacentListGraph] is parameterised by a direction marker, [Directed] or
//! [Undirected], and a weight type, any [Weight] or the [Unweighted] marker.
//! Algorithms in [crate::algorithm] bound on these, so e.g. a topological sort of an
//! undirected graph does not type-check.
//!
//! # `MappedGraph`
//!
//! It wraps a graph and how its vertices are mapped from another graph,
//! e.g. the subgraph induced by some of the vertices.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod weight;
pub use self::weight::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacent_list;
pub use self::adjacent_list::*;
mod mapped_graph;
pub use self::mapped_graph::*;
mod graph_debug;
pub use self::graph_debug::*;
mod petgraph_interop;
