use crate::{graph::*, GraphError, Result};

/// Graphs that can grow. Vertices and edges are never removed.
pub trait GrowableGraph: QueryableGraph {
    /// A graph of `n` isolated vertices, `0..n`.
    fn with_vertices(n: usize) -> Self;
    /// Appends a vertex with no edges and returns its ID, which is the old vertex count.
    fn add_vertex(&mut self) -> VertexId;
    /// Adds an edge, mirrored into `sink`'s adjacency when the graph is undirected.
    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: Self::Weight) -> Result<()>;
}

pub trait QueryableGraph {
    type Direction: DirectedOrNot;
    type Weight: Clone;

    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }
    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    /// Number of edges as they were inserted; a mirrored undirected edge counts once.
    fn edge_size(&self) -> usize;
    /// Edges as they were inserted, each exactly once.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge<Self::Weight>> + '_>;
    /// Adjacency records leaving `v`, mirrors of undirected edges included.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = &Edge<Self::Weight>> + '_>;
    fn out_degree(&self, v: &VertexId) -> usize {
        self.out_edges(v).count()
    }

    fn check_vertex(&self, v: &VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: *v,
                vertex_size: self.vertex_size(),
            })
        }
    }

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Graphs that can build a copy of themselves with every edge reversed.
pub trait TransposableGraph: QueryableGraph + Sized {
    fn transposed(&self) -> Self;
}

/// Type-level direction of a graph.
pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}

/// Direction marker of directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Direction marker of undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl DirectedOrNot for Directed {
    const DIRECTED_OR_NOT: bool = true;
}

impl DirectedOrNot for Undirected {
    const DIRECTED_OR_NOT: bool = false;
}
