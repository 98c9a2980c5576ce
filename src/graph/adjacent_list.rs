use crate::{graph::*, Result};
use std::marker::PhantomData;

/// An adjacency-list graph over dense vertex IDs `0..N`.
///
/// * `D`: [Directed] or [Undirected].
/// * `W`: edge weight, a [Weight] or [Unweighted].
///
/// Directed graphs store each edge once, in its source's row.
/// Undirected graphs store it twice, once in each endpoint's row, as two records with
/// swapped endpoints and the same weight.
/// Self-loops and parallel edges are kept as they are.
///
/// |                | Complexity     |
/// | -------------- | -------------- |
/// | `add_vertex`   | amortized O(1) |
/// | `add_edge`     | amortized O(1) |
/// | `out_edges`    | O(1), then O(1) on each call to `.next` |
/// | `iter_edges`   | O(1), then O(1) on each call to `.next` |
/// | `transposed`   | O(V + E)       |
pub struct AdjacentListGraph<D, W = Unweighted> {
    adj: Vec<Vec<Edge<W>>>,
    edges: Vec<Edge<W>>,
    direction: PhantomData<D>,
}

pub type DirectedGraph<W = Unweighted> = AdjacentListGraph<Directed, W>;
pub type UndirectedGraph<W = Unweighted> = AdjacentListGraph<Undirected, W>;

impl<D, W: Clone> Clone for AdjacentListGraph<D, W> {
    fn clone(&self) -> Self {
        Self {
            adj: self.adj.clone(),
            edges: self.edges.clone(),
            direction: PhantomData,
        }
    }
}

impl<D, W> Default for AdjacentListGraph<D, W> {
    fn default() -> Self {
        Self {
            adj: vec![],
            edges: vec![],
            direction: PhantomData,
        }
    }
}

impl<D, W> std::fmt::Debug for AdjacentListGraph<D, W>
where
    D: DirectedOrNot,
    W: Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if D::DIRECTED_OR_NOT {
            "DirectedGraph"
        } else {
            "UndirectedGraph"
        };
        writeln!(f, "{} {{", kind)?;
        write!(f, "{:?}", self.debug())?;
        writeln!(f, "}}")
    }
}

impl<D, W> AdjacentListGraph<D, W>
where
    D: DirectedOrNot,
    W: Clone,
{
    /// Creates a graph of `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n],
            edges: vec![],
            direction: PhantomData,
        }
    }

    /// Creates a graph from a list of edges.
    ///
    /// The vertex count is one more than the largest endpoint; an empty list gives an
    /// empty graph. Since every endpoint is in range by construction, this cannot fail.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        let edges: Vec<Edge<W>> = edges.into_iter().map(Into::into).collect();
        let n = edges
            .iter()
            .map(|e| e.source.max(e.sink).to_raw() + 1)
            .max()
            .unwrap_or(0);
        let mut res = Self::new(n);
        for e in edges {
            res.push_edge(e);
        }
        res
    }

    fn push_edge(&mut self, edge: Edge<W>) {
        self.adj[edge.source.to_raw()].push(edge.clone());
        if !D::DIRECTED_OR_NOT {
            self.adj[edge.sink.to_raw()].push(edge.reversed());
        }
        self.edges.push(edge);
    }
}

impl<D, W> QueryableGraph for AdjacentListGraph<D, W>
where
    D: DirectedOrNot,
    W: Clone,
{
    type Direction = D;
    type Weight = W;

    fn vertex_size(&self) -> usize {
        self.adj.len()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge<W>> + '_> {
        Box::new(self.edges.iter())
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = &Edge<W>> + '_> {
        match self.adj.get(v.to_raw()) {
            Some(row) => Box::new(row.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn out_degree(&self, v: &VertexId) -> usize {
        self.adj.get(v.to_raw()).map_or(0, Vec::len)
    }
}

impl<D, W> GrowableGraph for AdjacentListGraph<D, W>
where
    D: DirectedOrNot,
    W: Clone,
{
    fn with_vertices(n: usize) -> Self {
        Self::new(n)
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId::new(self.adj.len());
        self.adj.push(vec![]);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: W) -> Result<()> {
        self.check_vertex(&source)?;
        self.check_vertex(&sink)?;
        self.push_edge(Edge::new(source, sink, weight));
        Ok(())
    }
}

impl<D, W> TransposableGraph for AdjacentListGraph<D, W>
where
    D: DirectedOrNot,
    W: Clone,
{
    fn transposed(&self) -> Self {
        let mut res = Self::new(self.vertex_size());
        for e in self.edges.iter() {
            res.push_edge(e.reversed());
        }
        res
    }
}
