//! Conversions into `petgraph` graphs.
//!
//! Node indices equal vertex IDs and every inserted edge becomes one petgraph edge,
//! so results computed on either side can be compared index by index.
use crate::graph::*;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};

impl<W: Clone> From<&DirectedGraph<W>> for DiGraph<(), W, usize> {
    fn from(g: &DirectedGraph<W>) -> Self {
        let mut res = DiGraph::with_capacity(g.vertex_size(), g.edge_size());
        fill(&mut res, g);
        res
    }
}

impl<W: Clone> From<&UndirectedGraph<W>> for UnGraph<(), W, usize> {
    fn from(g: &UndirectedGraph<W>) -> Self {
        let mut res = UnGraph::with_capacity(g.vertex_size(), g.edge_size());
        fill(&mut res, g);
        res
    }
}

fn fill<Ty, G>(res: &mut petgraph::Graph<(), G::Weight, Ty, usize>, g: &G)
where
    Ty: petgraph::EdgeType,
    G: QueryableGraph,
{
    for _ in g.iter_vertices() {
        res.add_node(());
    }
    for e in g.iter_edges() {
        res.add_edge(
            NodeIndex::new(e.source.to_raw()),
            NodeIndex::new(e.sink.to_raw()),
            e.weight.clone(),
        );
    }
}
