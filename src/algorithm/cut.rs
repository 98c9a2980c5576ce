use super::dfs::{Color, DfsEvent, DfsWalk};
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Cut vertices and cut edges of undirected graphs, by Tarjan's low-link values.
pub trait CutVertices
where
    Self: QueryableGraph<Direction = Undirected> + Sized,
{
    /// Vertices whose removal disconnects their component, in increasing order.
    fn articulation_points(&self) -> Vec<VertexId> {
        LowLink::compute(self).articulation_points
    }

    /// Edges whose removal disconnects their component, oriented as DFS tree edges from
    /// parent to child and listed in the order their child finishes.
    ///
    /// An edge with a parallel twin is never a bridge, and neither is a self-loop.
    fn bridges(&self) -> Vec<Edge<Self::Weight>> {
        LowLink::compute(self).bridges
    }
}

impl<G> CutVertices for G where G: QueryableGraph<Direction = Undirected> {}

struct LowLink<W> {
    articulation_points: Vec<VertexId>,
    bridges: Vec<Edge<W>>,
}

impl<W: Clone> LowLink<W> {
    fn compute<G>(g: &G) -> Self
    where
        G: QueryableGraph<Direction = Undirected, Weight = W>,
    {
        let n = g.vertex_size();
        let mut multiplicity: HashMap<(VertexId, VertexId), usize, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for e in g.iter_edges() {
            *multiplicity.entry(unordered(e)).or_default() += 1;
        }

        let mut time_in = vec![0; n];
        let mut low = vec![0; n];
        let mut children = vec![0usize; n];
        let mut is_cut = vec![false; n];
        let mut bridges = vec![];
        let mut clock = 0;
        for event in DfsWalk::exhaust(g) {
            match event {
                DfsEvent::Discover { vertex, .. } => {
                    clock += 1;
                    time_in[vertex.to_raw()] = clock;
                    low[vertex.to_raw()] = clock;
                }
                DfsEvent::NonTreeEdge {
                    edge,
                    sink_color: Color::Grey,
                } => {
                    let (u, v) = (edge.source.to_raw(), edge.sink.to_raw());
                    low[u] = low[u].min(time_in[v]);
                }
                DfsEvent::NonTreeEdge { .. } => {}
                DfsEvent::Finish {
                    vertex,
                    via: Some(e),
                } => {
                    let (u, v) = (e.source.to_raw(), vertex.to_raw());
                    low[u] = low[u].min(low[v]);
                    children[u] += 1;
                    if low[v] >= time_in[u] {
                        // roots are settled by their child count when they finish
                        is_cut[u] = true;
                    }
                    if low[v] > time_in[u] && multiplicity.get(&unordered(e)) == Some(&1) {
                        bridges.push(e.clone());
                    }
                }
                DfsEvent::Finish { vertex, via: None } => {
                    is_cut[vertex.to_raw()] = children[vertex.to_raw()] >= 2;
                }
            }
        }
        let articulation_points = g.iter_vertices().filter(|v| is_cut[v.to_raw()]).collect();
        Self {
            articulation_points,
            bridges,
        }
    }
}

fn unordered<W>(e: &Edge<W>) -> (VertexId, VertexId) {
    (e.source.min(e.sink), e.source.max(e.sink))
}
