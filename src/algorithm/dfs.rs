use crate::{graph::*, Result};

/// Discovery and finish timestamps of a vertex in a depth-first search.
///
/// Both come from one clock starting at 1, so intervals of two vertices are either
/// nested or disjoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfsTimes {
    pub discovered: usize,
    pub finished: usize,
}

/// Depth-first search over the whole graph.
pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Timestamps of a search restarted from every undiscovered vertex in ID order.
    fn dfs(&self) -> Vec<DfsTimes> {
        let mut times = vec![DfsTimes::default(); self.vertex_size()];
        let mut clock = 0;
        for event in DfsWalk::exhaust(self) {
            match event {
                DfsEvent::Discover { vertex, .. } => {
                    clock += 1;
                    times[vertex.to_raw()].discovered = clock;
                }
                DfsEvent::Finish { vertex, .. } => {
                    clock += 1;
                    times[vertex.to_raw()].finished = clock;
                }
                DfsEvent::NonTreeEdge { .. } => {}
            }
        }
        times
    }

    /// Whether the graph has a cycle, found as an edge back to a vertex on the stack.
    ///
    /// For undirected graphs the edge a vertex was reached by does not count on its way
    /// back; any other edge to an ancestor does, so self-loops and parallel edges are
    /// cycles.
    fn has_cycle(&self) -> bool {
        DfsWalk::exhaust(self).any(|event| {
            matches!(
                event,
                DfsEvent::NonTreeEdge {
                    sink_color: Color::Grey,
                    ..
                }
            )
        })
    }

    /// Vertices reachable from `start`, in discovery order.
    fn reachable_from(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&start)?;
        let res = DfsWalk::new(self, vec![start])
            .filter_map(|event| match event {
                DfsEvent::Discover { vertex, .. } => Some(vertex),
                _ => None,
            })
            .collect();
        Ok(res)
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    White,
    Grey,
    Black,
}

pub(crate) enum DfsEvent<'a, W> {
    /// `vertex` turns grey; `via` is the tree edge it was reached by, `None` for roots.
    Discover {
        vertex: VertexId,
        via: Option<&'a Edge<W>>,
    },
    /// `vertex` turns black after all of its edges have been scanned.
    Finish {
        vertex: VertexId,
        via: Option<&'a Edge<W>>,
    },
    /// An edge to a vertex that was already discovered when the edge was scanned.
    NonTreeEdge {
        edge: &'a Edge<W>,
        sink_color: Color,
    },
}

struct Frame<'a, W> {
    vertex: VertexId,
    via: Option<&'a Edge<W>>,
    skip_parent: bool,
    edges: Box<dyn Iterator<Item = &'a Edge<W>> + 'a>,
}

/// Depth-first search with an explicit stack, as a stream of events.
///
/// Each stack frame keeps the vertex and its partially consumed adjacency iterator,
/// so the search depth is bounded by the heap rather than the call stack.
pub(crate) struct DfsWalk<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    color: Vec<Color>,
    roots: std::vec::IntoIter<VertexId>,
    stack: Vec<Frame<'a, G::Weight>>,
}

impl<'a, G> DfsWalk<'a, G>
where
    G: QueryableGraph,
{
    /// Searches from `roots` in order, skipping those discovered by earlier trees.
    pub(crate) fn new(graph: &'a G, roots: Vec<VertexId>) -> Self {
        Self {
            graph,
            color: vec![Color::White; graph.vertex_size()],
            roots: roots.into_iter(),
            stack: vec![],
        }
    }

    /// Searches from every vertex in ID order.
    pub(crate) fn exhaust(graph: &'a G) -> Self {
        Self::new(graph, graph.iter_vertices().collect())
    }

    fn discover(
        &mut self,
        vertex: VertexId,
        via: Option<&'a Edge<G::Weight>>,
    ) -> DfsEvent<'a, G::Weight> {
        self.color[vertex.to_raw()] = Color::Grey;
        self.stack.push(Frame {
            vertex,
            via,
            skip_parent: via.is_some() && !<G::Direction as DirectedOrNot>::DIRECTED_OR_NOT,
            edges: self.graph.out_edges(&vertex),
        });
        DfsEvent::Discover { vertex, via }
    }
}

impl<'a, G> Iterator for DfsWalk<'a, G>
where
    G: QueryableGraph,
{
    type Item = DfsEvent<'a, G::Weight>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(frame) = self.stack.last_mut() {
                match frame.edges.next() {
                    Some(e) => {
                        // an undirected edge must not walk straight back along its mirror
                        if frame.skip_parent && frame.via.map(|p| p.source) == Some(e.sink) {
                            frame.skip_parent = false;
                            continue;
                        }
                        let sink_color = self.color[e.sink.to_raw()];
                        if sink_color == Color::White {
                            return Some(self.discover(e.sink, Some(e)));
                        }
                        return Some(DfsEvent::NonTreeEdge { edge: e, sink_color });
                    }
                    None => {
                        let Some(done) = self.stack.pop() else {
                            continue;
                        };
                        self.color[done.vertex.to_raw()] = Color::Black;
                        return Some(DfsEvent::Finish {
                            vertex: done.vertex,
                            via: done.via,
                        });
                    }
                }
            } else {
                let root = self.roots.next()?;
                if self.color[root.to_raw()] == Color::White {
                    return Some(self.discover(root, None));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::*;
    use petgraph::{
        algo::{is_cyclic_directed, is_cyclic_undirected},
        graph::{DiGraph, UnGraph},
    };
    use quickcheck_macros::quickcheck;

    #[test]
    fn timestamps_nest() {
        let g: DirectedGraph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 3), (4, 4)]);
        let times = g.dfs();
        let oracle = vec![
            DfsTimes {
                discovered: 1,
                finished: 8,
            },
            DfsTimes {
                discovered: 2,
                finished: 5,
            },
            DfsTimes {
                discovered: 3,
                finished: 4,
            },
            DfsTimes {
                discovered: 6,
                finished: 7,
            },
            DfsTimes {
                discovered: 9,
                finished: 10,
            },
        ];
        assert_eq!(times, oracle);
    }

    #[test]
    fn directed_triangle_has_cycle() {
        let g = DirectedGraph::<u32>::from_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert!(g.has_cycle());
    }

    #[test]
    fn undirected_tree_has_no_cycle() {
        let g: UndirectedGraph = UndirectedGraph::from_edges([(0, 1), (1, 2), (1, 3)]);
        assert!(!g.has_cycle());
    }

    #[test]
    fn undirected_parallel_edges_form_cycle() {
        let g: UndirectedGraph = UndirectedGraph::from_edges([(0, 1), (1, 0)]);
        assert!(g.has_cycle());
        let g: UndirectedGraph = UndirectedGraph::from_edges([(0, 1), (2, 2)]);
        assert!(g.has_cycle());
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 200_000;
        let g: DirectedGraph = DirectedGraph::from_edges((0..n - 1).map(|i| (i, i + 1)));
        let times = g.dfs();
        assert_eq!(times[n - 1].discovered, n);
        assert_eq!(times[0].finished, 2 * n);
        assert!(!g.has_cycle());
    }

    #[test]
    fn reachable_from_follows_direction() {
        let g: DirectedGraph = DirectedGraph::from_edges([(1, 0), (1, 2), (2, 3)]);
        assert_eq!(
            g.reachable_from(VertexId::new(2)).unwrap(),
            vec![VertexId::new(2), VertexId::new(3)]
        );
    }

    #[quickcheck]
    fn intervals_are_nested_or_disjoint(g: ArbitraryGraph<Directed>) {
        let times = g.graph.dfs();
        for a in times.iter() {
            assert!(a.discovered < a.finished);
            for b in times.iter() {
                let disjoint = a.finished < b.discovered || b.finished < a.discovered;
                let nested = (a.discovered <= b.discovered && b.finished <= a.finished)
                    || (b.discovered <= a.discovered && a.finished <= b.finished);
                assert!(disjoint || nested);
            }
        }
    }

    #[quickcheck]
    fn has_cycle_agrees_with_petgraph(g: ArbitraryGraph<Directed>) {
        let pg: DiGraph<(), Unweighted, usize> = (&g.graph).into();
        assert_eq!(g.graph.has_cycle(), is_cyclic_directed(&pg));
    }

    #[quickcheck]
    fn has_cycle_agrees_with_petgraph_undirected(g: ArbitraryGraph<Undirected>) {
        let pg: UnGraph<(), Unweighted, usize> = (&g.graph).into();
        assert_eq!(g.graph.has_cycle(), is_cyclic_undirected(&pg));
    }
}
