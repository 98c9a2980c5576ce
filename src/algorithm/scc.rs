use super::dfs::{DfsEvent, DfsWalk};
use crate::graph::*;

/// Strongly connected components.
pub trait StronglyConnectedComponents
where
    Self: TransposableGraph,
{
    /// For directed graphs, Kosaraju's algorithm: vertices in decreasing finish time of a
    /// DFS on the graph seed DFS trees on the transposed graph, one tree per component.
    ///
    /// For undirected graphs, the connected components, swept in vertex ID order.
    ///
    /// Each component lists its vertices in discovery order.
    fn scc(&self) -> Vec<Vec<VertexId>> {
        if <Self::Direction as DirectedOrNot>::DIRECTED_OR_NOT {
            kosaraju(self)
        } else {
            connected_components(self)
        }
    }

    /// Component index of every vertex, indices following [Self::scc].
    fn component_of(&self) -> Vec<usize> {
        let mut res = vec![0; self.vertex_size()];
        for (i, comp) in self.scc().into_iter().enumerate() {
            for v in comp {
                res[v.to_raw()] = i;
            }
        }
        res
    }
}

impl<G: TransposableGraph> StronglyConnectedComponents for G {}

fn kosaraju<G: TransposableGraph>(g: &G) -> Vec<Vec<VertexId>> {
    let mut post_order = Vec::with_capacity(g.vertex_size());
    for event in DfsWalk::exhaust(g) {
        if let DfsEvent::Finish { vertex, .. } = event {
            post_order.push(vertex);
        }
    }
    post_order.reverse();
    let transposed = g.transposed();
    let mut res: Vec<Vec<VertexId>> = vec![];
    for event in DfsWalk::new(&transposed, post_order) {
        match event {
            DfsEvent::Discover { vertex, via: None } => res.push(vec![vertex]),
            DfsEvent::Discover { vertex, .. } => {
                if let Some(comp) = res.last_mut() {
                    comp.push(vertex);
                }
            }
            _ => {}
        }
    }
    res
}

fn connected_components<G: QueryableGraph>(g: &G) -> Vec<Vec<VertexId>> {
    let mut seen = vec![false; g.vertex_size()];
    let mut res = vec![];
    for v in g.iter_vertices() {
        if seen[v.to_raw()] {
            continue;
        }
        let mut comp = vec![];
        let mut queue = std::collections::VecDeque::from([v]);
        seen[v.to_raw()] = true;
        while let Some(cur) = queue.pop_front() {
            comp.push(cur);
            for e in g.out_edges(&cur) {
                if !std::mem::replace(&mut seen[e.sink.to_raw()], true) {
                    queue.push_back(e.sink);
                }
            }
        }
        res.push(comp);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithm::{BreadthFirstSearch, TopologicalSort},
        graph::tests::*,
    };
    use petgraph::{algo::kosaraju_scc, graph::DiGraph};
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn normalized(comps: Vec<Vec<VertexId>>) -> BTreeSet<BTreeSet<usize>> {
        comps
            .into_iter()
            .map(|c| c.into_iter().map(|v| v.to_raw()).collect())
            .collect()
    }

    #[test]
    fn two_cycles_and_a_bridge() {
        let g: DirectedGraph =
            DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (5, 5)]);
        let comps = g.scc();
        assert_eq!(comps.len(), 3);
        assert_eq!(
            normalized(comps),
            BTreeSet::from([
                BTreeSet::from([0, 1, 2]),
                BTreeSet::from([3, 4]),
                BTreeSet::from([5])
            ])
        );
        let idx = g.component_of();
        assert_eq!(idx[0], idx[2]);
        assert_ne!(idx[2], idx[3]);
    }

    #[test]
    fn components_come_in_topological_order() {
        let g: DirectedGraph = DirectedGraph::from_edges([(2, 1), (1, 0)]);
        let comps = g.scc();
        assert_eq!(comps, [2, 1, 0].map(|v| vec![VertexId::new(v)]).to_vec());
    }

    #[test]
    fn undirected_gives_connected_components() {
        let g: UndirectedGraph = UndirectedGraph::from_edges([(0, 2), (3, 4), (4, 5)]);
        assert_eq!(
            g.scc(),
            vec![
                vec![VertexId::new(0), VertexId::new(2)],
                vec![VertexId::new(1)],
                vec![VertexId::new(3), VertexId::new(4), VertexId::new(5)],
            ]
        );
    }

    #[quickcheck]
    fn scc_agrees_with_petgraph(g: ArbitraryGraph<Directed>) {
        let pg: DiGraph<(), Unweighted, usize> = (&g.graph).into();
        let oracle: Vec<Vec<VertexId>> = kosaraju_scc(&pg)
            .into_iter()
            .map(|c| c.into_iter().map(|n| VertexId::new(n.index())).collect())
            .collect();
        assert_eq!(normalized(g.graph.scc()), normalized(oracle));
    }

    #[quickcheck]
    fn mutual_reachability(g: ArbitraryGraph<Directed>) {
        let g = &g.graph;
        let idx = g.component_of();
        let reach: Vec<Vec<Option<usize>>> = g.iter_vertices().map(|v| g.bfs(v).unwrap()).collect();
        for u in 0..g.vertex_size() {
            for v in 0..g.vertex_size() {
                let mutual = reach[u][v].is_some() && reach[v][u].is_some();
                assert_eq!(idx[u] == idx[v], mutual);
            }
        }
    }

    #[quickcheck]
    fn condensation_is_acyclic(g: ArbitraryGraph<Directed>) {
        let g = &g.graph;
        let idx = g.component_of();
        let n = g.scc().len();
        let mut dag: DirectedGraph = DirectedGraph::new(n);
        for e in g.iter_edges() {
            let (a, b) = (idx[e.source.to_raw()], idx[e.sink.to_raw()]);
            if a != b {
                dag.add_edge(VertexId::new(a), VertexId::new(b), Unweighted).unwrap();
            }
        }
        assert!(dag.toposort(true).acyclic);
    }
}
