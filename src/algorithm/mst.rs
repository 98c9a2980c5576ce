use crate::{collections::DisjointSet, graph::*};
use log::debug;
use std::{cmp::Reverse, collections::BinaryHeap};

/// Minimum spanning trees of undirected weighted graphs.
///
/// On a disconnected graph every algorithm returns a minimum spanning forest, one tree
/// per connected component. Self-loops never take part.
pub trait MinimumSpanningTree
where
    Self: QueryableGraph<Direction = Undirected> + Sized,
    Self::Weight: Weight,
{
    /// Prim's algorithm with a lazy binary heap of candidate edges.
    ///
    /// Trees grow from the lowest-numbered vertex not yet covered. Among candidate
    /// edges of equal weight the one with the larger sink wins, so the result is
    /// deterministic. Edges are oriented from the tree towards the vertex they add.
    fn prim(&self) -> Vec<Edge<Self::Weight>> {
        let n = self.vertex_size();
        let mut in_tree = vec![false; n];
        let mut res = Vec::with_capacity(n.saturating_sub(1));
        let mut heap = BinaryHeap::new();
        for root in self.iter_vertices() {
            if in_tree[root.to_raw()] {
                continue;
            }
            in_tree[root.to_raw()] = true;
            heap.extend(self.out_edges(&root).map(|e| (Reverse(e.weight), e.sink, e)));
            while let Some((_, sink, e)) = heap.pop() {
                if in_tree[sink.to_raw()] {
                    continue;
                }
                in_tree[sink.to_raw()] = true;
                res.push(e.clone());
                heap.extend(
                    self.out_edges(&sink)
                        .filter(|e| !in_tree[e.sink.to_raw()])
                        .map(|e| (Reverse(e.weight), e.sink, e)),
                );
            }
            if res.len() + 1 == n {
                break;
            }
        }
        log_forest("prim", n, res.len());
        res
    }

    /// Kruskal's algorithm: edges by ascending weight, insertion order among ties,
    /// each accepted iff it joins two different components.
    fn kruskal(&self) -> Vec<Edge<Self::Weight>> {
        let n = self.vertex_size();
        let mut edges: Vec<&Edge<Self::Weight>> = self.iter_edges().collect();
        edges.sort_by_key(|e| e.weight);
        let mut dsu = DisjointSet::new(n);
        let mut res = Vec::with_capacity(n.saturating_sub(1));
        for e in edges {
            if dsu.count() == 1 {
                break;
            }
            if dsu.union(e.source.to_raw(), e.sink.to_raw()) {
                res.push(e.clone());
            }
        }
        log_forest("kruskal", n, res.len());
        res
    }

    /// Borůvka's algorithm: in every round each component picks its cheapest leaving
    /// edge and all picks are merged at once. Stops after a round that merges nothing.
    ///
    /// Ties are broken by insertion order, which keeps every round's picks acyclic.
    fn boruvka(&self) -> Vec<Edge<Self::Weight>> {
        let n = self.vertex_size();
        let edges: Vec<&Edge<Self::Weight>> = self.iter_edges().collect();
        let mut dsu = DisjointSet::new(n);
        let mut res = Vec::with_capacity(n.saturating_sub(1));
        let mut rounds = 0;
        loop {
            let mut cheapest: Vec<Option<usize>> = vec![None; n];
            for (i, e) in edges.iter().enumerate() {
                let a = dsu.find_set(e.source.to_raw());
                let b = dsu.find_set(e.sink.to_raw());
                if a == b {
                    continue;
                }
                for root in [a, b] {
                    let better = match cheapest[root] {
                        None => true,
                        Some(j) => (e.weight, i) < (edges[j].weight, j),
                    };
                    if better {
                        cheapest[root] = Some(i);
                    }
                }
            }
            rounds += 1;
            let before = res.len();
            for i in cheapest.into_iter().flatten() {
                let e = edges[i];
                if dsu.union(e.source.to_raw(), e.sink.to_raw()) {
                    res.push(e.clone());
                }
            }
            if res.len() == before {
                break;
            }
        }
        debug!("boruvka: {} rounds, {} components left", rounds, dsu.count());
        log_forest("boruvka", n, res.len());
        res
    }
}

impl<G> MinimumSpanningTree for G
where
    G: QueryableGraph<Direction = Undirected>,
    G::Weight: Weight,
{
}

/// Sum of the weights of `edges`.
pub fn total_weight<W: Weight>(edges: &[Edge<W>]) -> W {
    edges.iter().fold(W::zero(), |acc, e| acc + e.weight)
}

fn log_forest(algo: &str, vertex_size: usize, edge_size: usize) {
    if edge_size + 1 < vertex_size {
        debug!(
            "{}: graph is disconnected, spanning forest of {} trees",
            algo,
            vertex_size - edge_size
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithm::StronglyConnectedComponents, graph::tests::*};
    use petgraph::{algo::min_spanning_tree, data::Element, graph::UnGraph};
    use quickcheck_macros::quickcheck;

    fn square() -> UndirectedGraph<u32> {
        UndirectedGraph::from_edges([(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 0, 2), (0, 2, 5)])
    }

    #[test]
    fn prim_breaks_ties_towards_larger_sink() {
        let mst = square().prim();
        assert_eq!(
            mst,
            vec![
                Edge::<u32>::from((0, 1, 1)),
                Edge::<u32>::from((0, 3, 2)),
                Edge::<u32>::from((3, 2, 1))
            ]
        );
    }

    #[test]
    fn all_agree_on_square() {
        let g = square();
        assert_eq!(total_weight(&g.prim()), 4);
        assert_eq!(total_weight(&g.kruskal()), 4);
        assert_eq!(total_weight(&g.boruvka()), 4);
        assert_eq!(
            g.kruskal(),
            vec![
                Edge::<u32>::from((0, 1, 1)),
                Edge::<u32>::from((2, 3, 1)),
                Edge::<u32>::from((1, 2, 2))
            ]
        );
    }

    #[test]
    fn forest_on_disconnected_graph() {
        let g = UndirectedGraph::<i32>::from_edges([
            (0, 1, -3),
            (2, 3, 4),
            (3, 4, 1),
            (4, 2, 2),
            (5, 5, 0),
        ]);
        for forest in [g.prim(), g.kruskal(), g.boruvka()] {
            assert_eq!(forest.len(), 3);
            assert_eq!(total_weight(&forest), 0);
        }
    }

    #[test]
    fn empty_graph() {
        let g: UndirectedGraph<u32> = UndirectedGraph::new(0);
        assert!(g.prim().is_empty());
        assert!(g.kruskal().is_empty());
        assert!(g.boruvka().is_empty());
    }

    fn petgraph_total(g: &UndirectedGraph<u32>) -> u32 {
        let pg: UnGraph<(), u32, usize> = g.into();
        min_spanning_tree(&pg)
            .filter_map(|el| match el {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum()
    }

    #[quickcheck]
    fn distinct_weights_agree(g: ArbitraryGraph<Undirected, u32>) {
        let g = g.reweighted(|i, _| i as u32 * 3 + 1);
        let g = &g.graph;
        let expected = g.vertex_size() - g.scc().len();
        let prim = g.prim();
        let kruskal = g.kruskal();
        let boruvka = g.boruvka();
        assert_eq!(prim.len(), expected);
        assert_eq!(kruskal.len(), expected);
        assert_eq!(boruvka.len(), expected);
        assert_eq!(total_weight(&prim), total_weight(&kruskal));
        assert_eq!(total_weight(&boruvka), total_weight(&kruskal));
        assert_eq!(total_weight(&kruskal), petgraph_total(g));
    }

    #[quickcheck]
    fn tied_weights_agree_on_total(g: ArbitraryGraph<Undirected, u32>) {
        let g = &g.graph;
        let oracle = petgraph_total(g);
        assert_eq!(total_weight(&g.prim()), oracle);
        assert_eq!(total_weight(&g.kruskal()), oracle);
        assert_eq!(total_weight(&g.boruvka()), oracle);
    }
}
