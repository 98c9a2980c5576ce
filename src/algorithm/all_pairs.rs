use super::SingleSourceShortestPath;
use crate::graph::*;
use log::debug;
use num_traits::{Bounded, CheckedSub, SaturatingAdd, Zero};

/// `dist[u][v]`, `None` where `v` is unreachable from `u`.
pub type DistanceMatrix<W> = Vec<Vec<Option<W>>>;

/// Shortest distances between all pairs of vertices.
///
/// Both algorithms return `None` when the graph has a negative cycle anywhere.
pub trait AllPairsShortestPath
where
    Self: QueryableGraph + Sized,
    Self::Weight: Weight,
{
    /// Floyd-Warshall. $O(V^3)$.
    ///
    /// Sums saturate at the bounds of the weight type.
    fn floyd_warshall(&self) -> Option<DistanceMatrix<Self::Weight>> {
        let n = self.vertex_size();
        let mut dist: DistanceMatrix<Self::Weight> = vec![vec![None; n]; n];
        for v in self.iter_vertices() {
            dist[v.to_raw()][v.to_raw()] = Some(Self::Weight::zero());
            for e in self.out_edges(&v) {
                let slot = &mut dist[v.to_raw()][e.sink.to_raw()];
                if slot.map_or(true, |x| e.weight < x) {
                    *slot = Some(e.weight);
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                let Some(ik) = dist[i][k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(kj) = dist[k][j] else {
                        continue;
                    };
                    let cand = ik.saturating_add(&kj);
                    let slot = &mut dist[i][j];
                    if slot.map_or(true, |x| cand < x) {
                        *slot = Some(cand);
                    }
                }
            }
            // bail out before a negative cycle keeps compounding
            if (0..n).any(|v| dist[v][v].map_or(false, |d| d.is_negative())) {
                debug!("floyd_warshall: negative cycle through an intermediate of rank {}", k);
                return None;
            }
        }
        Some(dist)
    }

    /// Johnson's algorithm: Bellman-Ford from a virtual vertex joined to every vertex by
    /// a 0-weight edge gives potentials `h`; with weights `w(u, v) + h(u) - h(v)`, which
    /// are non-negative, one Dijkstra per vertex finds all distances, and the potentials
    /// are taken off again. $O(V E \log V)$.
    ///
    /// Falls back to [Self::floyd_warshall] when a re-weighted edge or distance does
    /// not fit the weight type.
    fn johnson(&self) -> Option<DistanceMatrix<Self::Weight>> {
        let n = self.vertex_size();
        let zero = Self::Weight::zero();

        let mut augmented: DirectedGraph<Self::Weight> = DirectedGraph::new(n);
        let virtual_source = augmented.add_vertex();
        for v in self.iter_vertices() {
            for e in self.out_edges(&v) {
                augmented.add_edge(e.source, e.sink, e.weight).ok()?;
            }
            augmented.add_edge(virtual_source, v, zero).ok()?;
        }
        let potentials = augmented.bellman_ford(virtual_source).ok()?;
        if !potentials.no_negative_cycle {
            debug!("johnson: negative cycle, no potentials");
            return None;
        }
        let h: Vec<Self::Weight> = potentials
            .distances
            .iter()
            .map(|d| d.finite().unwrap_or(zero))
            .collect();

        match reweighted_distances(self, &h) {
            Some(res) => Some(res),
            None => {
                debug!("johnson: potentials overflow the weight type, using floyd_warshall");
                self.floyd_warshall()
            }
        }
    }
}

impl<G> AllPairsShortestPath for G
where
    G: QueryableGraph,
    G::Weight: Weight,
{
}

/// All distances under the potentials `h`, or `None` if some value leaves the range
/// of the weight type on the way.
fn reweighted_distances<G>(g: &G, h: &[G::Weight]) -> Option<DistanceMatrix<G::Weight>>
where
    G: QueryableGraph,
    G::Weight: Weight,
{
    let n = g.vertex_size();
    let mut reweighted: DirectedGraph<G::Weight> = DirectedGraph::new(n);
    for v in g.iter_vertices() {
        for e in g.out_edges(&v) {
            // h is never positive, so only the subtraction can overflow
            let w = (e.weight + h[e.source.to_raw()]).checked_sub(&h[e.sink.to_raw()])?;
            reweighted.add_edge(e.source, e.sink, w).ok()?;
        }
    }
    let mut res = Vec::with_capacity(n);
    for u in g.iter_vertices() {
        // reweighted edges are non-negative, so this cannot fail
        let row = reweighted.dijkstra(u).ok()?;
        let mut out = Vec::with_capacity(n);
        for (v, d) in row.into_iter().enumerate() {
            let d = match d {
                // may have saturated
                Some(d) if d == G::Weight::max_value() => return None,
                Some(d) => Some((d + h[v]).checked_sub(&h[u.to_raw()])?),
                None => None,
            };
            out.push(d);
        }
        res.push(out);
    }
    Some(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithm::Distance, graph::tests::*};
    use quickcheck_macros::quickcheck;

    #[test]
    fn small_directed() {
        let g = DirectedGraph::<i32>::from_edges([(0, 1, 4), (0, 2, 1), (2, 1, -2), (1, 3, 1)]);
        let expected = vec![
            vec![Some(0), Some(-1), Some(1), Some(0)],
            vec![None, Some(0), None, Some(1)],
            vec![None, Some(-2), Some(0), Some(-1)],
            vec![None, None, None, Some(0)],
        ];
        assert_eq!(g.floyd_warshall(), Some(expected.clone()));
        assert_eq!(g.johnson(), Some(expected));
    }

    #[test]
    fn negative_cycle_gives_none() {
        let g = DirectedGraph::<i32>::from_edges([(0, 1, 1), (1, 2, -3), (2, 1, 1), (3, 3, 0)]);
        assert_eq!(g.floyd_warshall(), None);
        assert_eq!(g.johnson(), None);
        let g = DirectedGraph::<i32>::from_edges([(0, 0, -1)]);
        assert_eq!(g.floyd_warshall(), None);
        assert_eq!(g.johnson(), None);
    }

    #[test]
    fn johnson_falls_back_when_potentials_overflow() {
        // re-weighting (2, 1) gives 100 + 0 - (-100), which does not fit an i8
        let g = DirectedGraph::<i8>::from_edges([(0, 1, -100), (2, 1, 100)]);
        let expected = vec![
            vec![Some(0), Some(-100), None],
            vec![None, Some(0), None],
            vec![None, Some(100), Some(0)],
        ];
        assert_eq!(g.floyd_warshall(), Some(expected.clone()));
        assert_eq!(g.johnson(), Some(expected));
    }

    #[test]
    fn sums_near_the_bounds() {
        let g = UndirectedGraph::<u8>::from_edges([(0, 1, 200), (1, 2, 200), (0, 2, 250)]);
        let fw = g.floyd_warshall().unwrap();
        assert_eq!(fw[0], vec![Some(0), Some(200), Some(250)]);
        assert_eq!(fw[1][1], Some(0));
        assert_eq!(g.johnson(), Some(fw));
    }

    #[test]
    fn empty_graph() {
        let g: DirectedGraph<u32> = DirectedGraph::new(0);
        assert_eq!(g.floyd_warshall(), Some(vec![]));
        assert_eq!(g.johnson(), Some(vec![]));
    }

    #[quickcheck]
    fn rows_match_dijkstra(g: ArbitraryGraph<Undirected, u32>) {
        let g = &g.graph;
        let fw = g.floyd_warshall().unwrap();
        let johnson = g.johnson().unwrap();
        for v in g.iter_vertices() {
            let row = g.dijkstra(v).unwrap();
            assert_eq!(fw[v.to_raw()], row);
            assert_eq!(johnson[v.to_raw()], row);
        }
    }

    #[quickcheck]
    fn johnson_agrees_with_floyd_warshall(g: ArbitraryGraph<Directed, i64>) {
        let g = g.reweighted(|_, w| w - 3);
        let g = &g.graph;
        let fw = g.floyd_warshall();
        assert_eq!(g.johnson(), fw);
        let any_negative_cycle = g
            .iter_vertices()
            .any(|v| !g.bellman_ford(v).unwrap().no_negative_cycle);
        assert_eq!(fw.is_none(), any_negative_cycle);
        if let Some(fw) = fw {
            for v in g.iter_vertices() {
                let bf: Vec<Option<i64>> = g
                    .bellman_ford(v)
                    .unwrap()
                    .distances
                    .iter()
                    .map(Distance::finite)
                    .collect();
                assert_eq!(fw[v.to_raw()], bf);
            }
        }
    }
}
