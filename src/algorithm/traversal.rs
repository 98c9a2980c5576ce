use crate::{graph::*, GraphError, Result};
use num_traits::ToPrimitive;
use std::collections::VecDeque;

/// Breadth-first search for hop distances, on any graph.
pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Number of edges on a shortest path from `start` to each vertex,
    /// `None` for vertices `start` cannot reach. $O(V + E)$.
    fn bfs(&self, start: VertexId) -> Result<Vec<Option<usize>>> {
        self.check_vertex(&start)?;
        let mut dist = vec![None; self.vertex_size()];
        dist[start.to_raw()] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            let next = dist[cur.to_raw()].map(|d| d + 1);
            for e in self.out_edges(&cur) {
                let slot = &mut dist[e.sink.to_raw()];
                if slot.is_none() {
                    *slot = next;
                    queue.push_back(e.sink);
                }
            }
        }
        Ok(dist)
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

/// Breadth-first searches over small non-negative integer weights.
pub trait WeightedBreadthFirstSearch
where
    Self: QueryableGraph + Sized,
    Self::Weight: Weight + ToPrimitive,
{
    /// Shortest distances when every weight is 0 or 1, by a double-ended queue:
    /// a neighbour relaxed over a 0-weight edge goes to the front, over a 1-weight edge
    /// to the back. $O(V + E)$.
    ///
    /// Fails with [GraphError::InvalidWeight] if any edge weight is outside `{0, 1}`.
    fn bfs_01(&self, start: VertexId) -> Result<Vec<Option<usize>>> {
        self.check_vertex(&start)?;
        let steps = small_weights(self, 1)?;
        let mut dist: Vec<Option<usize>> = vec![None; self.vertex_size()];
        dist[start.to_raw()] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            let Some(d) = dist[cur.to_raw()] else {
                continue;
            };
            for (e, w) in self.out_edges(&cur).zip(&steps[cur.to_raw()]) {
                let cand = d + w;
                let slot = &mut dist[e.sink.to_raw()];
                if slot.map_or(true, |x| cand < x) {
                    *slot = Some(cand);
                    if *w == 0 {
                        queue.push_front(e.sink);
                    } else {
                        queue.push_back(e.sink);
                    }
                }
            }
        }
        Ok(dist)
    }

    /// Dial's algorithm: shortest distances when every weight lies in `[0, k]`.
    ///
    /// Pending vertices wait in `c + 1` FIFO buckets indexed by distance modulo `c + 1`,
    /// where `c <= k` is the largest weight in the graph. A vertex whose distance improves
    /// is queued again; its older, larger entry is skipped when it comes up.
    /// $O(V \cdot c + E)$.
    ///
    /// Fails with [GraphError::InvalidWeight] if any edge weight is outside `[0, k]`,
    /// and with [GraphError::UnsupportedOperation] if a distance does not fit a `usize`.
    fn bfs_0k(&self, start: VertexId, k: usize) -> Result<Vec<Option<usize>>> {
        self.check_vertex(&start)?;
        let steps = small_weights(self, k)?;
        let span = steps
            .iter()
            .flatten()
            .max()
            .map_or(Some(1), |c| c.checked_add(1))
            .ok_or(DISTANCE_OVERFLOW)?;
        let mut dist: Vec<Option<usize>> = vec![None; self.vertex_size()];
        dist[start.to_raw()] = Some(0);
        let mut buckets: Vec<VecDeque<(VertexId, usize)>> = vec![VecDeque::new(); span];
        buckets[0].push_back((start, 0));
        let mut pending = 1usize;
        let mut idx = 0;
        while pending > 0 {
            let Some((cur, d)) = buckets[idx].pop_front() else {
                idx = (idx + 1) % span;
                continue;
            };
            pending -= 1;
            if dist[cur.to_raw()] != Some(d) {
                continue;
            }
            for (e, &w) in self.out_edges(&cur).zip(&steps[cur.to_raw()]) {
                let cand = d.checked_add(w).ok_or(DISTANCE_OVERFLOW)?;
                let slot = &mut dist[e.sink.to_raw()];
                if slot.map_or(true, |x| cand < x) {
                    *slot = Some(cand);
                    buckets[cand % span].push_back((e.sink, cand));
                    pending += 1;
                }
            }
        }
        Ok(dist)
    }
}

impl<G> WeightedBreadthFirstSearch for G
where
    G: QueryableGraph,
    G::Weight: Weight + ToPrimitive,
{
}

const DISTANCE_OVERFLOW: GraphError =
    GraphError::UnsupportedOperation("distances beyond the range of usize");

/// Weights per adjacency row as `usize`, checked to lie in `[0, bound]`.
fn small_weights<G>(g: &G, bound: usize) -> Result<Vec<Vec<usize>>>
where
    G: QueryableGraph,
    G::Weight: Weight + ToPrimitive,
{
    g.iter_vertices()
        .map(|v| {
            g.out_edges(&v)
                .map(|e| match e.weight.to_usize() {
                    Some(w) if w <= bound => Ok(w),
                    _ => Err(GraphError::InvalidWeight {
                        weight: format!("{:?}", e.weight),
                        bound,
                    }),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn bfs_on_path_with_unreachable() {
        let g: DirectedGraph = DirectedGraph::from_edges([(0, 1), (1, 2), (3, 0)]);
        assert_eq!(
            g.bfs(VertexId::new(0)).unwrap(),
            vec![Some(0), Some(1), Some(2), None]
        );
    }

    #[test]
    fn bfs_rejects_invalid_start() {
        let g: UndirectedGraph = UndirectedGraph::new(2);
        assert_eq!(
            g.bfs(VertexId::new(2)),
            Err(GraphError::InvalidVertex {
                vertex: VertexId::new(2),
                vertex_size: 2,
            })
        );
    }

    #[test]
    fn bfs_01_prefers_zero_edges() {
        let g = DirectedGraph::<u32>::from_edges([(0, 1, 1), (0, 2, 0), (2, 3, 0), (3, 1, 0)]);
        assert_eq!(
            g.bfs_01(VertexId::new(0)).unwrap(),
            vec![Some(0), Some(0), Some(0), Some(0)]
        );
    }

    #[test]
    fn bfs_01_rejects_heavy_edges() {
        let g = UndirectedGraph::<i32>::from_edges([(0, 1, 2)]);
        assert_eq!(
            g.bfs_01(VertexId::new(0)),
            Err(GraphError::InvalidWeight {
                weight: "2".to_owned(),
                bound: 1,
            })
        );
        let g = UndirectedGraph::<i32>::from_edges([(0, 1, -1)]);
        assert!(matches!(
            g.bfs_0k(VertexId::new(0), 3),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn dial_picks_cheaper_detour() {
        let g = DirectedGraph::<u8>::from_edges([(0, 3, 5), (0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        assert_eq!(
            g.bfs_0k(VertexId::new(0), 5).unwrap(),
            vec![Some(0), Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn dial_with_zero_bound() {
        let g = UndirectedGraph::<u32>::from_edges([(0, 1, 0), (2, 3, 0)]);
        assert_eq!(
            g.bfs_0k(VertexId::new(1), 0).unwrap(),
            vec![Some(0), Some(0), None, None]
        );
    }

    #[test]
    fn dial_sizes_buckets_by_actual_weights() {
        let g = DirectedGraph::<u64>::from_edges([(0, 1, 3), (1, 2, 0), (0, 2, 4)]);
        assert_eq!(
            g.bfs_0k(VertexId::new(0), usize::MAX).unwrap(),
            vec![Some(0), Some(3), Some(3)]
        );
        let g = DirectedGraph::<u64>::from_edges([(0, 1, u64::MAX)]);
        assert!(g.bfs_0k(VertexId::new(0), usize::MAX).is_err());
    }

    #[quickcheck]
    fn bfs_matches_relaxation(g: ArbitraryGraph<Directed>, start: usize) {
        let start = VertexId::new(start % g.graph.vertex_size());
        assert_eq!(g.graph.bfs(start).unwrap(), brute_force_hops(&g.graph, start));
    }

    #[quickcheck]
    fn bfs_matches_relaxation_undirected(g: ArbitraryGraph<Undirected>, start: usize) {
        let start = VertexId::new(start % g.graph.vertex_size());
        assert_eq!(g.graph.bfs(start).unwrap(), brute_force_hops(&g.graph, start));
    }

    #[quickcheck]
    fn bfs_01_matches_relaxation(g: ArbitraryGraph<Directed, u32>, start: usize) {
        let g = g.reweighted(|_, w| w % 2);
        let start = VertexId::new(start % g.graph.vertex_size());
        let oracle: Vec<_> = brute_force_distances(&g.graph, start)
            .into_iter()
            .map(|d| d.map(|d| d as usize))
            .collect();
        assert_eq!(g.graph.bfs_01(start).unwrap(), oracle);
    }

    #[quickcheck]
    fn bfs_0k_matches_relaxation(g: ArbitraryGraph<Undirected, u32>, start: usize, k: u8) {
        let k = (k % 6) as u32;
        let g = g.reweighted(|_, w| w % (k + 1));
        let start = VertexId::new(start % g.graph.vertex_size());
        let oracle: Vec<_> = brute_force_distances(&g.graph, start)
            .into_iter()
            .map(|d| d.map(|d| d as usize))
            .collect();
        assert_eq!(g.graph.bfs_0k(start, k as usize).unwrap(), oracle);
    }
}
