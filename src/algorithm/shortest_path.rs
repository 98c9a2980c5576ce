use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::debug;
use num_traits::{SaturatingAdd, Zero};
use std::{cmp::Reverse, collections::VecDeque};

/// Distance from the start vertex in [BellmanFord].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
    /// Reachable from a negative cycle that is itself reachable from the start,
    /// so there is no shortest distance.
    NegativeInfinity,
}

impl<W: Copy> Distance<W> {
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            _ => None,
        }
    }
}

/// Result of [SingleSourceShortestPath::bellman_ford].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellmanFord<W> {
    /// `false` iff some negative cycle is reachable from the start.
    pub no_negative_cycle: bool,
    pub distances: Vec<Distance<W>>,
}

/// Priority of a vertex in Dijkstra's queue. Unknown sorts after every known distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tentative<W> {
    Known(W),
    Unknown,
}

/// Shortest paths from one start vertex over weighted graphs.
///
/// Undirected edges can be walked both ways, so a single negative undirected edge
/// already makes a negative cycle.
pub trait SingleSourceShortestPath
where
    Self: QueryableGraph + Sized,
    Self::Weight: Weight,
{
    /// Dijkstra's algorithm over a decrease-key priority queue seeded with every vertex.
    ///
    /// Popping a vertex whose priority is still unknown ends the search, since all the
    /// remaining ones are unreachable too. $O((V + E) \log V)$.
    ///
    /// Fails with [GraphError::NegativeWeight] on a negative edge leaving a reachable
    /// vertex.
    fn dijkstra(&self, start: VertexId) -> Result<Vec<Option<Self::Weight>>> {
        self.check_vertex(&start)?;
        let n = self.vertex_size();
        let mut queue: KeyedPriorityQueue<VertexId, Reverse<Tentative<Self::Weight>>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        for v in self.iter_vertices() {
            let key = if v == start {
                Tentative::Known(Self::Weight::zero())
            } else {
                Tentative::Unknown
            };
            queue.push(v, Reverse(key));
        }
        let mut dist = vec![None; n];
        while let Some((v, Reverse(key))) = queue.pop() {
            let Tentative::Known(d) = key else {
                break;
            };
            dist[v.to_raw()] = Some(d);
            for e in self.out_edges(&v) {
                if e.weight.is_negative() {
                    return Err(GraphError::NegativeWeight {
                        weight: format!("{:?}", e.weight),
                        from: e.source.to_raw(),
                        to: e.sink.to_raw(),
                    });
                }
                let cand = Tentative::Known(d.saturating_add(&e.weight));
                let improves = matches!(
                    queue.get_priority(&e.sink),
                    Some(Reverse(cur)) if cand < *cur
                );
                if improves {
                    queue.push(e.sink, Reverse(cand));
                }
            }
        }
        Ok(dist)
    }

    /// Bellman-Ford: `V - 1` rounds relaxing every edge, stopping early once a round
    /// changes nothing. A final pass marks the sinks of edges that could still relax,
    /// and everything reachable from them becomes [Distance::NegativeInfinity].
    /// $O(V \cdot E)$.
    ///
    /// Tentative distances saturate at `W::min_value()`, and an edge whose sum would go
    /// below it counts as still relaxable. A path that is cheaper than the weight type
    /// can hold is therefore reported like a negative cycle.
    fn bellman_ford(&self, start: VertexId) -> Result<BellmanFord<Self::Weight>> {
        self.check_vertex(&start)?;
        let n = self.vertex_size();
        let mut dist: Vec<Option<Self::Weight>> = vec![None; n];
        dist[start.to_raw()] = Some(Self::Weight::zero());
        for _ in 1..n {
            if !relax_all(self, &mut dist) {
                break;
            }
        }

        let mut negative = vec![false; n];
        let mut queue = VecDeque::new();
        for v in self.iter_vertices() {
            let Some(d) = dist[v.to_raw()] else {
                continue;
            };
            for e in self.out_edges(&v) {
                let relaxable = improves(d, e.weight, dist[e.sink.to_raw()]);
                if relaxable && !std::mem::replace(&mut negative[e.sink.to_raw()], true) {
                    queue.push_back(e.sink);
                }
            }
        }
        let no_negative_cycle = queue.is_empty();
        if !no_negative_cycle {
            debug!(
                "bellman_ford: negative cycle reachable from {}, {} vertices still relaxable",
                start,
                queue.len()
            );
        }
        while let Some(v) = queue.pop_front() {
            for e in self.out_edges(&v) {
                if !std::mem::replace(&mut negative[e.sink.to_raw()], true) {
                    queue.push_back(e.sink);
                }
            }
        }

        let distances = dist
            .into_iter()
            .zip(negative)
            .map(|(d, neg)| match (d, neg) {
                (_, true) => Distance::NegativeInfinity,
                (Some(d), false) => Distance::Finite(d),
                (None, false) => Distance::Unreachable,
            })
            .collect();
        Ok(BellmanFord {
            no_negative_cycle,
            distances,
        })
    }
}

impl<G> SingleSourceShortestPath for G
where
    G: QueryableGraph,
    G::Weight: Weight,
{
}

/// One pass over all edges. Returns whether any distance improved.
fn relax_all<G>(g: &G, dist: &mut [Option<G::Weight>]) -> bool
where
    G: QueryableGraph,
    G::Weight: Weight,
{
    let mut changed = false;
    for v in g.iter_vertices() {
        let Some(d) = dist[v.to_raw()] else {
            continue;
        };
        for e in g.out_edges(&v) {
            let slot = &mut dist[e.sink.to_raw()];
            if !improves(d, e.weight, *slot) {
                continue;
            }
            let cand = d.saturating_add(&e.weight);
            if *slot != Some(cand) {
                *slot = Some(cand);
                changed = true;
            }
        }
    }
    changed
}

/// Whether reaching the sink of a `w` edge at distance `d` beats `cur`.
/// A sum below `W::min_value()` always does, even when `cur` already sits there.
fn improves<W: Weight>(d: W, w: W, cur: Option<W>) -> bool {
    match d.checked_add(&w) {
        Some(cand) => cur.map_or(true, |x| cand < x),
        None => w.is_negative() || cur.is_none(),
    }
}
