use crate::{graph::*, GraphError, Result};
use log::{debug, trace};
use num_traits::{SaturatingAdd, Zero};
use std::collections::VecDeque;

/// A minimum `source`-`sink` cut, from [MaximumFlow::min_cut].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<W> {
    /// Total capacity of `cut_edges`, equal to the maximum flow.
    pub value: W,
    /// Vertices still reachable from the source in the final residual network,
    /// in increasing order.
    pub source_side: Vec<VertexId>,
    /// Edges leaving `source_side`; for undirected graphs, edges with exactly one
    /// endpoint in it.
    pub cut_edges: Vec<Edge<W>>,
}

/// Maximum flow with edge weights as capacities.
///
/// Undirected edges carry their capacity in both directions. Self-loops carry nothing.
/// A flow value beyond the range of the weight type is reported as `W::max_value()`.
/// Every query fails with [GraphError::UnsupportedOperation] if `source == sink`,
/// and with [GraphError::NegativeWeight] on a negative capacity.
pub trait MaximumFlow
where
    Self: QueryableGraph + Sized,
    Self::Weight: Weight,
{
    /// Ford-Fulkerson, augmenting along any path a depth-first search finds.
    /// Terminates on integer capacities, in time proportional to the flow value.
    fn ford_fulkerson(&self, source: VertexId, sink: VertexId) -> Result<Self::Weight> {
        let mut net = Residual::new(self, source, sink)?;
        Ok(net.augment_all(Search::DepthFirst))
    }

    /// Edmonds-Karp, augmenting along shortest paths found by breadth-first search.
    /// $O(V E^2)$.
    fn edmonds_karp(&self, source: VertexId, sink: VertexId) -> Result<Self::Weight> {
        let mut net = Residual::new(self, source, sink)?;
        Ok(net.augment_all(Search::BreadthFirst))
    }

    /// Dinic's algorithm: each phase layers the residual network by BFS from the source
    /// and saturates it with a blocking flow along arcs that go up exactly one layer.
    /// $O(V^2 E)$.
    fn dinic(&self, source: VertexId, sink: VertexId) -> Result<Self::Weight> {
        let mut net = Residual::new(self, source, sink)?;
        Ok(net.dinic())
    }

    /// A minimum cut, read off the residual network Dinic's algorithm leaves behind.
    fn min_cut(&self, source: VertexId, sink: VertexId) -> Result<MinCut<Self::Weight>> {
        let mut net = Residual::new(self, source, sink)?;
        let flow = net.dinic();
        let reachable = net.reachable();
        let crossing = |e: &Edge<Self::Weight>| {
            let (a, b) = (reachable[e.source.to_raw()], reachable[e.sink.to_raw()]);
            if <Self::Direction as DirectedOrNot>::DIRECTED_OR_NOT {
                a && !b
            } else {
                a != b
            }
        };
        let cut_edges: Vec<Edge<Self::Weight>> =
            self.iter_edges().filter(|&e| crossing(e)).cloned().collect();
        let value = cut_edges
            .iter()
            .fold(Self::Weight::zero(), |acc, e| acc.saturating_add(&e.weight));
        debug_assert!(value == flow);
        Ok(MinCut {
            value,
            source_side: self.iter_vertices().filter(|v| reachable[v.to_raw()]).collect(),
            cut_edges,
        })
    }
}

impl<G> MaximumFlow for G
where
    G: QueryableGraph,
    G::Weight: Weight,
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    DepthFirst,
    BreadthFirst,
}

/// Residual network as paired arcs: arc `a` and `a ^ 1` are the two directions of one
/// edge. `flow[a]` stays within `0..=capacity[a]`, and at most one arc of a pair
/// carries flow, since pushing along `a` first cancels what `a ^ 1` carries.
struct Residual<W> {
    source: VertexId,
    sink: VertexId,
    head: Vec<VertexId>,
    capacity: Vec<W>,
    flow: Vec<W>,
    arcs: Vec<Vec<usize>>,
}

impl<W: Weight> Residual<W> {
    fn new<G>(g: &G, source: VertexId, sink: VertexId) -> Result<Self>
    where
        G: QueryableGraph<Weight = W>,
    {
        g.check_vertex(&source)?;
        g.check_vertex(&sink)?;
        if source == sink {
            return Err(GraphError::UnsupportedOperation(
                "maximum flow from a vertex to itself",
            ));
        }
        let mut res = Self {
            source,
            sink,
            head: Vec::with_capacity(2 * g.edge_size()),
            capacity: Vec::with_capacity(2 * g.edge_size()),
            flow: Vec::with_capacity(2 * g.edge_size()),
            arcs: vec![vec![]; g.vertex_size()],
        };
        for e in g.iter_edges() {
            if e.weight.is_negative() {
                return Err(GraphError::NegativeWeight {
                    weight: format!("{:?}", e.weight),
                    from: e.source.to_raw(),
                    to: e.sink.to_raw(),
                });
            }
            if e.source == e.sink {
                continue;
            }
            let back = if <G::Direction as DirectedOrNot>::DIRECTED_OR_NOT {
                W::zero()
            } else {
                e.weight
            };
            res.add_arc(e.source, e.sink, e.weight);
            res.add_arc(e.sink, e.source, back);
        }
        Ok(res)
    }

    fn add_arc(&mut self, from: VertexId, to: VertexId, capacity: W) {
        self.arcs[from.to_raw()].push(self.head.len());
        self.head.push(to);
        self.capacity.push(capacity);
        self.flow.push(W::zero());
    }

    fn tail(&self, arc: usize) -> VertexId {
        self.head[arc ^ 1]
    }

    /// What can still be pushed along `arc`: its unused capacity plus the flow it can
    /// cancel on its twin. Saturates, as an undirected edge may offer twice its weight.
    fn residual(&self, arc: usize) -> W {
        (self.capacity[arc] - self.flow[arc]).saturating_add(&self.flow[arc ^ 1])
    }

    /// `amount` must not exceed `self.residual(arc)`.
    fn push(&mut self, arc: usize, amount: W) {
        let cancel = amount.min(self.flow[arc ^ 1]);
        self.flow[arc ^ 1] = self.flow[arc ^ 1] - cancel;
        self.flow[arc] = self.flow[arc] + (amount - cancel);
    }

    /// Pushes the bottleneck along a path of arcs and returns it.
    fn augment(&mut self, path: &[usize]) -> W {
        let Some(bottleneck) = path.iter().map(|a| self.residual(*a)).min() else {
            return W::zero();
        };
        for a in path {
            self.push(*a, bottleneck);
        }
        trace!("augmented {:?} along {} arcs", bottleneck, path.len());
        bottleneck
    }

    fn augment_all(&mut self, search: Search) -> W {
        let mut flow = W::zero();
        let mut paths = 0usize;
        while let Some(path) = self.find_path(search) {
            flow = flow.saturating_add(&self.augment(&path));
            paths += 1;
        }
        debug!("{:?} search: {} augmenting paths, flow {:?}", search, paths, flow);
        flow
    }

    /// Arcs of a source-to-sink path with positive residual capacity on every arc.
    /// The pending vertices form a stack or a queue, depending on `search`.
    fn find_path(&self, search: Search) -> Option<Vec<usize>> {
        let mut via: Vec<Option<usize>> = vec![None; self.arcs.len()];
        let mut seen = vec![false; self.arcs.len()];
        seen[self.source.to_raw()] = true;
        let mut pending = VecDeque::from([self.source]);
        while let Some(v) = match search {
            Search::DepthFirst => pending.pop_back(),
            Search::BreadthFirst => pending.pop_front(),
        } {
            for &a in self.arcs[v.to_raw()].iter() {
                let to = self.head[a];
                if self.residual(a).is_zero() || seen[to.to_raw()] {
                    continue;
                }
                seen[to.to_raw()] = true;
                via[to.to_raw()] = Some(a);
                if to == self.sink {
                    return Some(self.path_to_sink(&via));
                }
                pending.push_back(to);
            }
        }
        None
    }

    fn path_to_sink(&self, via: &[Option<usize>]) -> Vec<usize> {
        let mut path = vec![];
        let mut cur = self.sink;
        while let Some(a) = via[cur.to_raw()] {
            path.push(a);
            cur = self.tail(a);
        }
        path.reverse();
        path
    }

    /// Hop distance of every vertex from the source over arcs with residual capacity.
    fn levels(&self) -> Vec<Option<usize>> {
        let mut level = vec![None; self.arcs.len()];
        level[self.source.to_raw()] = Some(0);
        let mut queue = VecDeque::from([self.source]);
        while let Some(v) = queue.pop_front() {
            let next = level[v.to_raw()].map(|l| l + 1);
            for &a in self.arcs[v.to_raw()].iter() {
                let to = self.head[a].to_raw();
                if !self.residual(a).is_zero() && level[to].is_none() {
                    level[to] = next;
                    queue.push_back(self.head[a]);
                }
            }
        }
        level
    }

    fn dinic(&mut self) -> W {
        let mut flow = W::zero();
        let mut phases = 0usize;
        loop {
            let level = self.levels();
            let Some(sink_level) = level[self.sink.to_raw()] else {
                break;
            };
            phases += 1;
            trace!("dinic phase {}: sink at level {}", phases, sink_level);
            flow = flow.saturating_add(&self.blocking_flow(&level));
        }
        debug!("dinic: {} phases, flow {:?}", phases, flow);
        flow
    }

    /// Saturates every admissible source-to-sink path of one layering.
    ///
    /// `cursor[v]` is the first arc of `v` not yet known to be useless in this phase.
    /// The current path lives in `path`; a dead end pops its last arc and moves the
    /// cursor of the vertex it came from past it.
    fn blocking_flow(&mut self, level: &[Option<usize>]) -> W {
        let admissible = |net: &Self, a: usize| {
            let from = level[net.tail(a).to_raw()];
            let to = level[net.head[a].to_raw()];
            !net.residual(a).is_zero() && from.is_some() && to == from.map(|l| l + 1)
        };
        let mut cursor = vec![0usize; self.arcs.len()];
        let mut path: Vec<usize> = vec![];
        let mut flow = W::zero();
        let mut cur = self.source;
        loop {
            if cur == self.sink {
                flow = flow.saturating_add(&self.augment(&path));
                path.clear();
                cur = self.source;
                continue;
            }
            let v = cur.to_raw();
            while cursor[v] < self.arcs[v].len() && !admissible(&*self, self.arcs[v][cursor[v]]) {
                cursor[v] += 1;
            }
            if let Some(&a) = self.arcs[v].get(cursor[v]) {
                path.push(a);
                cur = self.head[a];
            } else {
                let Some(a) = path.pop() else {
                    break;
                };
                cur = self.tail(a);
                cursor[cur.to_raw()] += 1;
            }
        }
        flow
    }

    fn reachable(&self) -> Vec<bool> {
        self.levels().into_iter().map(|l| l.is_some()).collect()
    }
}
