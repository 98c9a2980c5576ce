use super::StronglyConnectedComponents;
use crate::graph::*;

/// Euler trails: walks that use every edge exactly once.
///
/// Isolated vertices do not matter. A graph with edges but without any vertex has no
/// trail; one with vertices but no edges has the trivial trail at vertex 0.
pub trait EulerPath
where
    Self: QueryableGraph + Sized,
{
    /// `(start, end)` of an Euler trail, if there is one.
    ///
    /// Directed graphs need every vertex balanced, except at most one with one more
    /// outgoing edge (the start) and at most one with one more incoming edge (the end).
    /// Undirected graphs need zero or two vertices of odd degree; with two, the smaller
    /// one is the start. In both cases the non-isolated vertices must form one
    /// (strongly) connected component once a virtual edge closes the trail from end to
    /// start. Balanced graphs give `(v, v)` with `v` the first non-isolated vertex.
    fn check_if_semi_euler(&self) -> Option<(VertexId, VertexId)> {
        let n = self.vertex_size();
        if n == 0 {
            return None;
        }
        let directed = <Self::Direction as DirectedOrNot>::DIRECTED_OR_NOT;
        let out_degree: Vec<usize> = self.iter_vertices().map(|v| self.out_degree(&v)).collect();
        let mut in_degree = vec![0usize; n];
        if directed {
            for e in self.iter_edges() {
                in_degree[e.sink.to_raw()] += 1;
            }
        }

        let ends = if directed {
            let mut start = None;
            let mut end = None;
            for v in self.iter_vertices() {
                let (o, i) = (out_degree[v.to_raw()], in_degree[v.to_raw()]);
                if o == i {
                    continue;
                } else if o == i + 1 && start.is_none() {
                    start = Some(v);
                } else if i == o + 1 && end.is_none() {
                    end = Some(v);
                } else {
                    return None;
                }
            }
            match (start, end) {
                (Some(s), Some(e)) => Some((s, e)),
                (None, None) => None,
                _ => return None,
            }
        } else {
            let odd: Vec<VertexId> = self
                .iter_vertices()
                .filter(|v| out_degree[v.to_raw()] % 2 == 1)
                .collect();
            match odd.as_slice() {
                [] => None,
                [s, e] => Some((*s, *e)),
                _ => return None,
            }
        };

        let active: Vec<VertexId> = self
            .iter_vertices()
            .filter(|v| out_degree[v.to_raw()] > 0 || in_degree[v.to_raw()] > 0)
            .collect();
        let Some(&first) = active.first() else {
            return Some((VertexId::new(0), VertexId::new(0)));
        };
        let mut skeleton: AdjacentListGraph<Self::Direction, Unweighted> =
            AdjacentListGraph::new(n);
        for e in self.iter_edges() {
            skeleton.add_edge(e.source, e.sink, Unweighted).ok()?;
        }
        if let Some((start, end)) = ends {
            skeleton.add_edge(end, start, Unweighted).ok()?;
        }
        let sub: MappedGraph<AdjacentListGraph<Self::Direction, Unweighted>> =
            MappedGraph::induced(&skeleton, active).ok()?;
        if sub.graph.scc().len() != 1 {
            return None;
        }
        Some(ends.unwrap_or((first, first)))
    }

    /// Whether there is an Euler circuit, i.e. a trail that ends where it starts.
    fn check_if_euler(&self) -> bool {
        matches!(self.check_if_semi_euler(), Some((start, end)) if start == end)
    }

    /// The vertices of an Euler trail from the start given by
    /// [Self::check_if_semi_euler], `edge_size() + 1` of them.
    ///
    /// Hierholzer's algorithm: walk unused edges until stuck, emit the stuck vertex
    /// and back up; the emitted sequence is the trail reversed.
    fn euler_path(&self) -> Option<Vec<VertexId>> {
        let (start, _) = self.check_if_semi_euler()?;
        let directed = <Self::Direction as DirectedOrNot>::DIRECTED_OR_NOT;
        let mut adj: Vec<Vec<(VertexId, usize)>> = vec![vec![]; self.vertex_size()];
        for (i, e) in self.iter_edges().enumerate() {
            adj[e.source.to_raw()].push((e.sink, i));
            if !directed {
                adj[e.sink.to_raw()].push((e.source, i));
            }
        }
        let mut used = vec![false; self.edge_size()];
        let mut cursor = vec![0usize; self.vertex_size()];
        let mut stack = vec![start];
        let mut res = Vec::with_capacity(self.edge_size() + 1);
        while let Some(&v) = stack.last() {
            let row = &adj[v.to_raw()];
            let c = &mut cursor[v.to_raw()];
            while *c < row.len() && used[row[*c].1] {
                *c += 1;
            }
            match row.get(*c) {
                Some(&(next, i)) => {
                    used[i] = true;
                    stack.push(next);
                }
                None => {
                    res.push(v);
                    stack.pop();
                }
            }
        }
        res.reverse();
        Some(res)
    }

    /// An Euler circuit, first and last vertex equal.
    fn euler_cycle(&self) -> Option<Vec<VertexId>> {
        if self.check_if_euler() {
            self.euler_path()
        } else {
            None
        }
    }
}

impl<G: QueryableGraph> EulerPath for G {}
