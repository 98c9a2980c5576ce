use super::dfs::{Color, DfsEvent, DfsWalk};
use crate::graph::*;

/// Result of [TopologicalSort::toposort].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toposort {
    /// `false` if the graph has a cycle, in which case `order` is only a DFS finish
    /// order (or its reverse) and must not be used for scheduling.
    pub acyclic: bool,
    pub order: Vec<VertexId>,
}

/// Topological sort of directed graphs by DFS finish order.
pub trait TopologicalSort
where
    Self: QueryableGraph<Direction = Directed> + Sized,
{
    /// Every vertex exactly once.
    ///
    /// With `reverse` the order is reversed post-order, i.e. a valid linear extension
    /// for acyclic graphs; without it vertices come in the order their DFS finishes.
    fn toposort(&self, reverse: bool) -> Toposort {
        let mut acyclic = true;
        let mut order = Vec::with_capacity(self.vertex_size());
        for event in DfsWalk::exhaust(self) {
            match event {
                DfsEvent::Finish { vertex, .. } => order.push(vertex),
                DfsEvent::NonTreeEdge {
                    sink_color: Color::Grey,
                    ..
                } => acyclic = false,
                _ => {}
            }
        }
        if reverse {
            order.reverse();
        }
        Toposort { acyclic, order }
    }
}

impl<G> TopologicalSort for G where G: QueryableGraph<Direction = Directed> {}
