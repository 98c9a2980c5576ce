use crate::{graph::*, Result};
use bimap::BiHashMap;

/// This wraps a graph and how its vertices are mapped from another graph.
///
/// The left side of `vmap` holds IDs in `graph`, the right side IDs in the graph it was
/// derived from. Since `graph` keeps dense IDs, algorithms run on `graph` directly and
/// their results are translated back through `vmap`.
#[derive(Clone)]
pub struct MappedGraph<G> {
    pub graph: G,
    pub vmap: BiHashMap<VertexId, VertexId>,
}

impl<G> MappedGraph<G>
where
    G: GrowableGraph,
{
    /// The subgraph induced by `vertices`: they are renumbered densely in the given
    /// order, and exactly the edges with both endpoints selected are kept.
    /// Repeated vertices are taken once.
    pub fn induced<H, I>(lower: &H, vertices: I) -> Result<Self>
    where
        H: QueryableGraph<Direction = G::Direction, Weight = G::Weight>,
        I: IntoIterator<Item = VertexId>,
    {
        let mut graph = G::with_vertices(0);
        let mut vmap = BiHashMap::new();
        for v in vertices {
            lower.check_vertex(&v)?;
            if vmap.contains_right(&v) {
                continue;
            }
            let my_v = graph.add_vertex();
            vmap.insert(my_v, v);
        }
        for e in lower.iter_edges() {
            let ends = (vmap.get_by_right(&e.source), vmap.get_by_right(&e.sink));
            if let (Some(src), Some(snk)) = ends {
                graph.add_edge(*src, *snk, e.weight.clone())?;
            }
        }
        Ok(Self { graph, vmap })
    }

    /// ID in the derived-from graph of a vertex in `graph`.
    pub fn origin_of(&self, v: &VertexId) -> Option<VertexId> {
        self.vmap.get_by_left(v).copied()
    }

    /// ID in `graph` of a vertex from the derived-from graph, if it was selected.
    pub fn image_of(&self, v: &VertexId) -> Option<VertexId> {
        self.vmap.get_by_right(v).copied()
    }
}

impl<G> std::fmt::Debug for MappedGraph<G>
where
    G: QueryableGraph,
    G::Weight: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            let origin = self.vmap.get_by_left(&v).copied().unwrap_or(v);
            writeln!(f, "{} (was {})", v, origin)?;
            for e in self.graph.out_edges(&v) {
                writeln!(f, "  --{:?}-> {}", e.weight, e.sink)?;
            }
        }
        Ok(())
    }
}
