use super::{Unweighted, VertexId};

/// An edge from `source` to `sink` carrying a weight.
///
/// Unweighted graphs use [Unweighted] as `W`.
/// Equality and hashing are structural over all three fields.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge<W = Unweighted> {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: VertexId, sink: VertexId, weight: W) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }
}

impl<W: Clone> Edge<W> {
    /// The same edge walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
            weight: self.weight.clone(),
        }
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((source, sink, weight): (usize, usize, W)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(sink), weight)
    }
}

impl From<(usize, usize)> for Edge<Unweighted> {
    fn from((source, sink): (usize, usize)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(sink), Unweighted)
    }
}
