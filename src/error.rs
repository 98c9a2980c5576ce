use crate::graph::VertexId;
use thiserror::Error;

/// Errors reported by graph construction and queries.
///
/// All of them are programming errors at the call site: a vertex index that does not
/// exist, a weight outside the range an algorithm accepts, or a request that makes no
/// sense for the given arguments. None of them is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index is not below the vertex count.
    #[error("vertex {} is out of range for a graph of {vertex_size} vertices", .vertex.to_raw())]
    InvalidVertex {
        vertex: VertexId,
        vertex_size: usize,
    },

    /// An edge weight lies outside the range the algorithm accepts.
    #[error("edge weight {weight} is outside of [0, {bound}]")]
    InvalidWeight { weight: String, bound: usize },

    /// A negative edge weight where weights must not be negative: Dijkstra's
    /// distances or flow capacities.
    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        weight: String,
        from: usize,
        to: usize,
    },

    /// The request is well-typed but has no meaningful answer.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
