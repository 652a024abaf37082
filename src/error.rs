//! Error type for graph construction.
//!
//! The algorithms themselves never fail. Errors only come from strict edge
//! validation and from parsing edge lists handed over the WASM boundary.

use thiserror::Error;

/// Errors produced while building a graph from an edge list.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge connects a vertex to itself and the edge policy forbids it.
    #[error("Self-loop on vertex {vertex}")]
    SelfLoop {
        /// Debug rendering of the offending vertex
        vertex: String,
    },

    /// The same edge was listed more than once and the edge policy forbids it.
    ///
    /// For undirected graphs `(a, b)` and `(b, a)` are the same edge.
    #[error("Duplicate edge {from} -> {to}")]
    DuplicateEdge {
        /// Debug rendering of the source vertex
        from: String,
        /// Debug rendering of the target vertex
        to: String,
    },

    /// The edge list could not be decoded.
    #[error("Invalid edge list: {0}")]
    InvalidEdgeList(#[from] serde_json::Error),
}
