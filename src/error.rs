//! Error types for patina.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur during graph construction, queries, or traversals.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex id is out of range for the graph.
    #[error("vertex id {id} out of range for graph with {num_vertices} vertices")]
    InvalidVertex {
        /// The offending vertex id.
        id: usize,
        /// Number of vertices in the graph.
        num_vertices: usize,
    },

    /// An edge references a vertex id outside the vertex sequence.
    #[error("edge {edge} references invalid vertex id {vertex} (graph has {num_vertices} vertices)")]
    InvalidEdgeEndpoint {
        /// The edge index in the input edge list.
        edge: usize,
        /// The invalid vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        num_vertices: usize,
    },

    /// A face references a vertex id outside the vertex sequence.
    #[error("face {face} references invalid vertex id {vertex} (graph has {num_vertices} vertices)")]
    InvalidFaceVertex {
        /// The face index.
        face: usize,
        /// The invalid vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        num_vertices: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// File I/O error while writing colors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
