//! # Patina
//!
//! Geodesic paint and shortest-path queries over 3D vertex/edge mesh graphs.
//!
//! Patina models a mesh as an undirected graph of vertices positioned in 3D
//! space and answers priority-queue-driven traversal queries over it: exact
//! shortest paths along edges, and range-limited "paint" diffusions that map
//! distances into per-vertex color attributes.
//!
//! ## Features
//!
//! - **Indexable min-heap**: a binary min-heap addressable by external key,
//!   so traversals update priorities in place instead of queueing stale
//!   entries
//! - **Structural queries**: vertex/edge counts, degrees, neighbor lists,
//!   mean edge length and degree
//! - **Shortest-path coloring**: Dijkstra with path reconstruction and
//!   single-color painting
//! - **Paint diffusion**: bounded-depth geodesic and bounded-hop Euclidean
//!   frontiers with Gaussian or box distance filters
//! - **Color output**: line-oriented `r, g, b` serialization of result
//!   buffers
//!
//! ## Quick Start
//!
//! ```
//! use patina::prelude::*;
//! use nalgebra::Point3;
//!
//! // A small mesh: a line of four vertices.
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(3.0, 0.0, 0.0),
//! ];
//! let edges = vec![[0, 1], [1, 2], [2, 3]];
//! let graph = build_from_edges(&positions, &edges).unwrap();
//!
//! // Query structure
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_edges(), 3);
//!
//! // Paint the shortest path from one end to the other
//! let red = Color::new(255.0, 0.0, 0.0);
//! let colors = shortest_path_color(&graph, VertexId::new(0), VertexId::new(3), red).unwrap();
//! assert!(colors.iter().all(|&c| c == red));
//!
//! // Diffuse a fading paint splat around vertex 0
//! let glow = diffuse_geodesic(
//!     &graph,
//!     VertexId::new(0),
//!     red,
//!     2,
//!     Filter::Gaussian { alpha: 1.5 },
//! )
//! .unwrap();
//! assert!(glow[1].r < glow[0].r);
//! ```
//!
//! ## Ownership Model
//!
//! A [`MeshGraph`](graph::MeshGraph) is constructed once from positions and
//! edges and is read-only afterwards. Every traversal call owns its own heap
//! and working tables, so a graph can be shared freely across queries.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod color;
pub mod error;
pub mod graph;
pub mod heap;
pub mod io;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use patina::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        diffuse_euclidean, diffuse_geodesic, shortest_path_color, shortest_paths, Filter,
        ShortestPaths,
    };
    pub use crate::color::Color;
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::{build_from_edges, build_from_triangles, MeshGraph, Vertex, VertexId};
    pub use crate::heap::IndexedMinHeap;
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_tetrahedron_wireframe() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];

        let faces = vec![
            [0, 2, 1], // bottom
            [0, 1, 3], // front
            [1, 2, 3], // right
            [2, 0, 3], // left
        ];

        let graph = build_from_triangles(&positions, &faces).unwrap();

        // Complete graph on four vertices: 6 edges, degree 3 everywhere.
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 6);
        for v in graph.vertex_ids() {
            assert_eq!(graph.degree(v).unwrap(), 3);
        }

        // Every vertex is one hop from every other.
        let result = shortest_paths(&graph, VertexId::new(0)).unwrap();
        for v in graph.vertex_ids() {
            assert!(result.is_reachable(v));
        }
    }

    #[test]
    fn test_paint_pipeline_end_to_end() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let graph = build_from_edges(&positions, &[[0, 1], [1, 2]]).unwrap();

        let colors = diffuse_geodesic(
            &graph,
            VertexId::new(1),
            Color::new(200.0, 200.0, 200.0),
            1,
            Filter::Box { alpha: 1.0 },
        )
        .unwrap();

        let mut out = Vec::new();
        crate::io::write_colors(&colors, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "200, 200, 200\n200, 200, 200\n200, 200, 200\n");
    }
}
