//! Graph traversal algorithms.
//!
//! All traversals here share one engine: frontier expansion driven by the
//! [`IndexedMinHeap`](crate::heap::IndexedMinHeap). Each query builds its own
//! heap and working tables, walks the graph, and returns per-vertex results;
//! nothing is cached on the graph between calls.
//!
//! # Available Algorithms
//!
//! - [`shortest_paths`] / [`shortest_path_color`]: Dijkstra shortest paths
//!   along graph edges, with path coloring
//! - [`diffuse_geodesic`]: bounded-depth diffusion weighted by accumulated
//!   path distance
//! - [`diffuse_euclidean`]: bounded-hop diffusion weighted by straight-line
//!   distance from the source

pub mod diffuse;
pub mod shortest_path;

pub use diffuse::{diffuse_euclidean, diffuse_geodesic, Filter};
pub use shortest_path::{shortest_path_color, shortest_paths, ShortestPaths};
