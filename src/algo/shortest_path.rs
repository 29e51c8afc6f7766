//! Dijkstra shortest paths along graph edges.
//!
//! Computes single-source shortest path trees over the mesh graph, with edge
//! weights given by Euclidean edge length. The frontier is the indexable
//! min-heap: every vertex enters the heap up front at infinite priority, the
//! source is lowered to zero, and each relaxation lowers a neighbor's
//! priority in place.
//!
//! # Example
//!
//! ```
//! use patina::prelude::*;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//! ];
//! let graph = build_from_edges(&positions, &[[0, 1], [1, 2]]).unwrap();
//!
//! let result = shortest_paths(&graph, VertexId::new(0)).unwrap();
//! assert_eq!(result.distance(VertexId::new(2)), 2.0);
//!
//! let path = result.path_to(VertexId::new(2)).unwrap();
//! assert_eq!(path.len(), 3);
//! ```

use log::debug;

use crate::color::Color;
use crate::error::Result;
use crate::graph::{MeshGraph, VertexId};
use crate::heap::IndexedMinHeap;

/// Result of a single-source shortest path computation.
///
/// Contains the distance from the source to every vertex
/// (`f64::INFINITY` when unreachable) and the predecessor table for path
/// reconstruction.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    distances: Vec<f64>,
    predecessors: Vec<VertexId>,
}

impl ShortestPaths {
    /// Get the distance to a vertex.
    ///
    /// Returns `f64::INFINITY` if the vertex is unreachable from the source.
    #[inline]
    pub fn distance(&self, v: VertexId) -> f64 {
        self.distances[v.index()]
    }

    /// Get all distances as a slice.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Check if a vertex is reachable from the source.
    #[inline]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distances[v.index()].is_finite()
    }

    /// Reconstruct the shortest path from the source to `target`.
    ///
    /// Returns `None` if `target` is unreachable. The path includes both
    /// endpoints; for the source itself it is a single-element path.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.distances[target.index()].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        while current.is_valid() {
            path.push(current);
            current = self.predecessors[current.index()];
        }
        path.reverse();
        Some(path)
    }
}

/// Compute shortest paths from `source` to every vertex of the graph.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - The source vertex
///
/// # Returns
///
/// A [`ShortestPaths`] table, or [`GraphError::InvalidVertex`] if `source`
/// is out of range.
///
/// [`GraphError::InvalidVertex`]: crate::error::GraphError::InvalidVertex
pub fn shortest_paths(graph: &MeshGraph, source: VertexId) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    Ok(run_dijkstra(graph, source, VertexId::invalid()))
}

/// Compute the shortest path from `source` to `target` and paint it.
///
/// Runs Dijkstra from `source` (stopping once `target` has been settled),
/// walks the predecessor chain back from `target`, and assigns `color` to
/// every vertex on that path. All other vertices stay [`Color::BLACK`].
///
/// If `target` is unreachable, the predecessor walk stops at `target`
/// itself, so exactly one vertex is colored; this is a documented outcome,
/// not an error. If `source == target`, only that vertex is colored.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - Start of the path
/// * `target` - End of the path
/// * `color` - Color assigned to every path vertex
///
/// # Returns
///
/// A buffer of one color per vertex, or [`GraphError::InvalidVertex`] if
/// either endpoint is out of range.
///
/// # Example
///
/// ```
/// use patina::prelude::*;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ];
/// let graph = build_from_edges(&positions, &[[0, 1], [1, 2]]).unwrap();
///
/// let red = Color::new(255.0, 0.0, 0.0);
/// let colors = shortest_path_color(&graph, VertexId::new(0), VertexId::new(2), red).unwrap();
/// assert_eq!(colors, vec![red, red, red]);
/// ```
///
/// [`GraphError::InvalidVertex`]: crate::error::GraphError::InvalidVertex
pub fn shortest_path_color(
    graph: &MeshGraph,
    source: VertexId,
    target: VertexId,
    color: Color,
) -> Result<Vec<Color>> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    debug!("shortest-path paint {:?} -> {:?}", source, target);

    let result = run_dijkstra(graph, source, target);

    let mut colors = vec![Color::BLACK; graph.num_vertices()];
    let mut current = target;
    while current.is_valid() {
        colors[current.index()] = color;
        current = result.predecessors[current.index()];
    }

    Ok(colors)
}

/// Dijkstra over the indexed heap. `target` may be the invalid sentinel for
/// a full single-source tree; otherwise the loop ends in the iteration that
/// extracts `target` (after relaxing its neighbors, so the settled distance
/// and predecessor are final).
fn run_dijkstra(graph: &MeshGraph, source: VertexId, target: VertexId) -> ShortestPaths {
    let n = graph.num_vertices();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![VertexId::invalid(); n];
    distances[source.index()] = 0.0;

    let mut heap = IndexedMinHeap::with_capacity(n);
    for v in graph.vertex_ids() {
        heap.insert(v.raw(), f64::INFINITY);
    }
    heap.change_priority(source.raw(), 0.0);

    while let Some((key, dist_u)) = heap.extract_min() {
        let u = VertexId::new(key as usize);
        let p_u = graph.position(u);

        for &v in graph.adjacent(u) {
            let edge_len = (graph.position(v) - p_u).norm();
            let new_dist = dist_u + edge_len;

            if new_dist < distances[v.index()] {
                distances[v.index()] = new_dist;
                predecessors[v.index()] = u;
                heap.change_priority(v.raw(), new_dist);
            }
        }

        if u == target {
            break;
        }
    }

    ShortestPaths {
        distances,
        predecessors,
    }
}
