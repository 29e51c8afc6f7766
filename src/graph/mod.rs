//! The mesh graph data structure.
//!
//! This module provides [`MeshGraph`], an undirected adjacency-list graph
//! over vertices positioned in 3D space. It is the structure the traversal
//! algorithms in [`crate::algo`] walk: vertices carry positions, edges carry
//! their Euclidean length implicitly, and adjacency is stored as integer
//! vertex ids resolved through the owning graph (never as references into
//! the vertex storage).
//!
//! # Construction
//!
//! Graphs are built once from a vertex position sequence plus an edge list
//! (or the wireframe of a triangle soup) and are read-only afterwards:
//!
//! ```
//! use patina::graph::{build_from_edges, MeshGraph};
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//! ];
//! let edges = vec![[0, 1], [1, 2]];
//!
//! let graph = build_from_edges(&positions, &edges).unwrap();
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_edges(), 2);
//! ```

mod builder;
mod index;

pub use builder::{build_from_edges, build_from_triangles};
pub use index::VertexId;

use nalgebra::Point3;

use crate::error::{GraphError, Result};

/// A vertex of the graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a new vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// An undirected graph over positioned vertices.
///
/// Vertex identity is the index into the vertex sequence, fixed at
/// construction. Adjacency is symmetric: every undirected edge `(a, b)`
/// lists `b` under `a` and `a` under `b`, in edge-list order. The structure
/// has no mutation API beyond construction; traversals treat it as an
/// immutable, freely shared resource.
#[derive(Debug, Clone)]
pub struct MeshGraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) adjacency: Vec<Vec<VertexId>>,
}

impl MeshGraph {
    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of undirected edges (each edge counted once).
    pub fn num_edges(&self) -> usize {
        let directed: usize = self.adjacency.iter().map(Vec::len).sum();
        directed / 2
    }

    /// Get a vertex by id.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    /// Check whether `v` names a vertex of this graph.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        v.is_valid() && v.index() < self.vertices.len()
    }

    /// Iterate over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all vertices with their ids.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    // ==================== Structural Queries ====================

    /// Get the degree (number of incident edges) of a vertex.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v.index()].len())
    }

    /// Get the neighbors of a vertex, in adjacency insertion order.
    ///
    /// The order is the order the incident edges appeared in the input edge
    /// list; the graph never sorts it. Callers that need a canonical order
    /// sort a copy themselves.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v.index()])
    }

    /// Mean Euclidean edge length over the whole graph.
    ///
    /// Sums over all directed adjacency entries, which visits each edge
    /// twice, and divides by the directed count, which is also twice the
    /// edge count, so the undirected mean comes out right. Returns 0.0 for
    /// an edgeless graph.
    pub fn average_edge_length(&self) -> f64 {
        let mut sum = 0.0;
        let mut entries = 0usize;

        for (i, neighbors) in self.adjacency.iter().enumerate() {
            let p = &self.vertices[i].position;
            for &nb in neighbors {
                sum += (self.vertices[nb.index()].position - p).norm();
                entries += 1;
            }
        }

        if entries == 0 {
            return 0.0;
        }
        sum / entries as f64
    }

    /// Mean vertex degree, equivalently `2 * num_edges / num_vertices`.
    ///
    /// Returns 0.0 for an empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        let directed: usize = self.adjacency.iter().map(Vec::len).sum();
        directed as f64 / self.vertices.len() as f64
    }

    /// Euclidean length of the edge between two vertices.
    ///
    /// The vertices need not actually be adjacent; this is the straight-line
    /// distance between their positions.
    pub fn edge_length(&self, a: VertexId, b: VertexId) -> Result<f64> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok((self.vertices[b.index()].position - self.vertices[a.index()].position).norm())
    }

    // ==================== Internal ====================

    /// Adjacency list of a vertex known to be in range.
    #[inline]
    pub(crate) fn adjacent(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v.index()]
    }

    /// Fail with [`GraphError::InvalidVertex`] if `v` is out of range.
    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                id: v.index(),
                num_vertices: self.vertices.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_graph() -> MeshGraph {
        // A unit square: 0-1-2-3-0.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let edges = vec![[0, 1], [1, 2], [2, 3], [3, 0]];
        build_from_edges(&positions, &edges).unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = square_graph();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 4);
    }

    #[test]
    fn test_degree() {
        let graph = square_graph();
        for v in graph.vertex_ids() {
            assert_eq!(graph.degree(v).unwrap(), 2);
        }
        assert!(graph.degree(VertexId::new(4)).is_err());
        assert!(graph.degree(VertexId::invalid()).is_err());
    }

    #[test]
    fn test_degree_sum_identity() {
        let graph = square_graph();
        let degree_sum: usize = graph
            .vertex_ids()
            .map(|v| graph.degree(v).unwrap())
            .sum();
        assert_eq!(graph.num_edges() * 2, degree_sum);
    }

    #[test]
    fn test_neighbors_in_edge_list_order() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];
        // Edges incident to 0 appear as [0,3] then [0,1] then [2,0].
        let edges = vec![[0, 3], [0, 1], [2, 0]];
        let graph = build_from_edges(&positions, &edges).unwrap();

        let neighbors = graph.neighbors(VertexId::new(0)).unwrap();
        let ids: Vec<usize> = neighbors.iter().map(|v| v.index()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_average_edge_length() {
        let graph = square_graph();
        // All four edges have unit length.
        assert!((graph.average_edge_length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_edge_length_empty() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let graph = build_from_edges(&positions, &[]).unwrap();
        assert_eq!(graph.average_edge_length(), 0.0);
    }

    #[test]
    fn test_average_degree() {
        let graph = square_graph();
        assert!((graph.average_degree() - 2.0).abs() < 1e-12);

        let empty = build_from_edges(&[], &[]).unwrap();
        assert_eq!(empty.average_degree(), 0.0);
    }

    #[test]
    fn test_edge_length() {
        let graph = square_graph();
        let len = graph
            .edge_length(VertexId::new(0), VertexId::new(2))
            .unwrap();
        assert!((len - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
