//! Graph construction utilities.
//!
//! This module provides functions for building mesh graphs from vertex
//! position sequences plus explicit edge lists, or from the wireframe of a
//! triangle soup as commonly found in mesh file formats.

use std::collections::HashSet;

use log::debug;
use nalgebra::Point3;

use super::index::VertexId;
use super::{MeshGraph, Vertex};
use crate::error::{GraphError, Result};

/// Build a mesh graph from vertex positions and an undirected edge list.
///
/// Vertex ids are `0..positions.len()` by position in the sequence. Each
/// edge `[a, b]` appends `b` to `a`'s adjacency list and `a` to `b`'s, so
/// adjacency order follows edge-list order.
///
/// # Arguments
/// * `positions` - List of vertex positions
/// * `edges` - List of undirected edges, each as `[a, b]` vertex ids
///
/// # Returns
/// A mesh graph, or an error if an edge endpoint is out of range.
///
/// # Example
/// ```
/// use patina::graph::build_from_edges;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ];
/// let graph = build_from_edges(&positions, &[[0, 1]]).unwrap();
/// assert_eq!(graph.num_edges(), 1);
/// ```
pub fn build_from_edges(positions: &[Point3<f64>], edges: &[[usize; 2]]) -> Result<MeshGraph> {
    for (ei, edge) in edges.iter().enumerate() {
        for &vi in edge {
            if vi >= positions.len() {
                return Err(GraphError::InvalidEdgeEndpoint {
                    edge: ei,
                    vertex: vi,
                    num_vertices: positions.len(),
                });
            }
        }
    }

    let vertices: Vec<Vertex> = positions.iter().map(|&p| Vertex::new(p)).collect();
    let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); positions.len()];

    for &[a, b] in edges {
        adjacency[a].push(VertexId::new(b));
        adjacency[b].push(VertexId::new(a));
    }

    debug!(
        "built mesh graph: {} vertices, {} edges",
        positions.len(),
        edges.len()
    );

    Ok(MeshGraph {
        vertices,
        adjacency,
    })
}

/// Build a mesh graph from the wireframe of a triangle soup.
///
/// Each triangle contributes its three boundary edges; an edge shared by
/// several triangles is added once, at its first occurrence. The resulting
/// adjacency order follows that first-occurrence order.
///
/// # Arguments
/// * `positions` - List of vertex positions
/// * `faces` - List of triangle faces, each as `[v0, v1, v2]` indices
///
/// # Returns
/// A mesh graph, or an error if a face references an out-of-range vertex or
/// repeats one (degenerate triangle).
pub fn build_from_triangles(
    positions: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<MeshGraph> {
    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= positions.len() {
                return Err(GraphError::InvalidFaceVertex {
                    face: fi,
                    vertex: vi,
                    num_vertices: positions.len(),
                });
            }
        }
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            return Err(GraphError::DegenerateFace { face: fi });
        }
    }

    let mut edges: Vec<[usize; 2]> = Vec::with_capacity(faces.len() * 3);
    let mut seen = HashSet::with_capacity(faces.len() * 3);

    for face in faces {
        for i in 0..3 {
            let a = face[i];
            let b = face[(i + 1) % 3];
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                edges.push([a, b]);
            }
        }
    }

    build_from_edges(positions, &edges)
}
