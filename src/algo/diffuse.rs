//! Range-limited paint diffusion around a source vertex.
//!
//! Both diffusion variants expand a frontier from the source through the
//! indexed min-heap, painting each extracted vertex with a distance-weighted
//! color. They differ in what "distance" means and in how the range bound is
//! expressed:
//!
//! - [`diffuse_geodesic`] weights by the accumulated edge-length distance
//!   along the discovery path and bounds the frontier by layer depth.
//! - [`diffuse_euclidean`] weights by the straight-line distance from the
//!   source and bounds the frontier by hop count.
//!
//! Frontier ordering is synthetic in both: vertices are released in
//! FIFO-like layers rather than by geometric distance, so the geodesic
//! distances here are diffusion distances (dependent on discovery order),
//! not shortest-path distances. Neighbors are taken in ascending-id order,
//! which makes the traversal, and therefore the output buffer, fully
//! deterministic.

use log::debug;

use crate::color::Color;
use crate::error::Result;
use crate::graph::{MeshGraph, VertexId};
use crate::heap::IndexedMinHeap;

/// Distance filter applied to the paint color at each visited vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Smooth exponential falloff: weight = `exp(-d² / alpha²)`.
    ///
    /// Fades monotonically with distance and never reaches exactly zero for
    /// finite distances.
    Gaussian {
        /// Falloff scale.
        alpha: f64,
    },
    /// Hard cutoff: weight = 1 for `-alpha <= d <= alpha`, else 0.
    ///
    /// The boundary is inclusive. The lower bound only matters in principle,
    /// since every distance the traversals produce is non-negative.
    Box {
        /// Cutoff distance.
        alpha: f64,
    },
}

impl Filter {
    /// The color weight for a vertex at distance `d`.
    pub fn weight(&self, d: f64) -> f64 {
        match *self {
            Filter::Gaussian { alpha } => (-(d * d) / (alpha * alpha)).exp(),
            Filter::Box { alpha } => {
                if (-alpha..=alpha).contains(&d) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Paint vertices within `max_depth` frontier layers of `source`.
///
/// Expands a layered frontier from `source` through the heap: every vertex
/// starts at infinite priority, the source at zero, and each newly
/// discovered neighbor is queued under the next value of a strictly
/// increasing counter, so the heap releases vertices in discovery (layer)
/// order. The traversal stops when it extracts a vertex whose layer depth
/// exceeds `max_depth`.
///
/// Each extracted vertex is painted `color` scaled by the filter weight of
/// its accumulated distance — the sum of edge lengths along its discovery
/// path. Vertices the frontier never reaches stay [`Color::BLACK`].
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - Center of the diffusion
/// * `color` - Base color before filter weighting
/// * `max_depth` - Number of frontier layers to expand (0 paints only the
///   source)
/// * `filter` - Distance filter for the color weight
///
/// # Returns
///
/// A buffer of one color per vertex, or [`GraphError::InvalidVertex`] if
/// `source` is out of range.
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
/// let white = Color::new(255.0, 255.0, 255.0);
/// let colors = diffuse_geodesic(
///     &graph,
///     VertexId::new(0),
///     white,
///     1,
///     Filter::Box { alpha: 10.0 },
/// )
/// .unwrap();
///
/// assert_eq!(colors[0], white);
/// assert_eq!(colors[1], white);
/// assert_eq!(colors[2], Color::BLACK); // two layers out
/// ```
///
/// [`GraphError::InvalidVertex`]: crate::error::GraphError::InvalidVertex
pub fn diffuse_geodesic(
    graph: &MeshGraph,
    source: VertexId,
    color: Color,
    max_depth: u32,
    filter: Filter,
) -> Result<Vec<Color>> {
    graph.check_vertex(source)?;
    debug!(
        "geodesic diffusion from {:?}, max depth {}, {:?}",
        source, max_depth, filter
    );

    let n = graph.num_vertices();
    let mut colors = vec![Color::BLACK; n];
    let mut distances = vec![f64::INFINITY; n];
    let mut depths = vec![0u32; n];
    distances[source.index()] = 0.0;

    let mut heap = IndexedMinHeap::with_capacity(n);
    for v in graph.vertex_ids() {
        heap.insert(v.raw(), f64::INFINITY);
    }
    heap.change_priority(source.raw(), 0.0);

    // Synthetic release order: each discovered neighbor gets the next
    // counter value, giving FIFO-like layers through the min-heap.
    let mut counter = 1u64;

    while let Some((key, _)) = heap.extract_min() {
        let u = VertexId::new(key as usize);
        if depths[u.index()] > max_depth {
            break;
        }

        colors[u.index()] = color.scaled(filter.weight(distances[u.index()]));

        let mut around = graph.adjacent(u).to_vec();
        around.sort_unstable();
        let next_depth = depths[u.index()] + 1;

        for v in around {
            if distances[v.index()].is_infinite() {
                counter += 1;
                heap.change_priority(v.raw(), counter as f64);
                distances[v.index()] =
                    distances[u.index()] + (graph.position(v) - graph.position(u)).norm();
                depths[v.index()] = next_depth;
            }
        }
    }

    Ok(colors)
}

/// Paint vertices within `max_radius` hops of `source`, weighted by
/// straight-line distance.
///
/// Same frontier shape as [`diffuse_geodesic`], but the heap priority is the
/// hop count from the source (each discovered neighbor is queued one hop
/// beyond the vertex that found it), and the distance recorded for a vertex
/// is its direct Euclidean distance from `source`, not an accumulated path
/// length. The traversal stops when the extracted hop count exceeds
/// `max_radius`.
///
/// Note the asymmetry this produces: `max_radius` bounds *hops*, while the
/// filter weight is evaluated against *Euclidean* distance. A vertex that is
/// Euclidean-near the source but many hops away along the graph is not
/// painted.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - Center of the diffusion
/// * `color` - Base color before filter weighting
/// * `max_radius` - Number of hops to expand (0 paints only the source)
/// * `filter` - Distance filter for the color weight
///
/// # Returns
///
/// A buffer of one color per vertex, or [`GraphError::InvalidVertex`] if
/// `source` is out of range.
///
/// [`GraphError::InvalidVertex`]: crate::error::GraphError::InvalidVertex
pub fn diffuse_euclidean(
    graph: &MeshGraph,
    source: VertexId,
    color: Color,
    max_radius: u32,
    filter: Filter,
) -> Result<Vec<Color>> {
    graph.check_vertex(source)?;
    debug!(
        "euclidean diffusion from {:?}, max radius {}, {:?}",
        source, max_radius, filter
    );

    let n = graph.num_vertices();
    let mut colors = vec![Color::BLACK; n];
    let mut distances = vec![f64::INFINITY; n];
    distances[source.index()] = 0.0;
    let source_pos = *graph.position(source);

    let mut heap = IndexedMinHeap::with_capacity(n);
    for v in graph.vertex_ids() {
        heap.insert(v.raw(), f64::INFINITY);
    }
    heap.change_priority(source.raw(), 0.0);

    while let Some((key, hops)) = heap.extract_min() {
        if hops > max_radius as f64 {
            break;
        }
        let u = VertexId::new(key as usize);

        colors[u.index()] = color.scaled(filter.weight(distances[u.index()]));

        let mut around = graph.adjacent(u).to_vec();
        around.sort_unstable();

        for v in around {
            if distances[v.index()].is_infinite() {
                heap.change_priority(v.raw(), hops + 1.0);
                distances[v.index()] = (graph.position(v) - source_pos).norm();
            }
        }
    }

    Ok(colors)
}
