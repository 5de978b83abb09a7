//! # Polylines
//!
//! An ordered list of absolute points. Callers may describe each vertex
//! either as an absolute point or as an offset from the previous vertex;
//! `PolylineVertex` makes that choice explicit instead of guessing it from
//! the coordinates.

use crate::error::{KernelError, KernelResult};
use crate::triangle::Triangle;
use config::constants::approx_zero;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One vertex of a polyline description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PolylineVertex {
    /// Absolute coordinates.
    Point(DVec3),
    /// Displacement from the previous resolved vertex (from the origin for
    /// the first entry).
    Offset(DVec3),
}

impl From<DVec3> for PolylineVertex {
    fn from(point: DVec3) -> Self {
        PolylineVertex::Point(point)
    }
}

/// A polyline in absolute coordinates.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_kernel::{Polyline, PolylineVertex};
///
/// let polyline = Polyline::new(&[
///     PolylineVertex::Point(DVec3::ZERO),
///     PolylineVertex::Offset(DVec3::X),
///     PolylineVertex::Offset(DVec3::Y),
/// ])
/// .unwrap();
/// assert_eq!(polyline[2], DVec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<DVec3>,
}

impl Polyline {
    /// Resolves `vertices` into absolute points.
    ///
    /// # Errors
    ///
    /// `DegeneratePolyline` when fewer than two vertices are given or two
    /// consecutive vertices coincide.
    pub fn new(vertices: &[PolylineVertex]) -> KernelResult<Self> {
        let mut previous = DVec3::ZERO;
        let points = vertices
            .iter()
            .map(|vertex| {
                previous = match *vertex {
                    PolylineVertex::Point(point) => point,
                    PolylineVertex::Offset(offset) => previous + offset,
                };
                previous
            })
            .collect();
        Self::from_points(points)
    }

    /// Wraps points already in absolute coordinates.
    pub fn from_points(points: Vec<DVec3>) -> KernelResult<Self> {
        if points.len() < 2 {
            return Err(KernelError::degenerate_polyline(format!(
                "needs at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some(index) = points
            .windows(2)
            .position(|pair| approx_zero(pair[0].distance(pair[1])))
        {
            return Err(KernelError::degenerate_polyline(format!(
                "segment {index} has zero length"
            )));
        }
        Ok(Self { points })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a polyline has at least two vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The resolved vertices.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Length of every segment, in order.
    pub fn lengths(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .collect()
    }

    /// Interior angle at every interior vertex, in `[0, pi]`.
    ///
    /// A straight pass-through has angle `pi`; a full reversal has angle 0.
    pub fn angles(&self) -> Vec<f64> {
        self.corners().map(|corner| corner.apex_angle()).collect()
    }

    /// The triangle `(p[i-1], p[i], p[i+1])` of every interior vertex.
    pub fn corners(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.points
            .windows(3)
            .map(|triple| Triangle::new(triple[0], triple[1], triple[2]))
    }

    /// First vertex.
    pub fn first(&self) -> DVec3 {
        self.points[0]
    }

    /// Last vertex.
    pub fn last(&self) -> DVec3 {
        self.points[self.points.len() - 1]
    }
}

impl Index<usize> for Polyline {
    type Output = DVec3;

    fn index(&self, index: usize) -> &DVec3 {
        &self.points[index]
    }
}
