//! # Torus
//!
//! A full torus, optionally restricted to the material swept along one arc
//! of its core circle.

use crate::error::{KernelError, KernelResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// The arc a sliced torus keeps, between two points of its core circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusSlice {
    /// Point where the kept arc begins.
    pub start: DVec3,
    /// Point where the kept arc ends.
    pub end: DVec3,
    /// Keep the minor arc when true, the major arc otherwise.
    pub acute: bool,
}

/// A torus around `normal` through `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    /// Radius of the core circle.
    pub major_radius: f64,
    /// Radius of the tube.
    pub minor_radius: f64,
    /// Unit axis of the torus.
    pub normal: DVec3,
    /// Center of the core circle.
    pub center: DVec3,
    /// Arc restriction, if any.
    pub slice: Option<TorusSlice>,
}

impl Torus {
    /// Creates a full torus.
    ///
    /// # Errors
    ///
    /// `InvalidPrimitive` for non-positive radii or a zero axis.
    pub fn new(major_radius: f64, minor_radius: f64, normal: DVec3, center: DVec3) -> KernelResult<Self> {
        if !(major_radius > 0.0 && minor_radius > 0.0) {
            return Err(KernelError::invalid_primitive(format!(
                "torus radii must be positive: major={major_radius}, minor={minor_radius}"
            )));
        }
        let normal = normal.normalize_or_zero();
        if normal == DVec3::ZERO {
            return Err(KernelError::invalid_primitive("torus axis is zero"));
        }
        Ok(Self {
            major_radius,
            minor_radius,
            normal,
            center,
            slice: None,
        })
    }

    /// Keeps only the material between `start` and `end`, along the minor
    /// arc when `acute` and the major arc otherwise.
    pub fn sliced_by(&mut self, start: DVec3, end: DVec3, acute: bool) -> &mut Self {
        self.slice = Some(TorusSlice { start, end, acute });
        self
    }

    /// Whether an arc restriction is set.
    pub fn is_sliced(&self) -> bool {
        self.slice.is_some()
    }

    /// Angle swept by the kept arc; `2 * pi` for a full torus.
    pub fn sweep_angle(&self) -> f64 {
        self.signed_sweep().map_or(TAU, f64::abs)
    }

    /// Sweep of the kept arc measured counterclockwise around `normal`,
    /// negative when the arc runs clockwise from `start` to `end`.
    pub fn signed_sweep(&self) -> Option<f64> {
        let slice = self.slice.as_ref()?;
        let u = self.planar(slice.start - self.center);
        let v = self.planar(slice.end - self.center);
        let minor = u.cross(v).dot(self.normal).atan2(u.dot(v));
        Some(if slice.acute {
            minor
        } else if minor >= 0.0 {
            minor - TAU
        } else {
            minor + TAU
        })
    }

    /// Unit direction in which the kept arc leaves its start point.
    pub fn start_direction(&self) -> Option<DVec3> {
        let slice = self.slice.as_ref()?;
        let sweep = self.signed_sweep()?;
        let radial = self.planar(slice.start - self.center);
        Some(self.normal.cross(radial).normalize_or_zero() * sweep.signum())
    }

    fn planar(&self, offset: DVec3) -> DVec3 {
        offset - self.normal * offset.dot(self.normal)
    }
}
