//! # Triangle
//!
//! Three points with a distinguished apex, used to round polyline corners.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle `a, b, c` whose apex is `b`.
///
/// The two legs are `b -> a` and `b -> c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// End of the first leg.
    pub a: DVec3,
    /// Apex shared by both legs.
    pub b: DVec3,
    /// End of the second leg.
    pub c: DVec3,
}

impl Triangle {
    /// Creates a triangle with apex `b`.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self { a, b, c }
    }

    /// Interior angle at the apex, in `[0, pi]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_kernel::Triangle;
    ///
    /// let t = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0));
    /// assert!((t.apex_angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn apex_angle(&self) -> f64 {
        let u = self.a - self.b;
        let v = self.c - self.b;
        u.cross(v).length().atan2(u.dot(v))
    }

    /// Unnormalized normal `(a - b) x (c - b)`.
    pub fn normal(&self) -> DVec3 {
        (self.a - self.b).cross(self.c - self.b)
    }
}
