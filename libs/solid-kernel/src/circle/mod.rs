//! # Circles
//!
//! Circles in 3D are a center, a radius and the unit normal of their
//! supporting plane. Two constructions are needed by the tube builders:
//!
//! - through two points with a prescribed tangent at the first one
//! - inscribed in the corner of a triangle with a prescribed radius

use crate::error::{KernelError, KernelResult};
use crate::frame::{parallel, rotational_difference};
use crate::triangle::Triangle;
use config::constants::{approx_zero, EPSILON_TOLERANCE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A circle in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: DVec3,
    /// Radius, always positive.
    pub radius: f64,
    /// Unit normal of the supporting plane.
    pub normal: DVec3,
}

/// A circle inscribed in a triangle corner together with its two tangency
/// points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentCircle {
    /// The inscribed circle.
    pub circle: Circle,
    /// Tangency points: `contact[0]` on leg `b -> a`, `contact[1]` on leg `b -> c`.
    pub contact: [DVec3; 2],
}

impl Circle {
    /// Returns the circle through `p1` and `p2` whose tangent at `p1` is
    /// `tangent`.
    ///
    /// The normal is `tangent x (p2 - p1)`, so travelling along `tangent`
    /// from `p1` turns counterclockwise around it.
    ///
    /// # Errors
    ///
    /// `DegenerateCircle` when the points coincide, the tangent is zero, or
    /// the chord is parallel to the tangent (the circle would be a line).
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_kernel::Circle;
    ///
    /// let c = Circle::from_2_points_and_tangent(DVec3::ZERO, DVec3::new(2.0, 2.0, 0.0), DVec3::X).unwrap();
    /// assert!(c.center.abs_diff_eq(DVec3::new(0.0, 2.0, 0.0), 1e-12));
    /// assert!((c.radius - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_2_points_and_tangent(p1: DVec3, p2: DVec3, tangent: DVec3) -> KernelResult<Self> {
        let chord = p2 - p1;
        if approx_zero(chord.length()) {
            return Err(KernelError::degenerate_circle(format!(
                "points coincide at {p1}"
            )));
        }
        if approx_zero(tangent.length()) {
            return Err(KernelError::degenerate_circle("tangent is zero"));
        }
        if parallel(chord, tangent, EPSILON_TOLERANCE) {
            return Err(KernelError::degenerate_circle(format!(
                "chord {chord} is parallel to tangent {tangent}"
            )));
        }

        let tangent = tangent.normalize();
        let normal = tangent.cross(chord).normalize();
        // Points from p1 toward the center; its dot with the chord is positive
        let inward = normal.cross(tangent);
        let radius = chord.length_squared() / (2.0 * inward.dot(chord));

        Ok(Self {
            center: p1 + inward * radius,
            radius,
            normal,
        })
    }

    /// Returns the circle of `radius` tangent to both legs of `triangle` at
    /// its apex, with the two tangency points.
    ///
    /// With apex angle `theta`, the tangency points lie at
    /// `radius * cot(theta / 2)` from the apex and the center at
    /// `radius / sin(theta / 2)` along the bisector.
    ///
    /// # Errors
    ///
    /// `DegenerateTriangle` for a zero-length leg or collinear legs.
    pub fn from_tangent_triangle(triangle: &Triangle, radius: f64) -> KernelResult<TangentCircle> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(KernelError::degenerate_triangle(format!(
                "inscribed radius must be positive: {radius}"
            )));
        }

        let leg_a = triangle.a - triangle.b;
        let leg_c = triangle.c - triangle.b;
        if approx_zero(leg_a.length()) || approx_zero(leg_c.length()) {
            return Err(KernelError::degenerate_triangle("zero-length leg"));
        }
        if parallel(leg_a, leg_c, EPSILON_TOLERANCE) {
            return Err(KernelError::degenerate_triangle(format!(
                "legs at apex {} are collinear",
                triangle.b
            )));
        }

        let dir_a = leg_a.normalize();
        let dir_c = leg_c.normalize();
        let half_angle = 0.5 * triangle.apex_angle();
        let tangent_distance = radius * half_angle.cos() / half_angle.sin();
        let bisector = (dir_a + dir_c).normalize();

        Ok(TangentCircle {
            circle: Circle {
                center: triangle.b + bisector * (radius / half_angle.sin()),
                radius,
                normal: triangle.normal().normalize(),
            },
            contact: [
                triangle.b + dir_a * tangent_distance,
                triangle.b + dir_c * tangent_distance,
            ],
        })
    }

    /// Carries `tangent` from the point `from` to the point `to` of the
    /// circle, rotating it by the rotational difference of the two radii.
    ///
    /// Antipodal points rotate by a half turn about the circle normal, so
    /// the tangent stays in the supporting plane.
    pub fn transport_tangent(&self, from: DVec3, to: DVec3, tangent: DVec3) -> DVec3 {
        rotational_difference(from - self.center, to - self.center, self.normal)
            .transform_vector3(tangent)
    }

    /// Distance from `point` to the circle itself (not the disk).
    pub fn distance_to(&self, point: DVec3) -> f64 {
        let offset = point - self.center;
        let height = offset.dot(self.normal);
        let planar = (offset - self.normal * height).length();
        ((planar - self.radius).powi(2) + height * height).sqrt()
    }
}
