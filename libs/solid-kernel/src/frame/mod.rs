//! # Affine Frames
//!
//! Helpers around `glam::DAffine3`, the affine map every object in the tree
//! carries as its local-to-world pose. Composition is left-multiplication:
//! applying `b` then `a` is `a * b`.

use config::constants::{approx_zero, is_close};
use glam::{DAffine3, DVec3};
use std::f64::consts::PI;

/// Builds the affine map sending the canonical basis onto `x`, `y`, `z` and
/// the origin onto `origin`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_kernel::frame::affine_from_axes;
///
/// // Swap the Y and Z axes
/// let map = affine_from_axes(DVec3::X, DVec3::Z, DVec3::Y, DVec3::ZERO);
/// assert_eq!(map.transform_point3(DVec3::new(0.0, 2.0, 3.0)), DVec3::new(0.0, 3.0, 2.0));
/// ```
pub fn affine_from_axes(x: DVec3, y: DVec3, z: DVec3, origin: DVec3) -> DAffine3 {
    DAffine3::from_cols(x, y, z, origin)
}

/// Returns the rotation mapping the direction of `u` onto the direction of `v`.
///
/// The rotation axis is `u x v`. When `u` and `v` are antiparallel the cross
/// product vanishes and the half turn is taken about `fallback_axis`
/// (projected orthogonal to `u`); callers pass the normal of the plane the
/// rotation must stay in. Zero vectors yield the identity.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_kernel::rotational_difference;
///
/// let rotation = rotational_difference(DVec3::X, DVec3::Y, DVec3::Z);
/// let mapped = rotation.transform_vector3(DVec3::X);
/// assert!(mapped.abs_diff_eq(DVec3::Y, 1e-12));
/// ```
pub fn rotational_difference(u: DVec3, v: DVec3, fallback_axis: DVec3) -> DAffine3 {
    let u = u.normalize_or_zero();
    let v = v.normalize_or_zero();
    if u == DVec3::ZERO || v == DVec3::ZERO {
        return DAffine3::IDENTITY;
    }

    let axis = u.cross(v);
    let cos = u.dot(v).clamp(-1.0, 1.0);
    let sin = axis.length();

    if approx_zero(sin) {
        if cos > 0.0 {
            return DAffine3::IDENTITY;
        }
        let projected = (fallback_axis - u * fallback_axis.dot(u)).normalize_or_zero();
        let half_turn_axis = if projected == DVec3::ZERO {
            u.any_orthonormal_vector()
        } else {
            projected
        };
        return DAffine3::from_axis_angle(half_turn_axis, PI);
    }

    DAffine3::from_axis_angle(axis / sin, sin.atan2(cos))
}

/// Checks whether two non-zero vectors point the same way within `tolerance`.
///
/// Magnitudes are ignored: `(1, 0, 0)` and `(3, 0, 0)` are equal directions.
pub fn directions_equal(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    let a = a.normalize_or_zero();
    let b = b.normalize_or_zero();
    a != DVec3::ZERO && a.abs_diff_eq(b, tolerance)
}

/// Checks whether `a` is parallel to `b`, in either sense, within
/// `tolerance` relative to their lengths.
pub fn parallel(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    a.cross(b).length() <= tolerance * a.length() * b.length()
}

/// Component-wise closeness with mixed absolute/relative tolerance, `b`
/// being the reference.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_kernel::all_close;
///
/// assert!(all_close(DVec3::new(2.0, 1.0, 0.0), DVec3::new(2.000001, 1.0, 0.0)));
/// assert!(!all_close(DVec3::new(2.0, 1.0, 0.0), DVec3::new(2.1, 1.0, 0.0)));
/// ```
pub fn all_close(a: DVec3, b: DVec3) -> bool {
    is_close(a.x, b.x) && is_close(a.y, b.y) && is_close(a.z, b.z)
}
