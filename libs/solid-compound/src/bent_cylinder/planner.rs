//! # Curvature Fitting
//!
//! Rounds every corner of a polyline with an arc of a fixed bend radius and
//! runs the tube synthesizer along the result. A corner of interior angle
//! `a` is replaced by the two tangency points of the inscribed circle, each
//! at `r * cot(a / 2)` from the vertex.
//!
//! The admissible bend radius of a segment of length `L` between corners of
//! angles `a` and `b` is
//!
//! ```text
//! L * cot(a / 2) + L * cot(b / 2)
//! ```
//!
//! Polyline ends count as straight angles (`pi`), contributing nothing, so
//! a right-angle corner with legs `L` admits any radius below `L`.

use super::BentCylinder;
use crate::error::{CompoundError, CompoundResult};
use config::constants::GlobalConfig;
use solid_kernel::frame::parallel;
use solid_kernel::{Circle, Polyline, PolylineVertex};
use std::f64::consts::PI;

impl BentCylinder {
    /// Fits a tube of `tube_radius` along `vertices` with every corner bent
    /// at `curvature_radius`. The resolved polyline is kept as `spline()`.
    ///
    /// # Errors
    ///
    /// - `MalformedInput` for a non-positive curvature radius
    /// - `InfeasibleCurvature` when some segment is too short for the
    ///   roundings at its ends
    /// - `Geometry` for fewer than two vertices, zero-length segments or a
    ///   corner that folds back onto itself
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_compound::BentCylinder;
    /// use solid_kernel::PolylineVertex;
    ///
    /// let path = [
    ///     PolylineVertex::Point(DVec3::ZERO),
    ///     PolylineVertex::Offset(DVec3::new(2.0, 0.0, 0.0)),
    ///     PolylineVertex::Offset(DVec3::new(0.0, 2.0, 0.0)),
    /// ];
    /// let tube = BentCylinder::from_polyline(&path, 0.5, 0.1).unwrap();
    /// assert_eq!(tube.compound().len(), 3);
    /// assert_eq!(tube.spline().map(|s| s.len()), Some(3));
    /// ```
    pub fn from_polyline(
        vertices: &[PolylineVertex],
        curvature_radius: f64,
        tube_radius: f64,
    ) -> CompoundResult<Self> {
        Self::from_polyline_with_config(
            vertices,
            curvature_radius,
            tube_radius,
            &GlobalConfig::default(),
        )
    }

    /// Same as [`BentCylinder::from_polyline`], with `config.tolerance` as
    /// the feasibility margin and the straight-vertex test, and `config`
    /// passed on to [`BentCylinder::with_config`].
    pub fn from_polyline_with_config(
        vertices: &[PolylineVertex],
        curvature_radius: f64,
        tube_radius: f64,
        config: &GlobalConfig,
    ) -> CompoundResult<Self> {
        if !(curvature_radius > 0.0 && curvature_radius.is_finite()) {
            return Err(CompoundError::malformed(format!(
                "curvature radius must be positive: {curvature_radius}"
            )));
        }

        let polyline = Polyline::new(vertices)?;
        let bounds = curvature_bounds(&polyline);
        log::trace!("curvature bounds per segment: {bounds:?}");
        let tightest = bounds
            .into_iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((segment, bound)) = tightest {
            if curvature_radius >= bound - config.tolerance {
                return Err(CompoundError::InfeasibleCurvature {
                    segment,
                    requested: curvature_radius,
                    bound,
                });
            }
        }

        let mut refined = Vec::with_capacity(2 * polyline.len());
        refined.push(polyline.first());
        for corner in polyline.corners() {
            // Straight pass-through: the neighbouring cylinders merge
            let (leg_a, leg_c) = (corner.a - corner.b, corner.c - corner.b);
            if parallel(leg_a, leg_c, config.tolerance) && leg_a.dot(leg_c) < 0.0 {
                log::trace!("vertex {} is straight, left unrounded", corner.b);
                continue;
            }
            let rounding = Circle::from_tangent_triangle(&corner, curvature_radius)?;
            refined.extend(rounding.contact);
        }
        refined.push(polyline.last());
        log::debug!(
            "rounded {} polyline vertices into {} tube waypoints",
            polyline.len(),
            refined.len()
        );

        let mut tube = Self::with_config(&refined, tube_radius, false, config)?;
        tube.spline = Some(polyline);
        Ok(tube)
    }
}

/// Largest admissible bend radius of every segment of `polyline`, in
/// segment order.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_compound::bent_cylinder::curvature_bounds;
/// use solid_kernel::Polyline;
///
/// let corner = Polyline::from_points(vec![
///     DVec3::ZERO,
///     DVec3::new(3.0, 0.0, 0.0),
///     DVec3::new(3.0, 3.0, 0.0),
/// ])
/// .unwrap();
/// let bounds = curvature_bounds(&corner);
/// assert!((bounds[0] - 3.0).abs() < 1e-9);
/// ```
pub fn curvature_bounds(polyline: &Polyline) -> Vec<f64> {
    let mut angles = Vec::with_capacity(polyline.len());
    angles.push(PI);
    angles.extend(polyline.angles());
    angles.push(PI);

    polyline
        .lengths()
        .into_iter()
        .zip(angles.windows(2))
        .map(|(length, ends)| length * half_angle_cot(ends[0]) + length * half_angle_cot(ends[1]))
        .collect()
}

fn half_angle_cot(angle: f64) -> f64 {
    let half = 0.5 * angle;
    half.cos() / half.sin()
}
