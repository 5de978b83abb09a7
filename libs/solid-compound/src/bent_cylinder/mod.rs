//! # Bent Cylinders
//!
//! A bent cylinder is the tube a bending machine makes out of a straight
//! pipe: cylinders joined by slices of tori, tangent-continuous at every
//! joint. Given waypoints `p0..pn`, segment `i` runs from `p[i]` to
//! `p[i + 1]`; segments alternate cylinder/torus, starting with a torus
//! when `start_with_torus` is set.
//!
//! ## Construction
//!
//! 1. Cylinder segments fix the tangent at both of their ends.
//! 2. A leading (trailing) torus has one free end; its tangent is carried
//!    from the known end along the circle through both waypoints.
//! 3. Each segment becomes a cylinder when its end tangents agree, and a
//!    sliced torus otherwise. The torus lies on the circle through both
//!    ends tangent to the start tangent, with the tube radius as minor
//!    radius.
//!
//! Segments are named `"0"` to `"n-1"` in the resulting compound.

mod planner;

pub use planner::curvature_bounds;

use crate::compound::{Compound, SlaveEntry};
use crate::error::{CompoundError, CompoundResult};
use crate::solid::Solid;
use config::constants::GlobalConfig;
use glam::{DAffine3, DVec3};
use serde::{Deserialize, Serialize};
use solid_kernel::frame::parallel;
use solid_kernel::{all_close, directions_equal, Circle, Polyline, Primitive, Torus};

/// A tangent-continuous tube of cylinders and sliced tori.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BentCylinder {
    compound: Compound,
    radius: f64,
    spline: Option<Polyline>,
}

impl BentCylinder {
    /// Builds the tube through `points` with the default configuration.
    ///
    /// # Errors
    ///
    /// - `MalformedInput` for fewer than two waypoints or two consecutive
    ///   equal waypoints
    /// - `UnderconstrainedTorus` for a single segment with
    ///   `start_with_torus`
    /// - `Geometry` for a non-positive tube radius
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_compound::BentCylinder;
    ///
    /// let elbow = BentCylinder::new(
    ///     &[DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)],
    ///     0.1,
    ///     false,
    /// )
    /// .unwrap();
    /// assert!(elbow.segment(1).and_then(|p| p.as_torus()).is_some());
    /// ```
    pub fn new(points: &[DVec3], radius: f64, start_with_torus: bool) -> CompoundResult<Self> {
        Self::with_config(points, radius, start_with_torus, &GlobalConfig::default())
    }

    /// Builds the tube through `points`. `config.tolerance` governs the
    /// waypoint and tangent comparisons and `config.antipodal_deviation`
    /// the nudge of antipodal joints; detecting an antipodal joint always
    /// uses the fixed closeness test of [`all_close`].
    pub fn with_config(
        points: &[DVec3],
        radius: f64,
        start_with_torus: bool,
        config: &GlobalConfig,
    ) -> CompoundResult<Self> {
        if points.len() < 2 {
            return Err(CompoundError::malformed(format!(
                "a bent cylinder needs at least 2 waypoints, got {}",
                points.len()
            )));
        }
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[0].distance(pair[1]) <= config.tolerance)
        {
            return Err(CompoundError::malformed(format!(
                "waypoints {index} and {} coincide",
                index + 1
            )));
        }

        let tangents = assign_tangents(points, start_with_torus, config)?;

        let mut compound = Compound::default();
        for (index, pair) in points.windows(2).enumerate() {
            let slave = build_slave(
                pair[0],
                tangents[index],
                pair[1],
                tangents[index + 1],
                radius,
                config,
            )?;
            compound.stage(SlaveEntry::named(index.to_string(), slave));
        }
        compound.build_from_slaves()?;

        log::debug!(
            "bent cylinder built: {} segments, radius {radius}",
            compound.len()
        );

        Ok(Self {
            compound,
            radius,
            spline: None,
        })
    }

    /// The segment assembly.
    pub fn compound(&self) -> &Compound {
        &self.compound
    }

    /// Mutable access to the segment assembly.
    pub fn compound_mut(&mut self) -> &mut Compound {
        &mut self.compound
    }

    /// Unwraps the segment assembly.
    pub fn into_compound(self) -> Compound {
        self.compound
    }

    /// The polyline a curvature-fitted tube was derived from.
    pub fn spline(&self) -> Option<&Polyline> {
        self.spline.as_ref()
    }

    /// Tube radius, shared by cylinders and torus minor radii.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Segment `index`, looked up by its name.
    pub fn segment(&self, index: usize) -> Option<&Primitive> {
        self.compound
            .slave(&index.to_string())
            .and_then(Solid::as_primitive)
    }

    /// Moves every segment by `map`. The spline stays where it was built.
    pub fn move_alone(&mut self, map: DAffine3) -> &mut Self {
        self.compound.move_alone(map);
        self
    }

    /// Tags every segment with `tag`.
    pub fn colored(&mut self, tag: &str) -> &mut Self {
        self.compound.colored(tag);
        self
    }
}

impl From<BentCylinder> for Solid {
    fn from(tube: BentCylinder) -> Self {
        Solid::Compound(tube.compound)
    }
}

/// Tangent at every waypoint.
fn assign_tangents(
    points: &[DVec3],
    start_with_torus: bool,
    config: &GlobalConfig,
) -> CompoundResult<Vec<DVec3>> {
    let segments = points.len() - 1;
    if segments == 1 && start_with_torus {
        return Err(CompoundError::UnderconstrainedTorus);
    }
    let is_cylinder = |index: usize| (index % 2 == 0) != start_with_torus;

    let mut tangents = vec![DVec3::ZERO; points.len()];
    for index in (0..segments).filter(|index| is_cylinder(*index)) {
        let direction = points[index + 1] - points[index];
        tangents[index] = direction;
        tangents[index + 1] = direction;
    }

    if start_with_torus {
        tangents[0] = transported_tangent(points[1], points[0], tangents[1], config)?;
    }
    if !is_cylinder(segments - 1) {
        tangents[segments] = transported_tangent(
            points[segments - 1],
            points[segments],
            tangents[segments - 1],
            config,
        )?;
    }
    Ok(tangents)
}

/// Tangent at `to` of the circle through `from` and `to` that has `tangent`
/// at `from`. A chord along the tangent keeps the tangent as is.
fn transported_tangent(
    from: DVec3,
    to: DVec3,
    tangent: DVec3,
    config: &GlobalConfig,
) -> CompoundResult<DVec3> {
    if parallel(to - from, tangent, config.tolerance) {
        return Ok(tangent);
    }
    let circle = Circle::from_2_points_and_tangent(from, to, tangent)?;
    Ok(circle.transport_tangent(from, to, tangent))
}

/// One segment: a cylinder for matching tangents, a sliced torus otherwise.
fn build_slave(
    start: DVec3,
    start_tangent: DVec3,
    end: DVec3,
    end_tangent: DVec3,
    radius: f64,
    config: &GlobalConfig,
) -> CompoundResult<Primitive> {
    if directions_equal(start_tangent, end_tangent, config.tolerance) {
        return Ok(Primitive::cylinder(start, end, radius)?);
    }

    let circle = Circle::from_2_points_and_tangent(start, end, start_tangent)?;
    let mut torus = Torus::new(circle.radius, radius, circle.normal, circle.center)?;

    // Antipodal ends leave the arc sense undetermined; nudge `end` forward
    // along the circle so the major arc from `start` is unambiguous.
    let mut end = end;
    if all_close(start + end, 2.0 * circle.center) {
        let deviation = config.antipodal_deviation * circle.normal.cross(end - start);
        log::debug!("antipodal torus joint at {end}, shifted by {deviation}");
        end += deviation;
    }

    let radial = start - circle.center;
    let acute = radial.cross(start_tangent).dot(radial.cross(end - circle.center)) >= 0.0;
    torus.sliced_by(start, end, acute);
    Ok(Primitive::torus(torus))
}

#[cfg(test)]
mod tests;
