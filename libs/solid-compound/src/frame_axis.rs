//! # Frame Axis Arrows
//!
//! An arrow from `start` to `end`: a cylinder named `"cyl"` over the first
//! `cylinder_percentage` of the span, capped by a cone named `"arrow"`
//! tapering to a point at `end`.

use crate::compound::{Compound, SlaveEntry};
use crate::error::{CompoundError, CompoundResult};
use glam::DVec3;
use solid_kernel::Primitive;

/// Proportions of a frame axis arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAxisParams {
    /// Fraction of the span covered by the cylinder, in `(0, 1)`.
    pub cylinder_percentage: f64,
    /// Radius of the shaft.
    pub cylinder_radius: f64,
    /// Base radius of the head.
    pub arrow_radius: f64,
}

impl Default for FrameAxisParams {
    fn default() -> Self {
        Self {
            cylinder_percentage: 0.8,
            cylinder_radius: 0.02,
            arrow_radius: 0.05,
        }
    }
}

/// Builds the arrow assembly.
///
/// # Errors
///
/// `MalformedInput` when `cylinder_percentage` is outside `(0, 1)`; kernel
/// errors for non-positive radii or coincident ends.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_compound::{frame_axis, FrameAxisParams};
///
/// let x_axis = frame_axis(DVec3::ZERO, DVec3::X, &FrameAxisParams::default()).unwrap();
/// assert!(x_axis.slave("cyl").is_some());
/// assert!(x_axis.slave("arrow").is_some());
/// ```
pub fn frame_axis(start: DVec3, end: DVec3, params: &FrameAxisParams) -> CompoundResult<Compound> {
    let percentage = params.cylinder_percentage;
    if !(percentage > 0.0 && percentage < 1.0) {
        return Err(CompoundError::malformed(format!(
            "cylinder percentage must lie in (0, 1): {percentage}"
        )));
    }

    let joint = start.lerp(end, percentage);
    let shaft = Primitive::cylinder(start, joint, params.cylinder_radius)?;
    let head = Primitive::cone(joint, end, params.arrow_radius, 0.0)?;

    let mut arrow = Compound::default();
    arrow
        .stage(SlaveEntry::named("cyl", shaft))
        .stage(SlaveEntry::named("arrow", head))
        .build_from_slaves()?;
    Ok(arrow)
}
