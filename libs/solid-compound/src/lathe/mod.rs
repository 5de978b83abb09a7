//! # Lathes
//!
//! Surfaces of revolution generated by a planar profile. Profile points have
//! the form `(0, r, h)`: `r >= 0` is the distance to the rotation axis and
//! `h` the height along it. The solid is revolved in its construction frame
//! and then reoriented by a fixed map swapping the Y and Z axes.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use solid_compound::Lathe;
//!
//! let vase = Lathe::from_polyline(vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.5),
//!     DVec3::new(0.0, 0.4, 2.0),
//! ])
//! .unwrap();
//! assert_eq!(vase.curve().len(), 3);
//! ```

use crate::compound::{Compound, SlaveEntry};
use crate::error::{CompoundError, CompoundResult};
use config::constants::{approx_zero, BEZIER_CONTROL_POINTS, EPSILON_TOLERANCE};
use glam::{DAffine3, DVec3};
use serde::{Deserialize, Serialize};
use solid_kernel::frame::affine_from_axes;
use solid_kernel::FrameBox;

/// How the profile points are interpolated by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Straight segments between consecutive points.
    Polyline,
    /// A cubic Bezier through four control points.
    Bezier,
}

/// A solid of revolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lathe {
    kind: ProfileKind,
    curve: Vec<DVec3>,
    map: DAffine3,
    markers: FrameBox,
    color: Option<String>,
}

/// Map from the lathe construction frame onto the world frame.
pub fn lathe_frame() -> DAffine3 {
    affine_from_axes(DVec3::X, DVec3::Z, DVec3::Y, DVec3::ZERO)
}

impl Lathe {
    /// Revolves a polyline profile.
    ///
    /// # Errors
    ///
    /// `InvalidProfile` for fewer than two points, a point off the profile
    /// plane `x = 0`, or a negative radial coordinate.
    pub fn from_polyline(curve: Vec<DVec3>) -> CompoundResult<Self> {
        Self::build(ProfileKind::Polyline, curve)
    }

    /// Revolves a Bezier profile, which must have exactly four control
    /// points.
    pub fn from_bezier_curve(curve: Vec<DVec3>) -> CompoundResult<Self> {
        if curve.len() != BEZIER_CONTROL_POINTS {
            return Err(CompoundError::invalid_profile(format!(
                "a Bezier lathe needs exactly {BEZIER_CONTROL_POINTS} control points, got {}",
                curve.len()
            )));
        }
        Self::build(ProfileKind::Bezier, curve)
    }

    /// Builds one polyline lathe per piece and unions them.
    ///
    /// # Errors
    ///
    /// `InvalidProfile` for an empty piece list or any invalid piece; no
    /// partial assembly is returned.
    pub fn from_piecewise_curve(pieces: Vec<Vec<DVec3>>) -> CompoundResult<Compound> {
        if pieces.is_empty() {
            return Err(CompoundError::invalid_profile("piecewise curve has no pieces"));
        }
        let entries = pieces
            .into_iter()
            .map(|piece| Self::from_polyline(piece).map(SlaveEntry::anonymous))
            .collect::<CompoundResult<Vec<_>>>()?;
        Compound::new(entries)
    }

    fn build(kind: ProfileKind, curve: Vec<DVec3>) -> CompoundResult<Self> {
        if curve.len() < 2 {
            return Err(CompoundError::invalid_profile(format!(
                "a lathe profile needs at least 2 points, got {}",
                curve.len()
            )));
        }
        for (index, point) in curve.iter().enumerate() {
            if !approx_zero(point.x) {
                return Err(CompoundError::invalid_profile(format!(
                    "point {index} lies off the profile plane: x = {}",
                    point.x
                )));
            }
            if point.y < -EPSILON_TOLERANCE {
                return Err(CompoundError::invalid_profile(format!(
                    "point {index} crosses the rotation axis: r = {}",
                    point.y
                )));
            }
        }

        let markers = FrameBox::from_points(&curve)?;
        let mut lathe = Self {
            kind,
            curve,
            map: DAffine3::IDENTITY,
            markers,
            color: None,
        };
        lathe.move_alone(lathe_frame());
        Ok(lathe)
    }

    /// Interpolation of the profile.
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// The source profile, in construction coordinates.
    pub fn curve(&self) -> &[DVec3] {
        &self.curve
    }

    /// Local-to-world map.
    pub fn map(&self) -> DAffine3 {
        self.map
    }

    /// Bounding marker of the profile, following the lathe's pose.
    pub fn bounding_box(&self) -> &FrameBox {
        &self.markers
    }

    /// Color tag, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Premultiplies the pose (and the marker box) by `map`.
    pub fn move_alone(&mut self, map: DAffine3) -> &mut Self {
        self.map = map * self.map;
        self.markers.move_alone(map);
        self
    }

    /// Sets the color tag.
    pub fn colored(&mut self, tag: impl Into<String>) -> &mut Self {
        self.color = Some(tag.into());
        self
    }
}
