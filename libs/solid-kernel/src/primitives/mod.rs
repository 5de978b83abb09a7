//! # Analytic Primitives
//!
//! Leaf solids of the object tree. Each primitive stores its defining
//! parameters in its own local frame plus a local-to-world map, so any
//! affine motion (shear included) composes exactly without touching the
//! parameters.

mod torus;

pub use torus::{Torus, TorusSlice};

use crate::error::{KernelError, KernelResult};
use glam::{DAffine3, DVec3};
use serde::{Deserialize, Serialize};

/// Defining parameters of a primitive, in local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Straight tube of constant radius.
    Cylinder {
        /// Center of the start cap.
        start: DVec3,
        /// Center of the end cap.
        end: DVec3,
        /// Tube radius.
        radius: f64,
    },
    /// Truncated cone; `radius2` may be 0 for a pointed tip.
    Cone {
        /// Center of the start cap.
        start: DVec3,
        /// Center of the end cap.
        end: DVec3,
        /// Radius at `start`.
        radius1: f64,
        /// Radius at `end`.
        radius2: f64,
    },
    /// Torus, possibly sliced to one arc.
    Torus(Torus),
}

impl Shape {
    /// Lowercase shape name, as a renderer keyword.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::Torus(_) => "torus",
        }
    }
}

/// A leaf solid: a shape, its pose and an optional color tag.
///
/// # Example
///
/// ```rust
/// use glam::{DAffine3, DVec3};
/// use solid_kernel::Primitive;
///
/// let mut cylinder = Primitive::cylinder(DVec3::ZERO, DVec3::X, 0.1).unwrap();
/// cylinder.move_alone(DAffine3::from_translation(DVec3::Y));
/// assert_eq!(cylinder.world_point(DVec3::X), DVec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    shape: Shape,
    map: DAffine3,
    color: Option<String>,
}

impl Primitive {
    /// Creates a cylinder from `start` to `end`.
    ///
    /// # Errors
    ///
    /// `InvalidPrimitive` for a non-positive radius or coincident ends.
    pub fn cylinder(start: DVec3, end: DVec3, radius: f64) -> KernelResult<Self> {
        check_axis(start, end)?;
        if !(radius > 0.0) {
            return Err(KernelError::invalid_primitive(format!(
                "cylinder radius must be positive: {radius}"
            )));
        }
        Ok(Self::from_shape(Shape::Cylinder { start, end, radius }))
    }

    /// Creates a cone from `start` (radius `radius1`) to `end` (radius `radius2`).
    ///
    /// # Errors
    ///
    /// `InvalidPrimitive` for negative radii, both radii zero, or coincident
    /// ends.
    pub fn cone(start: DVec3, end: DVec3, radius1: f64, radius2: f64) -> KernelResult<Self> {
        check_axis(start, end)?;
        if radius1 < 0.0 || radius2 < 0.0 || (radius1 == 0.0 && radius2 == 0.0) {
            return Err(KernelError::invalid_primitive(format!(
                "cone radii must be non-negative and not both zero: r1={radius1}, r2={radius2}"
            )));
        }
        Ok(Self::from_shape(Shape::Cone {
            start,
            end,
            radius1,
            radius2,
        }))
    }

    /// Wraps a torus.
    pub fn torus(torus: Torus) -> Self {
        Self::from_shape(Shape::Torus(torus))
    }

    fn from_shape(shape: Shape) -> Self {
        Self {
            shape,
            map: DAffine3::IDENTITY,
            color: None,
        }
    }

    /// Defining parameters in local coordinates.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The torus parameters, if this primitive is a torus.
    pub fn as_torus(&self) -> Option<&Torus> {
        match &self.shape {
            Shape::Torus(torus) => Some(torus),
            _ => None,
        }
    }

    /// Local-to-world map.
    pub fn map(&self) -> DAffine3 {
        self.map
    }

    /// Color tag, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Premultiplies the pose by `map`.
    pub fn move_alone(&mut self, map: DAffine3) -> &mut Self {
        self.map = map * self.map;
        self
    }

    /// Sets the color tag.
    pub fn colored(&mut self, tag: impl Into<String>) -> &mut Self {
        self.color = Some(tag.into());
        self
    }

    /// Maps a point from local to world coordinates.
    pub fn world_point(&self, local: DVec3) -> DVec3 {
        self.map.transform_point3(local)
    }
}

fn check_axis(start: DVec3, end: DVec3) -> KernelResult<()> {
    if start == end {
        return Err(KernelError::invalid_primitive(format!(
            "axis ends coincide at {start}"
        )));
    }
    Ok(())
}
