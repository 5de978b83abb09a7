//! # Bounding Marker Boxes
//!
//! A `FrameBox` is the axis-aligned box of a point set in the owner's local
//! frame, carried along with the owner's pose. Spatial queries address it by
//! fractional coordinates: `(0, 0, 0)` is the minimum corner and `(1, 1, 1)`
//! the maximum one.

use crate::error::{KernelError, KernelResult};
use glam::{DAffine3, DVec3};
use serde::{Deserialize, Serialize};

/// Local bounding box plus local-to-world map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameBox {
    min: DVec3,
    max: DVec3,
    map: DAffine3,
}

impl FrameBox {
    /// Bounds `points`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_kernel::FrameBox;
    ///
    /// let bounds = FrameBox::from_points(&[DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0)]).unwrap();
    /// assert_eq!(bounds.center(), DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_points(points: &[DVec3]) -> KernelResult<Self> {
        let (first, rest) = points.split_first().ok_or(KernelError::EmptyPointSet)?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Ok(Self {
            min,
            max,
            map: DAffine3::IDENTITY,
        })
    }

    /// Minimum corner in local coordinates.
    pub fn local_min(&self) -> DVec3 {
        self.min
    }

    /// Maximum corner in local coordinates.
    pub fn local_max(&self) -> DVec3 {
        self.max
    }

    /// Local-to-world map.
    pub fn map(&self) -> DAffine3 {
        self.map
    }

    /// World point at fractional box coordinates.
    pub fn point(&self, fractions: DVec3) -> DVec3 {
        self.map
            .transform_point3(self.min + (self.max - self.min) * fractions)
    }

    /// World center of the box.
    pub fn center(&self) -> DVec3 {
        self.point(DVec3::splat(0.5))
    }

    /// The eight world corners, minimum corner first.
    pub fn corners(&self) -> [DVec3; 8] {
        let mut corners = [DVec3::ZERO; 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let fractions = DVec3::new(
                (index & 1) as f64,
                ((index >> 1) & 1) as f64,
                ((index >> 2) & 1) as f64,
            );
            *corner = self.point(fractions);
        }
        corners
    }

    /// Premultiplies the pose by `map`.
    pub fn move_alone(&mut self, map: DAffine3) -> &mut Self {
        self.map = map * self.map;
        self
    }
}
