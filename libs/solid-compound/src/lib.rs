//! # Solid Compound
//!
//! Composite solids over the analytic primitives of `solid-kernel`.
//!
//! ## Architecture
//!
//! ```text
//! polyline ──→ planner (curvature fit) ──→ refined waypoints
//!                                               │
//! waypoints ───────────────────────────→ bent_cylinder (cylinder/torus joints)
//!                                               │ named segments
//! profile curves ──→ lathe ─────────────────────┤
//!                                               ↓
//!                                  compound (union + motion + color)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DAffine3, DVec3};
//! use solid_compound::BentCylinder;
//!
//! let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
//! let mut tube = BentCylinder::new(&waypoints, 0.1, false).unwrap();
//! tube.move_alone(DAffine3::from_translation(DVec3::Z)).colored("Copper");
//! assert_eq!(tube.compound().len(), 2);
//! ```

pub mod bent_cylinder;
pub mod compound;
pub mod error;
pub mod frame_axis;
pub mod lathe;
pub mod solid;

pub use bent_cylinder::BentCylinder;
pub use compound::{Compound, CsgKind, CsgOperation, SlaveEntry};
pub use error::{CompoundError, CompoundResult};
pub use frame_axis::{frame_axis, FrameAxisParams};
pub use lathe::{Lathe, ProfileKind};
pub use solid::Solid;
