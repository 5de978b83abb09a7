//! # Solid Kernel
//!
//! Analytic geometry building blocks consumed by the compound builders.
//! Everything here is exact: circles, cylinders, cones and tori are kept as
//! parameters plus a local-to-world affine map, never as meshes.
//!
//! ## Architecture
//!
//! ```text
//! frame (DAffine3 helpers) ─┐
//! circle / triangle ────────┼──→ solid-compound (assemblies, lathes, tubes)
//! polyline ─────────────────┤
//! primitives / bounds ──────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use solid_kernel::Circle;
//!
//! let circle = Circle::from_2_points_and_tangent(
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(1.0, 1.0, 0.0),
//!     DVec3::X,
//! )
//! .unwrap();
//! assert!((circle.radius - 0.5).abs() < 1e-12);
//! ```

pub mod bounds;
pub mod circle;
pub mod error;
pub mod frame;
pub mod polyline;
pub mod primitives;
pub mod triangle;

pub use bounds::FrameBox;
pub use circle::{Circle, TangentCircle};
pub use error::{KernelError, KernelResult};
pub use frame::{all_close, directions_equal, rotational_difference};
pub use polyline::{Polyline, PolylineVertex};
pub use primitives::{Primitive, Shape, Torus, TorusSlice};
pub use triangle::Triangle;
