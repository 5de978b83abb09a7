//! # Config Crate
//!
//! Centralized configuration constants for the analytic solid pipeline.
//! Every tolerance and tunable used by the geometry kernel and the compound
//! builders is defined here so both crates agree on what "equal" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, ANTIPODAL_DEVIATION};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! // The antipodal perturbation is tiny compared to any useful tube
//! assert!(ANTIPODAL_DEVIATION < 1e-3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: This crate only depends on `std`
//! - **Validated Overrides**: `GlobalConfig::new` rejects nonsensical values

pub mod constants;
