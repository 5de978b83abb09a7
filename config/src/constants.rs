//! # Configuration Constants
//!
//! Centralized constants for the analytic solid pipeline. All comparison
//! tolerances, degeneracy guards and recursion budgets are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Degeneracy**: Antipodal detection and perturbation for tube joints
//! - **Format**: Constraints imposed by downstream renderers
//! - **Limits**: Recursion budgets for deep assemblies

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when comparing tangent directions, testing vectors for parallelism
/// and comparing a requested bend radius against its feasibility bound.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON_TOLERANCE;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON_TOLERANCE
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-12));
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// DEGENERACY CONSTANTS
// =============================================================================

/// Relative tolerance of the antipodal test between two joint points.
///
/// Two points `start` and `end` on a circle of center `c` are treated as
/// antipodal when `start + end` is close to `2 * c` component-wise, using
/// `|a - b| <= ANTIPODAL_ABSOLUTE_TOLERANCE + ANTIPODAL_RELATIVE_TOLERANCE * |b|`.
///
/// # Example
///
/// ```rust
/// use config::constants::{is_close, ANTIPODAL_RELATIVE_TOLERANCE};
///
/// assert!(is_close(2.0, 2.0 + ANTIPODAL_RELATIVE_TOLERANCE));
/// ```
pub const ANTIPODAL_RELATIVE_TOLERANCE: f64 = 1.0e-5;

/// Absolute tolerance of the antipodal test, dominant near the origin.
pub const ANTIPODAL_ABSOLUTE_TOLERANCE: f64 = 1.0e-8;

/// Factor applied to `normal x (end - start)` when an antipodal joint is
/// perturbed.
///
/// The displacement is proportional to the chord, so it stays below `1e-4`
/// for chords up to a few units long.
///
/// # Example
///
/// ```rust
/// use config::constants::ANTIPODAL_DEVIATION;
///
/// let chord = 2.0;
/// assert!(ANTIPODAL_DEVIATION * chord < 1e-4);
/// ```
pub const ANTIPODAL_DEVIATION: f64 = 1.0e-5;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Number of control points a Bezier lathe profile must carry.
///
/// This is a representation constraint of the downstream renderer, not a
/// geometric one.
pub const BEZIER_CONTROL_POINTS: usize = 4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Bytes of stack space reserved when motion or color propagation recurses
/// through nested assemblies with the `stacker` crate.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a fresh segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunables used by the tube builders.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance for direction equality and feasibility comparisons.
    pub tolerance: f64,
    /// Perturbation factor applied to antipodal torus joints.
    pub antipodal_deviation: f64,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64, antipodal_deviation: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(antipodal_deviation > 0.0 && antipodal_deviation.is_finite()) {
            return Err(ConfigError::InvalidDeviation(antipodal_deviation));
        }
        Ok(Self {
            tolerance,
            antipodal_deviation,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            antipodal_deviation: ANTIPODAL_DEVIATION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the antipodal deviation is zero, negative or not finite.
    InvalidDeviation(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidDeviation(value) => {
                write!(f, "antipodal_deviation must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON_TOLERANCE.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

/// Mixed absolute/relative closeness used by the antipodal test.
///
/// Asymmetric in the same way as the classic `allclose`: `b` is the
/// reference value.
///
/// # Example
///
/// ```rust
/// use config::constants::is_close;
///
/// assert!(is_close(1000.0, 1000.001));
/// assert!(!is_close(1.0, 1.001));
/// ```
#[inline]
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ANTIPODAL_ABSOLUTE_TOLERANCE + ANTIPODAL_RELATIVE_TOLERANCE * b.abs()
}
