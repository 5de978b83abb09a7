//! # Compound Errors
//!
//! Error types for assembly and builder construction.
//!
//! ## Error Policy
//!
//! - Construction either fully succeeds or returns an error; no partial
//!   objects are produced
//! - Antipodal tube joints are corrected, never reported
//! - Kernel failures are wrapped with their original message

use solid_kernel::KernelError;
use thiserror::Error;

/// Errors that can occur while building compound solids.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompoundError {
    /// A slave entry or builder argument is malformed.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// What was wrong with the input.
        message: String,
    },

    /// The requested bend radius does not fit the polyline.
    #[error(
        "Curvature radius {requested} is too large: segment {segment} admits at most {bound}"
    )]
    InfeasibleCurvature {
        /// Index of the tightest segment.
        segment: usize,
        /// Requested bend radius.
        requested: f64,
        /// Largest admissible bend radius for that segment.
        bound: f64,
    },

    /// A single-segment tube forced to be a torus has no known tangent.
    #[error("Cannot determine a torus from a single segment without an adjacent tangent")]
    UnderconstrainedTorus,

    /// A lathe profile crosses the rotation axis or has the wrong format.
    #[error("Invalid profile: {message}")]
    InvalidProfile {
        /// What was wrong with the input.
        message: String,
    },

    /// Underlying analytic construction failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] KernelError),
}

impl CompoundError {
    /// Creates a malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Creates an invalid profile error.
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }
}

/// Result type alias for compound operations.
pub type CompoundResult<T> = Result<T, CompoundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompoundError::InfeasibleCurvature {
            segment: 2,
            requested: 1.5,
            bound: 1.0,
        };
        let message = err.to_string();
        assert!(message.contains("segment 2"));
        assert!(message.contains("1.5"));

        let wrapped: CompoundError = KernelError::EmptyPointSet.into();
        assert!(wrapped.to_string().starts_with("Geometry error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompoundError>();
    }
}
