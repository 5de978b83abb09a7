//! # Kernel Errors
//!
//! Error types for analytic constructions. Every degenerate input is
//! reported explicitly; nothing is silently clamped.

use thiserror::Error;

/// Errors that can occur while building analytic geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KernelError {
    /// No finite circle satisfies the requested constraints.
    #[error("Degenerate circle: {message}")]
    DegenerateCircle {
        /// What was wrong with the input.
        message: String,
    },

    /// The triangle has a zero-length or collinear pair of legs.
    #[error("Degenerate triangle: {message}")]
    DegenerateTriangle {
        /// What was wrong with the input.
        message: String,
    },

    /// The polyline has too few points or a zero-length segment.
    #[error("Degenerate polyline: {message}")]
    DegeneratePolyline {
        /// What was wrong with the input.
        message: String,
    },

    /// A primitive was given a non-positive radius or a zero-length axis.
    #[error("Invalid primitive: {message}")]
    InvalidPrimitive {
        /// What was wrong with the input.
        message: String,
    },

    /// A bounding box was requested over no points.
    #[error("Cannot bound an empty point set")]
    EmptyPointSet,
}

impl KernelError {
    /// Creates a degenerate circle error.
    pub fn degenerate_circle(message: impl Into<String>) -> Self {
        Self::DegenerateCircle {
            message: message.into(),
        }
    }

    /// Creates a degenerate triangle error.
    pub fn degenerate_triangle(message: impl Into<String>) -> Self {
        Self::DegenerateTriangle {
            message: message.into(),
        }
    }

    /// Creates a degenerate polyline error.
    pub fn degenerate_polyline(message: impl Into<String>) -> Self {
        Self::DegeneratePolyline {
            message: message.into(),
        }
    }

    /// Creates an invalid primitive error.
    pub fn invalid_primitive(message: impl Into<String>) -> Self {
        Self::InvalidPrimitive {
            message: message.into(),
        }
    }
}

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;
