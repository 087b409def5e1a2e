//! Threevector: a three-component Euclidean vector for kinematics
//!
//! This crate provides the `Vector3` value type used for particle momenta,
//! positions and directions: component access, arithmetic, magnitude and
//! angle queries, pseudorapidity, cylindrical and spherical views, and
//! in-place rotations.
//!
//! Degenerate input never aborts a calculation. Each such case follows a
//! fixed numeric fallback, logs a message through the `log` facade and
//! returns a [`Diagnostic`] the caller can inspect.
//!
//! ```rust
//! use threevector::Vector3;
//!
//! let a = Vector3::new(1.0, 1.0, 0.5);
//! let b = Vector3::new(-1.0, 1.0, 2.0);
//! let separation = a.delta_r(&b);
//! assert!(separation > 0.0);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod diagnostics;

// Re-export commonly used types
pub use coordinates::Vector3;
pub use diagnostics::Diagnostic;

/// Main error type for the threevector library
///
/// Raised only by text parsing and stream reading. Numeric operations report
/// [`Diagnostic`]s instead of failing.
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("Invalid component {token:?}: {source}")]
    InvalidComponent {
        /// The text that failed to parse
        token: String,
        /// The underlying float parse error
        source: std::num::ParseFloatError,
    },

    #[error("Expected 3 components, found {0}")]
    WrongComponentCount(usize),

    #[error("Unexpected end of input after {0} components")]
    UnexpectedEof(usize),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for threevector operations
pub type Result<T> = std::result::Result<T, VectorError>;
