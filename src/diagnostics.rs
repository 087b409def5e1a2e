//! Advisory diagnostics for anomalous vector input
//!
//! No vector operation fails. When an operation meets degenerate input (a bad
//! component index, a zero vector that cannot be stretched, a division by zero)
//! it still produces a well-defined result, and it tells the caller what went
//! wrong in two ways:
//!
//! - the message is written to the [`log`] facade at `warn` level, target
//!   `threevector`, so whichever logger the host installed decides where it goes
//! - the [`Diagnostic`] kind is returned from the operation, so callers and
//!   tests can branch on it without scraping log text
//!
//! ```rust
//! use threevector::{Diagnostic, Vector3};
//!
//! let mut v = Vector3::zeros();
//! assert_eq!(v.set_mag(2.0), Some(Diagnostic::ZeroVectorStretch));
//! assert_eq!(v, Vector3::zeros());
//! ```

use thiserror::Error;

/// Log target used for every diagnostic
pub const LOG_TARGET: &str = "threevector";

/// Kinds of anomalous input a vector operation can run into
///
/// The display text of each variant is the message written to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Diagnostic {
    /// Component index outside `0..=2`
    #[error("Vector3 subscripting: bad index ({0})")]
    BadIndex(usize),

    /// `set_mag` on the exact zero vector
    #[error("Vector3::set_mag : zero vector can't be stretched")]
    ZeroVectorStretch,

    /// `set_eta` on the exact zero vector
    #[error("Attempt to set eta of zero vector -- vector is unchanged")]
    EtaOfZeroVector,

    /// `set_eta` on a vector along the Z axis
    #[error("Attempt to set eta of vector along Z axis -- will use phi = 0")]
    EtaAlongZAxis,

    /// `set_cyl_theta` on the exact zero vector
    #[error("Attempt to set cylTheta of zero vector -- vector is unchanged")]
    CylThetaOfZeroVector,

    /// `set_cyl_theta` on a Z-axis vector with a theta other than 0 or pi
    #[error(
        "Attempt set cylindrical theta of vector along Z axis to a non-trivial value, \
         while keeping rho fixed -- will return zero vector"
    )]
    CylThetaAlongZAxis,

    /// `set_cyl_theta` with theta outside `[0, pi]`
    #[error("Setting Cyl theta of a vector based on a value not in [0, PI]")]
    CylThetaOutOfRange,

    /// `set_cyl_theta` of an off-axis vector to exactly 0 or pi
    #[error(
        "Attempt to set cylindrical theta to 0 or PI while keeping rho fixed -- \
         infinite Z will be computed"
    )]
    CylThetaInfiniteZ,

    /// `set_cyl_eta` on the exact zero vector
    #[error("Attempt to set cylEta of zero vector -- vector is unchanged")]
    CylEtaOfZeroVector,

    /// `set_cyl_eta` on a Z-axis vector
    #[error(
        "Attempt set cylindrical eta of vector along Z axis to a non-trivial value, \
         while keeping rho fixed -- will return zero vector"
    )]
    CylEtaAlongZAxis,

    /// `vector / 0`
    #[error("Attempt to divide vector by 0 -- will produce infinities and/or NANs")]
    DivideByZero,

    /// `vector /= 0`
    #[error(
        "Attempt to do vector /= 0 -- division by zero would produce infinite or NAN components"
    )]
    DivideAssignByZero,

    /// Rotation about a zero-length axis
    #[error("Attempt to rotate around a zero vector axis -- vector is unchanged")]
    ZeroRotationAxis,
}

/// Writes a diagnostic to the log and hands it back to the caller
pub fn report(diagnostic: Diagnostic) -> Diagnostic {
    log::warn!(target: LOG_TARGET, "{}", diagnostic);
    diagnostic
}
