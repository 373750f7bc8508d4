//! Error type for the guarded (`try_*`) operations.

use core::fmt;

/// Precondition violations reported by the fallible entry points.
///
/// The unguarded counterparts (`normalize`, `inverse`) never return this:
/// they either produce non-finite output or fall back to identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MathError {
    /// Vector length was zero (or below scalar epsilon).
    ZeroLength,
    /// Quaternion magnitude was zero (or below scalar epsilon).
    ZeroMagnitude,
    /// Matrix determinant magnitude fell below the inversion threshold.
    Singular { determinant: f64 },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "cannot normalize a zero-length vector"),
            Self::ZeroMagnitude => write!(f, "cannot normalize a zero-magnitude quaternion"),
            Self::Singular { determinant } => {
                write!(f, "matrix is singular (determinant {determinant:e})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}
