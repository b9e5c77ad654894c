//! Error type for the HVC transform kernel

use std::fmt;

/// Result alias used across the crate
pub type Result<T> = core::result::Result<T, NttError>;

/// Errors returned when a buffer violates the transform's input contract.
///
/// Every variant is a caller error; the computation itself is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NttError {
    /// A coefficient lies outside [0, q).
    InvalidResidue {
        /// Position of the first offending coefficient.
        index: usize,
        /// The offending value.
        value: u16,
    },
    /// A slice had the wrong number of coefficients.
    LengthMismatch {
        /// Expected coefficient count (always `N`).
        expected: usize,
        /// Actual count received.
        actual: usize,
    },
}

impl fmt::Display for NttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResidue { index, value } => {
                write!(
                    f,
                    "invalid residue at index {index}: {value} is not below {}",
                    crate::lattice::params::Q
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for NttError {}
