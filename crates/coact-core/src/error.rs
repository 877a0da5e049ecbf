//! Error handling for the co-activation workspace
//!
//! Every failure is synchronous; nothing here is retried.

use core::fmt;

/// Result type alias for co-activation operations
pub type CoactResult<T> = Result<T, CoactError>;

/// Error type for all co-activation operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoactError {
    /// Malformed activity matrix (empty, ragged, zero-column or non-finite)
    InvalidInput {
        /// Description of the input problem
        reason: String,
    },

    /// Trajectory too short for second-order differentiation
    TooFewFrames {
        /// Frames supplied
        frames: usize,
        /// Minimum frames required
        required: usize,
    },

    /// Channel sum of a frame is exactly zero
    NumericDegeneracy {
        /// Index of the offending frame
        frame: usize,
        /// Description of the degeneracy
        reason: &'static str,
    },

    /// Potential returned a height vector of the wrong length
    PotentialShapeMismatch {
        /// Number of path points
        expected: usize,
        /// Number of heights returned
        actual: usize,
    },

    /// Potential reported its own failure
    PotentialFailed {
        /// Description supplied by the potential
        reason: String,
    },

    /// Invalid metric configuration
    ConfigurationError {
        /// Description of the configuration error
        message: String,
    },

    /// Invalid simulation parameters
    SimulationError {
        /// Description of the simulation error
        message: String,
    },
}

impl fmt::Display for CoactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoactError::InvalidInput { reason } => {
                write!(f, "Invalid input: {}", reason)
            }
            CoactError::TooFewFrames { frames, required } => {
                write!(f, "Too few frames: got {}, need at least {}",
                       frames, required)
            }
            CoactError::NumericDegeneracy { frame, reason } => {
                write!(f, "Numeric degeneracy at frame {}: {}", frame, reason)
            }
            CoactError::PotentialShapeMismatch { expected, actual } => {
                write!(f, "Potential returned {} heights for {} path points",
                       actual, expected)
            }
            CoactError::PotentialFailed { reason } => {
                write!(f, "Potential evaluation failed: {}", reason)
            }
            CoactError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            CoactError::SimulationError { message } => {
                write!(f, "Simulation error: {}", message)
            }
        }
    }
}

impl std::error::Error for CoactError {}

/// Convenience macro for creating input errors
#[macro_export]
macro_rules! input_error {
    ($($arg:tt)+) => {
        $crate::error::CoactError::InvalidInput {
            reason: format!($($arg)+),
        }
    };
}
