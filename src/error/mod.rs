//! Error handling for the medimetry library.
//!
//! Every calculation validates its inputs before computing; the only failure
//! mode is an invalid input, reported synchronously to the caller.

pub mod validate;

/// Specialized error type for clinical calculations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MedimetryError {
    /// A numeric argument or enumerated selector failed validation
    #[error("invalid input: {message} (expected {expected})")]
    InvalidInput {
        /// Which constraint failed, naming the offending parameter
        message: String,
        /// The accepted range or set of values
        expected: &'static str,
    },
}

impl MedimetryError {
    /// Create an invalid-input error from a constraint description and the
    /// accepted range
    #[must_use]
    pub fn invalid_input(message: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidInput {
            message: message.into(),
            expected,
        }
    }
}

/// Result type for medimetry operations
pub type Result<T> = std::result::Result<T, MedimetryError>;
