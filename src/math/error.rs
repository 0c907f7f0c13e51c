// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    #[error("Insufficient knots for interpolation: expected at least {expected}, got {actual}")]
    InsufficientKnots { expected: usize, actual: usize },

    #[error("Invalid control point count {count}: expected 3 * segments + 1 points")]
    InvalidControlPointCount { count: usize },
}

impl MathError {
    /// Kurzform für `InvalidArgument`
    pub(crate) fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
