//! Error types for vector operations.

use thiserror::Error;

/// Result type returned by fallible [`Vector`][crate::Vector] operations.
pub type Result<T, E = VectorError> = std::result::Result<T, E>;

/// Errors that can occur when constructing or combining vectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VectorError {
    /// The input was rejected (eg. it was empty or contained non-finite values).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A textual coordinate could not be interpreted as a number.
    #[error("expected a number, found `{token}`")]
    TypeMismatch { token: String },

    /// A binary operation was applied to vectors with different dimensions.
    #[error("dimension mismatch: {left} vs. {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The zero vector has no direction, so it cannot be normalized.
    #[error("cannot normalize the zero vector")]
    DivisionByZero,

    /// The operation is not defined for its inputs.
    #[error("{0}")]
    Domain(String),
}

impl VectorError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            VectorError::DimensionMismatch { left: 2, right: 3 }.to_string(),
            "dimension mismatch: 2 vs. 3"
        );
        assert_eq!(
            VectorError::TypeMismatch {
                token: "abc".into()
            }
            .to_string(),
            "expected a number, found `abc`"
        );
        assert_eq!(
            VectorError::invalid("the coordinates must be nonempty").to_string(),
            "invalid argument: the coordinates must be nonempty"
        );
    }
}
