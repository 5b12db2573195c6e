//! Error types shared by the samplers and the quadrature evaluator.

use thiserror::Error;

/// Result type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadratureError>;

/// Errors raised at the entry of a sampler or of the evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    /// A resolution, point count, dimension or interval bound is out of range.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    /// A point, or the integrand, disagrees with the dimensionality declared
    /// by the point set. `index` is the offending point, or `None` when the
    /// integrand itself declares another dimension.
    #[error(
        "dimension mismatch in {}: expected {expected} coordinates, found {found}",
        mismatch_location(.index)
    )]
    DimensionMismatch {
        index: Option<usize>,
        expected: usize,
        found: usize,
    },
}

fn mismatch_location(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("point {i}"),
        None => "integrand".to_string(),
    }
}

impl QuadratureError {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuadratureError::invalid("nx", "must be positive");
        assert_eq!(err.to_string(), "invalid parameter 'nx': must be positive");

        let err = QuadratureError::DimensionMismatch {
            index: Some(3),
            expected: 2,
            found: 1,
        };
        assert!(err.to_string().contains("point 3"));
        assert!(err.to_string().contains("expected 2"));

        let err = QuadratureError::DimensionMismatch {
            index: None,
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().starts_with("dimension mismatch in integrand"));
    }
}
