//! Error types for model construction and fitting.

use thiserror::Error;

/// Errors that can occur when validating fit options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("singularity_tolerance must be positive and finite, got {0}")]
    InvalidSingularityTolerance(f64),
}

/// Errors that can occur during dataset ingestion or model fitting.
///
/// A failed fit produces no model value at all: there is no partially
/// fitted state to observe.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: {x_rows} predictor rows but {y_rows} responses")]
    DimensionMismatch { x_rows: usize, y_rows: usize },

    #[error("ragged predictor rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error(
        "insufficient data: {observations} observations for {parameters} parameters \
         leaves no residual degrees of freedom"
    )]
    InsufficientData {
        observations: usize,
        parameters: usize,
    },

    #[error("design matrix is singular: X'X is not invertible")]
    SingularDesign,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegressionError::DimensionMismatch {
            x_rows: 8,
            y_rows: 7,
        };
        assert!(err.to_string().contains("8 predictor rows"));

        let err = RegressionError::InsufficientData {
            observations: 3,
            parameters: 3,
        };
        assert!(err.to_string().contains("3 observations"));
    }

    #[test]
    fn test_options_error_converts() {
        let err: RegressionError = OptionsError::InvalidSingularityTolerance(-1.0).into();
        assert!(matches!(err, RegressionError::InvalidOptions(_)));
    }
}
