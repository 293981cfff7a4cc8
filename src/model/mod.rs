//! The estimation engine: the least-squares estimator and the fitted
//! model it produces.

mod fitted;
mod least_squares;

pub use fitted::FittedModel;
pub use least_squares::{LeastSquares, LeastSquaresBuilder};

use crate::core::RegressionError;

/// Fit an OLS model with default options from predictor rows and scalar
/// responses.
///
/// Convenience wrapper around [`LeastSquares::fit_rows`].
pub fn fit<R: AsRef<[f64]>>(xs: &[R], ys: &[f64]) -> Result<FittedModel, RegressionError> {
    LeastSquares::default().fit_rows(xs, ys)
}
