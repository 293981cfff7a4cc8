//! Ordinary least squares estimation.

use crate::core::{Dataset, FitSummary, RegressionError, RegressionOptions, RegressionOptionsBuilder};
use crate::linalg;
use crate::model::fitted::FittedModel;

/// Ordinary least squares estimator.
///
/// Solves β = (X'X)⁻¹X'y with the inverse obtained by QR decomposition
/// and back-substitution. Fitting either yields a fully fitted,
/// immutable [`FittedModel`] or fails with a [`RegressionError`]; no
/// partially estimated state is ever produced.
///
/// # Example
///
/// ```rust,ignore
/// use mlregress::prelude::*;
///
/// let fitted = LeastSquares::builder()
///     .build()?
///     .fit_rows(&xs, &ys)?;
///
/// println!("R² = {}", fitted.r_squared());
/// println!("Coefficients: {:?}", fitted.coefficients());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeastSquares {
    options: RegressionOptions,
}

impl LeastSquares {
    /// Create a new estimator with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the estimator.
    pub fn builder() -> LeastSquaresBuilder {
        LeastSquaresBuilder::default()
    }

    /// The options this estimator fits with.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Check that a dataset is well-posed for estimation: residual
    /// degrees of freedom must be strictly positive and X'X must be
    /// regular at the configured singularity tolerance.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), RegressionError> {
        let n = dataset.n_observations();
        let p = dataset.n_parameters();

        if n <= p {
            return Err(RegressionError::InsufficientData {
                observations: n,
                parameters: p,
            });
        }

        let xtx = linalg::gram(dataset.x());
        if !linalg::is_regular(&xtx, self.options.singularity_tolerance) {
            return Err(RegressionError::SingularDesign);
        }

        Ok(())
    }

    /// Fit the model to a dataset.
    ///
    /// Runs the well-posedness check, computes the covariance matrix
    /// C = X'X, its inverse, the coefficient vector β = C⁻¹X'y, and the
    /// full diagnostics battery, all exactly once.
    pub fn fit(&self, dataset: Dataset) -> Result<FittedModel, RegressionError> {
        self.validate(&dataset)?;

        let covariance = linalg::gram(dataset.x());
        let covariance_inverse = linalg::invert(&covariance, self.options.singularity_tolerance)
            .map_err(|_| RegressionError::SingularDesign)?;

        let coefficients = &covariance_inverse * linalg::gram_rhs(dataset.x(), dataset.y());

        let degrees_of_freedom =
            (dataset.n_observations() - dataset.n_parameters()) as f64;
        let summary =
            FitSummary::compute(&dataset, &coefficients, &covariance_inverse, degrees_of_freedom);

        Ok(FittedModel::new(
            dataset,
            coefficients,
            covariance,
            covariance_inverse,
            degrees_of_freedom,
            summary,
        ))
    }

    /// Ingest predictor rows and responses, then fit in one call.
    pub fn fit_rows<R: AsRef<[f64]>>(
        &self,
        xs: &[R],
        ys: &[f64],
    ) -> Result<FittedModel, RegressionError> {
        let dataset = Dataset::from_rows(xs, ys)?;
        self.fit(dataset)
    }
}

/// Builder for `LeastSquares`.
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresBuilder {
    builder: RegressionOptionsBuilder,
}

impl LeastSquaresBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singularity tolerance for the regularity test.
    pub fn singularity_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singularity_tolerance(tol);
        self
    }

    /// Build the estimator, validating the options.
    pub fn build(self) -> Result<LeastSquares, RegressionError> {
        let options = self.builder.build()?;
        Ok(LeastSquares::new(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fit() {
        let xs: Vec<Vec<f64>> = (0..5).map(|i| vec![1.0, i as f64]).collect();
        let ys: Vec<f64> = (0..5).map(|i| 2.0 + 3.0 * i as f64).collect();

        let fitted = LeastSquares::default()
            .fit_rows(&xs, &ys)
            .expect("model should fit");

        assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-10);
        assert!((fitted.coefficients()[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_insufficient_data_exact() {
        // n == p: zero residual degrees of freedom.
        let xs = vec![vec![1.0, 2.0], vec![1.0, 3.0]];
        let ys = vec![4.0, 5.0];

        let result = LeastSquares::default().fit_rows(&xs, &ys);
        assert!(matches!(
            result,
            Err(RegressionError::InsufficientData {
                observations: 2,
                parameters: 2
            })
        ));
    }

    #[test]
    fn test_insufficient_data_underdetermined() {
        let xs = vec![vec![1.0, 2.0, 3.0]];
        let ys = vec![4.0];

        let result = LeastSquares::default().fit_rows(&xs, &ys);
        assert!(matches!(
            result,
            Err(RegressionError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_singular_design() {
        // Second predictor is twice the first, so X'X has no inverse.
        let xs: Vec<Vec<f64>> = (0..6)
            .map(|i| vec![1.0, i as f64, 2.0 * i as f64])
            .collect();
        let ys: Vec<f64> = (0..6).map(|i| i as f64).collect();

        let result = LeastSquares::default().fit_rows(&xs, &ys);
        assert!(matches!(result, Err(RegressionError::SingularDesign)));
    }

    #[test]
    fn test_validate_accepts_well_posed() {
        let xs: Vec<Vec<f64>> = (0..5).map(|i| vec![1.0, i as f64]).collect();
        let ys: Vec<f64> = (0..5).map(|i| i as f64).collect();

        let dataset = Dataset::from_rows(&xs, &ys).unwrap();
        assert!(LeastSquares::default().validate(&dataset).is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_tolerance() {
        let result = LeastSquares::builder().singularity_tolerance(-1.0).build();
        assert!(matches!(result, Err(RegressionError::InvalidOptions(_))));
    }
}
