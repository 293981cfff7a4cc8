//! The derived-statistics record computed at fit time.

use crate::core::dataset::Dataset;
use faer::{Col, Mat};

/// Goodness-of-fit and significance statistics derived from a fitted
/// model, computed exactly once at fit time.
///
/// Variation decomposes as `total ≈ explained + unexplained` up to
/// floating-point tolerance; `unexplained_variation` is by definition the
/// sum of squared errors.
#[derive(Debug, Clone)]
pub struct FitSummary {
    /// Fitted value ŷᵢ for every training observation.
    pub fitted_values: Col<f64>,
    /// Residual yᵢ − ŷᵢ for every training observation.
    pub residuals: Col<f64>,
    /// Sum of squared residuals.
    pub sum_of_squared_errors: f64,
    /// Arithmetic mean of the responses, ȳ.
    pub mean_response: f64,
    /// Σ(yᵢ − ȳ)².
    pub total_variation: f64,
    /// Σ(ŷᵢ − ȳ)².
    pub explained_variation: f64,
    /// Residual standard error √(SSE / df).
    pub standard_error: f64,
    /// Multiple coefficient of determination, explained / total.
    pub r_squared: f64,
    /// R² penalized for the number of predictors.
    pub adjusted_r_squared: f64,
    /// Overall model F-statistic, (explained/k) / (SSE/(n−k−1)).
    pub f_statistic: f64,
    /// Per-coefficient t-statistic βᵢ / (se·√((X'X)⁻¹ᵢᵢ)).
    pub t_values: Col<f64>,
}

impl FitSummary {
    /// Derive the full statistics battery from a dataset, its OLS
    /// coefficients, and the inverse covariance matrix (X'X)⁻¹.
    ///
    /// Degenerate inputs follow IEEE semantics: a constant response makes
    /// R² the indeterminate 0/0 = NaN, and an intercept-only model (k = 0)
    /// makes the F-statistic non-finite. No clamping is applied.
    pub fn compute(
        dataset: &Dataset,
        coefficients: &Col<f64>,
        covariance_inverse: &Mat<f64>,
        degrees_of_freedom: f64,
    ) -> Self {
        let n = dataset.n_observations();
        let p = dataset.n_parameters();
        let x = dataset.x();
        let y = dataset.y();

        let fitted_values = Col::from_fn(n, |i| {
            (0..p).map(|j| x[(i, j)] * coefficients[j]).sum::<f64>()
        });
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);

        let sum_of_squared_errors: f64 = residuals.iter().map(|&r| r * r).sum();
        let mean_response: f64 = y.iter().sum::<f64>() / n as f64;

        let total_variation: f64 = y.iter().map(|&yi| (yi - mean_response).powi(2)).sum();
        let explained_variation: f64 = fitted_values
            .iter()
            .map(|&fi| (fi - mean_response).powi(2))
            .sum();

        let standard_error = (sum_of_squared_errors / degrees_of_freedom).sqrt();
        let r_squared = explained_variation / total_variation;

        let n_f = n as f64;
        let k = p as f64 - 1.0;
        let adjusted_r_squared = r_squared - (1.0 - r_squared) * (k / (n_f - k - 1.0));
        let f_statistic =
            (explained_variation / k) / (sum_of_squared_errors / (n_f - k - 1.0));

        let t_values = Col::from_fn(p, |i| {
            coefficients[i] / (standard_error * covariance_inverse[(i, i)].sqrt())
        });

        Self {
            fitted_values,
            residuals,
            sum_of_squared_errors,
            mean_response,
            total_variation,
            explained_variation,
            standard_error,
            r_squared,
            adjusted_r_squared,
            f_statistic,
            t_values,
        }
    }

    /// Unexplained variation, defined equal to the sum of squared errors.
    pub fn unexplained_variation(&self) -> f64 {
        self.sum_of_squared_errors
    }
}
