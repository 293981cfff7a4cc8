//! The fitted-model value object: read accessors for every derived
//! statistic plus the prediction and inference operations.

use crate::core::{Dataset, FitSummary, IntervalType};
use crate::distributions;
use crate::inference;
use faer::{Col, Mat};

/// An immutable fitted regression model.
///
/// Every derived quantity is computed exactly once at fit time; the
/// accessors below are read-only borrows, so no statistic can be
/// overwritten after fitting. A `FittedModel` only exists for a
/// well-posed fit, which makes concurrent read access safe without
/// locking.
#[derive(Debug, Clone)]
pub struct FittedModel {
    dataset: Dataset,
    coefficients: Col<f64>,
    covariance: Mat<f64>,
    covariance_inverse: Mat<f64>,
    degrees_of_freedom: f64,
    summary: FitSummary,
}

impl FittedModel {
    pub(crate) fn new(
        dataset: Dataset,
        coefficients: Col<f64>,
        covariance: Mat<f64>,
        covariance_inverse: Mat<f64>,
        degrees_of_freedom: f64,
        summary: FitSummary,
    ) -> Self {
        Self {
            dataset,
            coefficients,
            covariance,
            covariance_inverse,
            degrees_of_freedom,
            summary,
        }
    }

    /// The dataset this model was fitted on.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The OLS coefficient vector β.
    pub fn coefficients(&self) -> &Col<f64> {
        &self.coefficients
    }

    /// The covariance matrix C = X'X.
    pub fn covariance_matrix(&self) -> &Mat<f64> {
        &self.covariance
    }

    /// The inverse covariance matrix C⁻¹ = (X'X)⁻¹.
    pub fn covariance_inverse(&self) -> &Mat<f64> {
        &self.covariance_inverse
    }

    /// Residual degrees of freedom, n − p.
    pub fn degrees_of_freedom(&self) -> f64 {
        self.degrees_of_freedom
    }

    /// The full derived-statistics record.
    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    /// Fitted value ŷᵢ for every training observation.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.summary.fitted_values
    }

    /// Residual yᵢ − ŷᵢ for every training observation.
    pub fn residuals(&self) -> &Col<f64> {
        &self.summary.residuals
    }

    /// Sum of squared residuals.
    pub fn sum_of_squared_errors(&self) -> f64 {
        self.summary.sum_of_squared_errors
    }

    /// Arithmetic mean of the responses.
    pub fn mean_response(&self) -> f64 {
        self.summary.mean_response
    }

    /// Total variation Σ(yᵢ − ȳ)².
    pub fn total_variation(&self) -> f64 {
        self.summary.total_variation
    }

    /// Explained variation Σ(ŷᵢ − ȳ)².
    pub fn explained_variation(&self) -> f64 {
        self.summary.explained_variation
    }

    /// Unexplained variation, equal to the sum of squared errors.
    pub fn unexplained_variation(&self) -> f64 {
        self.summary.unexplained_variation()
    }

    /// Residual standard error √(SSE / df).
    pub fn standard_error(&self) -> f64 {
        self.summary.standard_error
    }

    /// Multiple coefficient of determination R².
    pub fn r_squared(&self) -> f64 {
        self.summary.r_squared
    }

    /// R² adjusted for the number of predictors.
    pub fn adjusted_r_squared(&self) -> f64 {
        self.summary.adjusted_r_squared
    }

    /// Multiple correlation coefficient √R².
    pub fn multiple_correlation(&self) -> f64 {
        self.summary.r_squared.sqrt()
    }

    /// Overall model F-statistic.
    pub fn f_statistic(&self) -> f64 {
        self.summary.f_statistic
    }

    /// Per-coefficient t-statistics.
    pub fn t_values(&self) -> &Col<f64> {
        &self.summary.t_values
    }

    /// Point prediction for a predictor row: the dot product row · β.
    ///
    /// Serves both in-sample fitted values and out-of-sample predictions.
    ///
    /// # Panics
    /// Panics if `row` is shorter than the number of model parameters.
    pub fn estimate(&self, row: &[f64]) -> f64 {
        (0..self.coefficients.nrows())
            .map(|j| row[j] * self.coefficients[j])
            .sum()
    }

    /// Alias for [`FittedModel::estimate`].
    pub fn predict(&self, row: &[f64]) -> f64 {
        self.estimate(row)
    }

    /// Leverage of every training row: the diagonal of the hat matrix
    /// X(X'X)⁻¹X'. Sums to the parameter count p.
    pub fn leverages(&self) -> Col<f64> {
        Col::from_fn(self.dataset.n_observations(), |i| {
            inference::distance_value(&self.dataset.row(i), &self.covariance_inverse)
        })
    }

    /// Leverage of a new predictor row, row · (X'X)⁻¹ · row'.
    pub fn distance_value(&self, row: &[f64]) -> f64 {
        inference::distance_value(row, &self.covariance_inverse)
    }

    /// Interval widening factor √(penalty + leverage) at `row`.
    pub fn penalty_factor(&self, row: &[f64], interval: IntervalType) -> f64 {
        inference::penalty_factor(self.distance_value(row), interval)
    }

    /// Standard error of a prediction at `row`, widened by leverage and
    /// the interval penalty.
    pub fn penalized_standard_error(&self, row: &[f64], interval: IntervalType) -> f64 {
        inference::penalized_standard_error(
            self.summary.standard_error,
            self.distance_value(row),
            interval,
        )
    }

    /// Interval half-width at `row` for a one-sided tail `probability`.
    pub fn half_width(&self, row: &[f64], probability: f64, interval: IntervalType) -> f64 {
        inference::half_width(
            probability,
            self.degrees_of_freedom,
            self.penalized_standard_error(row, interval),
        )
    }

    /// Interval endpoint at `row`: estimate(row) + half_width.
    ///
    /// Tail probabilities below 0.5 place the endpoint below the point
    /// estimate, probabilities above 0.5 place it above; `limit(row, p)`
    /// and `limit(row, 1 − p)` are symmetric about the estimate.
    pub fn limit(&self, row: &[f64], probability: f64, interval: IntervalType) -> f64 {
        self.estimate(row) + self.half_width(row, probability, interval)
    }

    /// Probability that the true response at `row` is at or below `y`:
    /// the Student-t CDF of (estimate − y) / penalized standard error.
    ///
    /// The model's own point estimate is the median of its prediction
    /// distribution, so `normalize(row, estimate(row))` is 0.5.
    pub fn normalize(&self, row: &[f64], y: f64, interval: IntervalType) -> f64 {
        let scaled =
            (self.estimate(row) - y) / self.penalized_standard_error(row, interval);
        distributions::students_t_cdf(scaled, self.degrees_of_freedom)
    }

    /// Alias for [`FittedModel::normalize`].
    pub fn probability(&self, row: &[f64], y: f64, interval: IntervalType) -> f64 {
        self.normalize(row, y, interval)
    }

    /// Overall model significance: F-distribution CDF of the F-statistic
    /// compared against `threshold` (for example 0.95).
    pub fn is_significant(&self, threshold: f64) -> bool {
        let k = self.dataset.n_parameters() as f64 - 1.0;
        inference::model_significance(
            self.summary.f_statistic,
            k,
            self.degrees_of_freedom,
            threshold,
        )
    }

    /// Single-coefficient significance: one-sided Student-t CDF of the
    /// coefficient's t-value compared against `threshold`.
    ///
    /// # Panics
    /// Panics if `column` is out of range.
    pub fn is_coefficient_significant(&self, column: usize, threshold: f64) -> bool {
        inference::coefficient_significance(
            self.summary.t_values[column],
            self.degrees_of_freedom,
            threshold,
        )
    }
}
