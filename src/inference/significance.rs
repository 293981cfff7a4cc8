//! Significance tests for the overall model and individual coefficients.

use crate::distributions;

/// Overall model significance: compares the F-distribution CDF of the
/// F-statistic, with `k` numerator and `degrees_of_freedom` denominator
/// degrees of freedom, against the given threshold.
///
/// Intercept-only models (k = 0) have no testable predictors; the CDF is
/// NaN and the comparison fails closed.
pub fn model_significance(
    f_statistic: f64,
    k: f64,
    degrees_of_freedom: f64,
    threshold: f64,
) -> bool {
    distributions::fisher_f_cdf(f_statistic, k, degrees_of_freedom) > threshold
}

/// Single-coefficient significance: compares the Student-t CDF of the
/// coefficient's t-value against the given threshold.
///
/// The test is one-sided; a strongly negative t-value yields a CDF near
/// zero and is never flagged significant.
pub fn coefficient_significance(t_value: f64, degrees_of_freedom: f64, threshold: f64) -> bool {
    distributions::students_t_cdf(t_value, degrees_of_freedom) > threshold
}
