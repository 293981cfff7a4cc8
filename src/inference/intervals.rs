//! Interval mathematics: leverage, penalized standard errors, and
//! t-based half-widths for new predictor rows.

use crate::core::IntervalType;
use crate::distributions;
use crate::linalg;
use faer::Mat;

/// Leverage of a new predictor row against the design:
/// row · (X'X)⁻¹ · row'.
///
/// Rows far from the training design yield larger values; extrapolated
/// rows may exceed 1. No clamping is applied.
pub fn distance_value(row: &[f64], covariance_inverse: &Mat<f64>) -> f64 {
    linalg::quadratic_form(row, covariance_inverse)
}

/// Interval widening factor √(penalty + leverage), where the penalty is 1
/// for a prediction interval and 0 for a confidence interval.
pub fn penalty_factor(distance: f64, interval: IntervalType) -> f64 {
    (interval.penalty() + distance).sqrt()
}

/// Standard error of a prediction at the given leverage,
/// se · √(penalty + leverage).
pub fn penalized_standard_error(
    standard_error: f64,
    distance: f64,
    interval: IntervalType,
) -> f64 {
    standard_error * penalty_factor(distance, interval)
}

/// Interval half-width: the Student-t quantile at the one-sided tail
/// probability, times the penalized standard error.
///
/// Tail probabilities below 0.5 produce negative half-widths, so the
/// corresponding interval endpoint lies below the point estimate.
pub fn half_width(
    probability: f64,
    degrees_of_freedom: f64,
    penalized_standard_error: f64,
) -> f64 {
    distributions::students_t_quantile(probability, degrees_of_freedom) * penalized_standard_error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_value_identity() {
        let inv = Mat::<f64>::identity(2, 2);
        let d = distance_value(&[3.0, 4.0], &inv);
        assert!((d - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_penalty_factor_prediction_exceeds_confidence() {
        let d = 0.3;
        let pf_pred = penalty_factor(d, IntervalType::Prediction);
        let pf_conf = penalty_factor(d, IntervalType::Confidence);

        assert!(pf_pred > pf_conf);
        assert!((pf_conf - d.sqrt()).abs() < 1e-12);
        assert!((pf_pred - (1.0 + d).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_half_width_sign_follows_tail() {
        let se = 0.5;
        let lower = half_width(0.025, 5.0, se);
        let upper = half_width(0.975, 5.0, se);

        assert!(lower < 0.0);
        assert!(upper > 0.0);
        assert!((lower + upper).abs() < 1e-8);
    }
}
