//! Interval types for prediction.

/// Type of interval to compute for a new predictor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    /// Confidence interval for the mean response E[Y|X=x₀].
    /// Narrower - only accounts for uncertainty in coefficient estimates.
    Confidence,

    /// Prediction interval for a new observation Y|X=x₀.
    /// Wider - also accounts for residual variance (irreducible error).
    #[default]
    Prediction,
}

impl IntervalType {
    /// The additive penalty under the leverage term: 0 for a confidence
    /// interval on the mean response, 1 for a new-observation prediction
    /// interval.
    pub fn penalty(self) -> f64 {
        match self {
            IntervalType::Confidence => 0.0,
            IntervalType::Prediction => 1.0,
        }
    }
}
