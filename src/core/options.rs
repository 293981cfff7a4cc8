//! Fit options and configuration.

use crate::core::error::OptionsError;

/// Configuration options for least-squares fitting.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Tolerance below which a diagonal element of the QR R-factor marks
    /// X'X as singular (default: 1e-10).
    pub singularity_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            singularity_tolerance: 1e-10,
        }
    }
}

impl RegressionOptions {
    /// Create a new builder for fit options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.singularity_tolerance.is_finite() || self.singularity_tolerance <= 0.0 {
            return Err(OptionsError::InvalidSingularityTolerance(
                self.singularity_tolerance,
            ));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singularity tolerance for the regularity test.
    pub fn singularity_tolerance(mut self, tol: f64) -> Self {
        self.options.singularity_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RegressionOptions::default();
        assert!((opts.singularity_tolerance - 1e-10).abs() < 1e-20);
    }

    #[test]
    fn test_builder() {
        let opts = RegressionOptions::builder()
            .singularity_tolerance(1e-8)
            .build()
            .unwrap();
        assert!((opts.singularity_tolerance - 1e-8).abs() < 1e-14);
    }

    #[test]
    fn test_validation_rejects_non_positive_tolerance() {
        let result = RegressionOptions::builder().singularity_tolerance(0.0).build();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidSingularityTolerance(_))
        ));
    }

    #[test]
    fn test_validation_rejects_nan_tolerance() {
        let result = RegressionOptions::builder()
            .singularity_tolerance(f64::NAN)
            .build();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidSingularityTolerance(_))
        ));
    }
}
