//! A multiple-linear-regression engine with full classical inference.
//!
//! Fits ordinary-least-squares coefficients from a design matrix and a
//! response vector, then derives the complete battery of inferential
//! statistics: variance decomposition, R² and adjusted R², F- and
//! t-based significance tests, and leverage-widened confidence and
//! prediction intervals for new observations.
//!
//! # Example
//!
//! ```rust,ignore
//! use mlregress::prelude::*;
//!
//! // Rows carry a leading 1 for the intercept.
//! let xs = vec![vec![1.0, 28.0, 18.0], vec![1.0, 39.0, 22.0], /* ... */];
//! let ys = vec![12.4, 10.8 /* ... */];
//!
//! let fitted = mlregress::fit(&xs, &ys)?;
//!
//! println!("R² = {}", fitted.r_squared());
//! println!("estimate = {}", fitted.estimate(&[1.0, 40.0, 10.0]));
//!
//! // 95% prediction interval endpoints
//! let lower = fitted.limit(&[1.0, 40.0, 10.0], 0.025, IntervalType::Prediction);
//! let upper = fitted.limit(&[1.0, 40.0, 10.0], 0.975, IntervalType::Prediction);
//! ```

pub mod core;
pub mod distributions;
pub mod inference;
pub mod linalg;
pub mod model;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Dataset, FitSummary, IntervalType, OptionsError, RegressionError, RegressionOptions,
        RegressionOptionsBuilder,
    };
    pub use crate::model::{fit, FittedModel, LeastSquares, LeastSquaresBuilder};
}

pub use crate::core::{
    Dataset, FitSummary, IntervalType, OptionsError, RegressionError, RegressionOptions,
    RegressionOptionsBuilder,
};
pub use crate::model::{fit, FittedModel, LeastSquares, LeastSquaresBuilder};
