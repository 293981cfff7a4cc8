//! Core types for regression analysis.

mod dataset;
mod error;
mod interval;
mod options;
mod summary;

pub use dataset::Dataset;
pub use error::{OptionsError, RegressionError};
pub use interval::IntervalType;
pub use options::{RegressionOptions, RegressionOptionsBuilder};
pub use summary::FitSummary;
