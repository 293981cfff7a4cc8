//! Inference calculations: leverage-widened intervals and significance
//! tests built on the t- and F-distributions.

mod intervals;
mod significance;

pub use intervals::{distance_value, half_width, penalized_standard_error, penalty_factor};
pub use significance::{coefficient_significance, model_significance};
