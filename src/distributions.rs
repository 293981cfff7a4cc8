//! Distribution functions used for interval estimation and significance
//! testing: the Student-t CDF and quantile, and the F-distribution CDF.
//!
//! Out-of-domain parameters (non-positive degrees of freedom) yield NaN
//! rather than an error, so downstream comparisons simply fail closed.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Student-t cumulative distribution function at `x` with `df` degrees of
/// freedom.
pub fn students_t_cdf(x: f64, df: f64) -> f64 {
    StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.cdf(x))
}

/// Student-t quantile (inverse CDF) at tail probability `p` with `df`
/// degrees of freedom. Probabilities below 0.5 yield negative quantiles.
pub fn students_t_quantile(p: f64, df: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.inverse_cdf(p))
}

/// F-distribution cumulative distribution function at `x` with `df1`
/// numerator and `df2` denominator degrees of freedom.
pub fn fisher_f_cdf(x: f64, df1: f64, df2: f64) -> f64 {
    FisherSnedecor::new(df1, df2).map_or(f64::NAN, |d| d.cdf(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_cdf_at_zero() {
        assert!((students_t_cdf(0.0, 5.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_t_cdf_symmetry() {
        let upper = students_t_cdf(1.7, 8.0);
        let lower = students_t_cdf(-1.7, 8.0);
        assert!((upper + lower - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_t_quantile_round_trip() {
        let q = students_t_quantile(0.975, 5.0);
        // qt(0.975, 5) in R
        assert!((q - 2.570581835636197).abs() < 1e-7);
        assert!((students_t_cdf(q, 5.0) - 0.975).abs() < 1e-8);
    }

    #[test]
    fn test_t_quantile_low_tail_is_negative() {
        assert!(students_t_quantile(0.025, 5.0) < 0.0);
    }

    #[test]
    fn test_invalid_df_yields_nan() {
        assert!(students_t_cdf(1.0, 0.0).is_nan());
        assert!(students_t_quantile(0.5, -1.0).is_nan());
        assert!(fisher_f_cdf(1.0, 0.0, 5.0).is_nan());
    }

    #[test]
    fn test_f_cdf_monotone() {
        let low = fisher_f_cdf(1.0, 2.0, 5.0);
        let high = fisher_f_cdf(10.0, 2.0, 5.0);
        assert!(high > low);
        assert!((0.0..=1.0).contains(&low));
        assert!((0.0..=1.0).contains(&high));
    }
}
