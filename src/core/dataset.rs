//! Dataset ingestion: validation and materialization of the design
//! matrix X and response vector y.

use crate::core::error::RegressionError;
use faer::{Col, Mat};

/// An immutable regression dataset: the design matrix X (n rows of p
/// predictors each) and the response vector y (length n).
///
/// Construction is the only mutation point in a model's lifetime; once a
/// `Dataset` exists its contents never change.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Mat<f64>,
    y: Col<f64>,
}

impl Dataset {
    /// Build a dataset from predictor rows and scalar responses.
    ///
    /// Each predictor row must have the same width (including an intercept
    /// column of 1s if the model wants an intercept), and the number of
    /// rows must equal the number of responses.
    pub fn from_rows<R: AsRef<[f64]>>(xs: &[R], ys: &[f64]) -> Result<Self, RegressionError> {
        if xs.len() != ys.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: xs.len(),
                y_rows: ys.len(),
            });
        }

        let width = xs.first().map_or(0, |row| row.as_ref().len());
        for (i, row) in xs.iter().enumerate() {
            let got = row.as_ref().len();
            if got != width {
                return Err(RegressionError::RaggedRows {
                    row: i,
                    expected: width,
                    got,
                });
            }
        }

        let x = Mat::from_fn(xs.len(), width, |i, j| xs[i].as_ref()[j]);
        let y = Col::from_fn(ys.len(), |i| ys[i]);

        Ok(Self { x, y })
    }

    /// Build a dataset from already-materialized faer matrices, applying
    /// the same row-count validation as [`Dataset::from_rows`].
    pub fn from_parts(x: Mat<f64>, y: Col<f64>) -> Result<Self, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_rows: y.nrows(),
            });
        }
        Ok(Self { x, y })
    }

    /// The design matrix X.
    pub fn x(&self) -> &Mat<f64> {
        &self.x
    }

    /// The response vector y.
    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Number of observations n.
    pub fn n_observations(&self) -> usize {
        self.x.nrows()
    }

    /// Number of parameters p (columns of X, intercept included).
    pub fn n_parameters(&self) -> usize {
        self.x.ncols()
    }

    /// One predictor row as a plain slice-backed vector.
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.x.ncols()).map(|j| self.x[(i, j)]).collect()
    }
}
