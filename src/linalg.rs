//! Linear-algebra operations used by the regression engine.
//!
//! All decomposition work is concentrated here so the rest of the crate
//! only sees plain matrix arithmetic: the Gram matrix X'X, its inverse via
//! QR with back-substitution, a regularity (invertibility) test on the R
//! diagonal, and the quadratic form row·M·row' used for leverage.

use faer::{Col, Mat};

/// Compute the Gram matrix X'X of a design matrix.
pub fn gram(x: &Mat<f64>) -> Mat<f64> {
    x.transpose() * x
}

/// Compute X'y for a design matrix and response vector.
pub fn gram_rhs(x: &Mat<f64>, y: &Col<f64>) -> Col<f64> {
    x.transpose() * y
}

/// Check whether a square matrix is regular (invertible) at the given
/// tolerance, by inspecting the diagonal of its QR R-factor.
pub fn is_regular(m: &Mat<f64>, tolerance: f64) -> bool {
    let n = m.nrows();
    let qr: faer::linalg::solvers::Qr<f64> = m.qr();
    let r = qr.compute_r();

    (0..n).all(|i| r[(i, i)].abs() >= tolerance)
}

/// Invert a square matrix using QR decomposition with back-substitution.
///
/// Returns an error if any diagonal element of R falls below `tolerance`.
pub fn invert(m: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, &'static str> {
    let n = m.nrows();

    let qr: faer::linalg::solvers::Qr<f64> = m.qr();
    let q = qr.compute_q();
    let r = qr.compute_r();

    for i in 0..n {
        if r[(i, i)].abs() < tolerance {
            return Err("matrix is singular");
        }
    }

    // Solve R * X = Q' column by column to obtain the inverse.
    let mut inv = Mat::zeros(n, n);
    let qt = q.transpose();

    for col in 0..n {
        for i in (0..n).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..n {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    Ok(inv)
}

/// Compute the quadratic form row · M · row' for a single predictor row.
pub fn quadratic_form(row: &[f64], m: &Mat<f64>) -> f64 {
    let p = row.len();

    let mut m_row = Col::zeros(p);
    for i in 0..p {
        let mut sum = 0.0;
        for j in 0..p {
            sum += m[(i, j)] * row[j];
        }
        m_row[i] = sum;
    }

    let mut value = 0.0;
    for i in 0..p {
        value += row[i] * m_row[i];
    }

    value
}
