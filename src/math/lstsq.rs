//! Least squares solver.
//!
//! Every fit in this crate reduces to one dense problem:
//!
//! ```text
//! minimize ||X·w - y||²
//! ```
//!
//! with a tall (or, for underdetermined degrees, wide) Vandermonde `X`.
//!
//! Implementation choices:
//! - SVD rather than normal equations or inversion: Vandermonde columns
//!   become nearly collinear quickly as the degree grows, and squaring the
//!   condition number would destroy the high-degree candidates outright.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - When the system is underdetermined (rows < columns) the SVD solve
//!   yields the minimum-norm solution rather than failing.
//! - The parameter dimension is tiny (3–10 columns), so SVD cost is noise.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` for an empty system, or when the system is too
/// ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    // The SVD constructor asserts on empty matrices.
    if x.is_empty() {
        return None;
    }

    let svd = x.clone().svd(true, true);

    // Try progressively looser singular-value cutoffs if the strict solve
    // fails. High-degree Vandermonde systems routinely need the looser ones.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(w) = svd.solve(y, tol) {
            if w.iter().all(|v| v.is_finite()) {
                return Some(w);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_line() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let w = solve_least_squares(&x, &y).unwrap();
        assert!((w[0] - 2.0).abs() < 1e-10);
        assert!((w[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_overdetermined_averages_noise() {
        // Four observations of a constant: the single coefficient is the mean.
        let x = DMatrix::from_row_slice(4, 1, &[1.0, 1.0, 1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);

        let w = solve_least_squares(&x, &y).unwrap();
        assert!((w[0] - 2.5).abs() < 1e-10);
    }

    #[test]
    fn least_squares_underdetermined_returns_minimum_norm() {
        // One equation, two unknowns: w0 + w1 = 2. The minimum-norm answer
        // splits it evenly.
        let x = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[2.0]);

        let w = solve_least_squares(&x, &y).unwrap();
        assert!((w[0] - 1.0).abs() < 1e-10, "w0 = {}", w[0]);
        assert!((w[1] - 1.0).abs() < 1e-10, "w1 = {}", w[1]);
    }

    #[test]
    fn least_squares_rejects_empty_systems() {
        // Zero observations: nothing to decompose.
        let x = DMatrix::<f64>::zeros(0, 3);
        let y = DVector::<f64>::zeros(0);
        assert!(solve_least_squares(&x, &y).is_none());
    }
}
