//! Polynomial basis construction and evaluation.
//!
//! The fitter relies on two primitive operations:
//! - build the Vandermonde design matrix for a given input vector and degree
//! - evaluate a fitted polynomial at the input points
//!
//! Coefficients are always ordered ascending: `coefficients[j]` multiplies
//! `x^j`, so index 0 is the constant term and a degree-`d` polynomial has
//! `d + 1` coefficients.

use nalgebra::DMatrix;

/// Build the n×(d+1) Vandermonde matrix for `x` and `degree`.
///
/// Entry (i, j) is `x[i]^j`, with `x^0 = 1` for every x including zero.
/// Built fresh per fit attempt; callers never cache it across degrees.
pub fn vandermonde(x: &[f64], degree: usize) -> DMatrix<f64> {
    let cols = degree + 1;
    DMatrix::from_fn(x.len(), cols, |i, j| x[i].powi(j as i32))
}

/// Evaluate the polynomial at a single point.
///
/// Summation runs over ascending powers, matching a design-row dot product.
/// This is deliberately not Horner's rule: fitted values must reproduce the
/// same floating-point accumulation as `vandermonde(x, d) * w`.
pub fn eval_poly(coefficients: &[f64], x: f64) -> f64 {
    let mut acc = 0.0;
    for (j, &c) in coefficients.iter().enumerate() {
        acc += x.powi(j as i32) * c;
    }
    acc
}

/// Evaluate the polynomial at every input point.
pub fn fitted_values(x: &[f64], coefficients: &[f64]) -> Vec<f64> {
    x.iter().map(|&v| eval_poly(coefficients, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vandermonde_degree_zero_is_all_ones() {
        let x = [0.0, 1.5, -2.0, 7.0];
        let m = vandermonde(&x, 0);
        assert_eq!(m.nrows(), 4);
        assert_eq!(m.ncols(), 1);
        for i in 0..4 {
            assert_eq!(m[(i, 0)], 1.0, "row {i} should be 1");
        }
    }

    #[test]
    fn vandermonde_entries_are_ascending_powers() {
        let x = [2.0, 3.0];
        let m = vandermonde(&x, 3);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 4);
        let row0: Vec<f64> = (0..4).map(|j| m[(0, j)]).collect();
        let row1: Vec<f64> = (0..4).map(|j| m[(1, j)]).collect();
        assert_eq!(row0, vec![1.0, 2.0, 4.0, 8.0]);
        assert_eq!(row1, vec![1.0, 3.0, 9.0, 27.0]);
    }

    #[test]
    fn vandermonde_zero_input_keeps_unit_constant_column() {
        let m = vandermonde(&[0.0], 2);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m[(0, 2)], 0.0);
    }

    #[test]
    fn eval_poly_matches_design_row_product() {
        let w = [1.0, 1.0, 1.0];
        assert_eq!(eval_poly(&w, 0.0), 1.0);
        assert_eq!(eval_poly(&w, 2.0), 7.0);
        assert_eq!(eval_poly(&w, 4.0), 21.0);
    }

    #[test]
    fn fitted_values_maps_every_point() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let w = [1.0, 1.0, 1.0];
        assert_eq!(fitted_values(&x, &w), vec![1.0, 3.0, 7.0, 13.0, 21.0]);
    }
}
