//! Low-level fitting for a single polynomial degree.
//!
//! Given `x`, `y` and a degree `d`, we build the Vandermonde design matrix
//! and solve the least-squares system for the `d + 1` coefficients. The
//! matrix is rebuilt per call; nothing is cached across degrees.

use nalgebra::DVector;

use crate::domain::PolyModel;
use crate::error::{FitError, FitResult};
use crate::math::{solve_least_squares, vandermonde};

/// Fit a polynomial of fixed degree by least squares.
///
/// The returned coefficients are ascending (`coefficients[j]` multiplies
/// `x^j`) and always have exactly `degree + 1` entries.
///
/// When `0 < n < degree + 1` the system is underdetermined; the SVD solve
/// then yields the minimum-norm solution rather than an error. Empty input
/// is rejected as `Underdetermined` up front: with no rows there is no
/// system to solve. Degenerate inputs that defeat every solver tolerance
/// surface as `SolveFailed`.
pub fn fit_fixed_degree(x: &[f64], y: &[f64], degree: usize) -> FitResult<PolyModel> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            len_x: x.len(),
            len_y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(FitError::Underdetermined {
            n: 0,
            needed: degree + 1,
        });
    }

    let design = vandermonde(x, degree);
    let rhs = DVector::from_column_slice(y);

    let solution = solve_least_squares(&design, &rhs).ok_or(FitError::SolveFailed { degree })?;

    Ok(PolyModel {
        degree,
        coefficients: solution.iter().copied().collect(),
    })
}
