//! Sum-of-squares statistics for a fitted polynomial.
//!
//! Two variants live here:
//!
//! - [`sums_of_squares`]: the scoring variant consumed by degree selection.
//!   It sums over only the first `d + 1` samples (see its docs).
//! - [`sums_of_squares_full`]: the conventional whole-sample variant.

use crate::error::{FitError, FitResult};
use crate::math::fitted_values;

/// SSE/SST/SSR triple for one fitted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumsOfSquares {
    /// Σ (fitted[i] − mean(y))²
    pub sse: f64,
    /// Σ (y[i] − mean(y))²
    pub sst: f64,
    /// Σ (fitted[i] − y[i])²
    pub ssr: f64,
}

impl SumsOfSquares {
    /// The reported fit statistic, `sse / sst`.
    ///
    /// This is "R²-like", not the conventional R² (`1 - ssr/sst`); downstream
    /// output depends on this exact ratio, so it is not corrected here.
    pub fn ratio(&self) -> f64 {
        self.sse / self.sst
    }

    /// Conventional R², `1 - ssr/sst`. Only meaningful for the
    /// whole-sample sums from [`sums_of_squares_full`].
    pub fn r_squared(&self) -> f64 {
        1.0 - self.ssr / self.sst
    }
}

/// Compute SSE/SST/SSR over the first `coefficients.len()` samples only.
///
/// The mean of `y` is taken over the full observation set, but all three
/// sums run over indices `0..d+1`. That window looks like a bug (the loop
/// bound tracks the coefficient count rather than the sample count, so the
/// statistic reflects a tiny, degree-dependent leading slice of the data),
/// but the selection scores are defined by it and it is preserved exactly.
/// Use [`sums_of_squares_full`] for the conventional statistics.
///
/// Errors with `LengthMismatch` on unequal inputs and `Underdetermined`
/// when the window exceeds the sample count (indexing past `n` is the one
/// behavior deliberately not reproduced).
pub fn sums_of_squares(x: &[f64], y: &[f64], coefficients: &[f64]) -> FitResult<SumsOfSquares> {
    let window = coefficients.len();
    check_window(x, y, window)?;
    Ok(accumulate(x, y, coefficients, window))
}

/// Compute SSE/SST/SSR over every sample.
pub fn sums_of_squares_full(x: &[f64], y: &[f64], coefficients: &[f64]) -> FitResult<SumsOfSquares> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            len_x: x.len(),
            len_y: y.len(),
        });
    }
    Ok(accumulate(x, y, coefficients, x.len()))
}

fn check_window(x: &[f64], y: &[f64], window: usize) -> FitResult<()> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            len_x: x.len(),
            len_y: y.len(),
        });
    }
    if window > y.len() {
        return Err(FitError::Underdetermined {
            n: y.len(),
            needed: window,
        });
    }
    Ok(())
}

fn accumulate(x: &[f64], y: &[f64], coefficients: &[f64], window: usize) -> SumsOfSquares {
    let fitted = fitted_values(x, coefficients);
    let mean = y.iter().sum::<f64>() / y.len() as f64;

    let mut sse = 0.0;
    let mut sst = 0.0;
    let mut ssr = 0.0;
    for i in 0..window {
        sse += (fitted[i] - mean).powi(2);
        sst += (y[i] - mean).powi(2);
        ssr += (fitted[i] - y[i]).powi(2);
    }

    SumsOfSquares { sse, sst, ssr }
}
