//! Information criteria for model comparison.
//!
//! Both calculators include the Gaussian log-likelihood constants
//! (`n·ln(2π) + n`), so scores are comparable across this crate but larger
//! than the "n·ln(rss/n) + penalty" short forms some texts use. Lower is
//! better for both.

/// Akaike Information Criterion.
///
/// `aic = n·ln(rss/n) + 2k + n·ln(2π) + n`, where `n` is the observation
/// count and `k` the parameter count. With `corrected`, adds the
/// small-sample term `2k(k+1) / (n − k − 1)`.
///
/// Degenerate inputs are not guarded: `rss = 0` gives −∞, and the corrected
/// form divides by zero (→ ±∞) when `n = k + 1` and goes negative when
/// `n < k + 1`. Callers relying on corrected AIC must ensure `n > k + 1`.
pub fn aic(n: usize, k: usize, rss: f64, corrected: bool) -> f64 {
    let n_f = n as f64;
    let k_f = k as f64;
    let aic = n_f * (rss / n_f).ln() + 2.0 * k_f + n_f * std::f64::consts::TAU.ln() + n_f;
    if corrected {
        // Signed arithmetic: n − k − 1 may be zero or negative.
        let correction = (2 * k * (k + 1)) as f64 / (n as i64 - k as i64 - 1) as f64;
        return aic + correction;
    }
    aic
}

/// Bayesian Information Criterion.
///
/// `bic = n·ln(rss/n) + k·ln(n) + n·ln(2π) + n`. Public utility; degree
/// selection does not consume it, but per-degree diagnostics report it.
pub fn bic(n: usize, k: usize, rss: f64) -> f64 {
    let n_f = n as f64;
    let k_f = k as f64;
    n_f * (rss / n_f).ln() + k_f * n_f.ln() + n_f * std::f64::consts::TAU.ln() + n_f
}
