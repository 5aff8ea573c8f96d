//! Automatic degree selection.
//!
//! Every candidate degree in `DEGREE_MIN..=DEGREE_MAX` is fitted and scored
//! with the corrected AIC; the lowest score wins. Candidates are independent,
//! so the fits run in parallel, but the winner scan itself is sequential over
//! the degree-ordered results and therefore deterministic.

use rayon::prelude::*;

use crate::domain::{DegreeFit, FitQuality};
use crate::error::{FitError, FitResult};
use crate::fit::fitter::fit_fixed_degree;
use crate::stats::{aic, bic, sums_of_squares};

/// Smallest candidate degree tried by the automatic search.
pub const DEGREE_MIN: usize = 2;
/// Largest candidate degree tried by the automatic search.
pub const DEGREE_MAX: usize = 9;

/// Knobs for the degree search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOptions {
    /// Fail with `NumericDegenerate` when any scored candidate has a
    /// non-finite AICc, instead of letting it lose the comparison silently.
    pub strict: bool,
}

/// Result of the automatic search: the winner plus everything it beat.
#[derive(Debug, Clone)]
pub struct DegreeSelection {
    /// The candidate with the lowest AICc.
    pub best: DegreeFit,
    /// All candidates that produced a score, ascending by degree.
    pub fits: Vec<DegreeFit>,
    /// Degrees that could not be fitted or scored, with the reason.
    pub skipped: Vec<(usize, String)>,
}

/// Fit every candidate degree and pick the one with the lowest AICc.
///
/// Skipped degrees are diagnostics, not errors: as long as one candidate
/// scores finitely the search succeeds. If no candidate can win (everything
/// skipped, or every score non-finite) the error carries the per-degree
/// reasons so callers can print them.
pub fn select_degree(x: &[f64], y: &[f64], opts: &SelectOptions) -> FitResult<DegreeSelection> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            len_x: x.len(),
            len_y: y.len(),
        });
    }

    // `collect` keeps degree order regardless of which thread finished first.
    let outcomes: Vec<Result<DegreeFit, (usize, String)>> = (DEGREE_MIN..=DEGREE_MAX)
        .into_par_iter()
        .map(|degree| evaluate_degree(x, y, degree))
        .collect();

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(fit) => fits.push(fit),
            Err(entry) => skipped.push(entry),
        }
    }

    if opts.strict {
        if let Some(fit) = fits.iter().find(|f| !f.quality.aicc.is_finite()) {
            return Err(FitError::NumericDegenerate {
                degree: fit.model.degree,
                score: fit.quality.aicc,
            });
        }
    }

    // Strict `<` against a MAX sentinel: NaN and +inf scores never win, and
    // the earliest degree keeps an exact tie.
    let mut criterion = f64::MAX;
    let mut best_idx = None;
    for (i, fit) in fits.iter().enumerate() {
        if fit.quality.aicc < criterion {
            criterion = fit.quality.aicc;
            best_idx = Some(i);
        }
    }

    let Some(best_idx) = best_idx else {
        let mut reasons = skipped;
        for fit in &fits {
            reasons.push((
                fit.model.degree,
                format!("non-finite AICc score: {}", fit.quality.aicc),
            ));
        }
        return Err(FitError::NoViableDegree { reasons });
    };

    Ok(DegreeSelection {
        best: fits[best_idx].clone(),
        fits,
        skipped,
    })
}

/// Fit and score a single candidate degree.
fn evaluate_degree(x: &[f64], y: &[f64], degree: usize) -> Result<DegreeFit, (usize, String)> {
    let n = y.len();
    // The residual window reads y[0..=degree]; shorter samples cannot be
    // scored at this degree.
    if n < degree + 1 {
        return Err((degree, format!("underdetermined: n={n} < {}", degree + 1)));
    }

    let model = fit_fixed_degree(x, y, degree).map_err(|e| (degree, e.to_string()))?;
    let sums = sums_of_squares(x, y, &model.coefficients).map_err(|e| (degree, e.to_string()))?;

    // k = degree, not degree + 1. Scores are only compared with each other,
    // so the parameter-count convention just has to be uniform across
    // candidates.
    let aicc = aic(n, degree, sums.ssr, true);
    let bic = bic(n, degree, sums.ssr);

    Ok(DegreeFit {
        model,
        quality: FitQuality {
            ratio: sums.ratio(),
            aicc,
            bic,
            sse: sums.sse,
            sst: sums.sst,
            ssr: sums.ssr,
            n,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled_dataset;

    fn quadratic_sample(n: usize) -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&v| 1.0 + v + v * v).collect();
        (x, y)
    }

    #[test]
    fn mismatched_lengths_are_rejected_up_front() {
        let err = select_degree(&[1.0, 2.0], &[1.0], &SelectOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::LengthMismatch { len_x: 2, len_y: 1 }));
    }

    #[test]
    fn winner_has_between_three_and_ten_coefficients() {
        let (x, y) = quadratic_sample(21);
        let selection = select_degree(&x, &y, &SelectOptions::default()).unwrap();

        let len = selection.best.model.coefficients.len();
        assert!(
            (3..=10).contains(&len),
            "winner must carry 3..=10 coefficients, got {len}"
        );
        assert_eq!(selection.best.model.degree + 1, len);
        assert_eq!(selection.fits.len() + selection.skipped.len(), 8);
    }

    #[test]
    fn candidates_stay_in_degree_order() {
        let (x, y) = quadratic_sample(21);
        let selection = select_degree(&x, &y, &SelectOptions::default()).unwrap();

        let degrees: Vec<usize> = selection.fits.iter().map(|f| f.model.degree).collect();
        let mut sorted = degrees.clone();
        sorted.sort_unstable();
        assert_eq!(degrees, sorted, "parallel evaluation must not reorder fits");
    }

    #[test]
    fn short_samples_skip_high_degrees_but_still_select() {
        // n = 5 can only score degrees 2..=4; 5..=9 must land in `skipped`.
        let (x, y) = quadratic_sample(5);
        let selection = select_degree(&x, &y, &SelectOptions::default()).unwrap();

        assert_eq!(selection.skipped.len(), 5);
        for (degree, reason) in &selection.skipped {
            assert!(
                (5..=9).contains(degree),
                "degree {degree} should not have been skipped"
            );
            assert!(
                reason.contains("underdetermined"),
                "unexpected skip reason: {reason}"
            );
        }
        assert!((2..=4).contains(&selection.best.model.degree));
    }

    #[test]
    fn three_points_leave_no_viable_degree() {
        // Degree 2 scores +inf (the AICc correction divides by n - k - 1 = 0)
        // and every higher degree is underdetermined, so nothing can win.
        let x = [0.0, 1.0, 2.0];
        let y = [1.1, 2.9, 7.2];

        let err = select_degree(&x, &y, &SelectOptions::default()).unwrap_err();
        match err {
            FitError::NoViableDegree { reasons } => {
                assert_eq!(reasons.len(), 8, "one reason per candidate degree");
            }
            other => panic!("expected NoViableDegree, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_scores_lose_instead_of_winning() {
        // n = 4: degree 3 fits but its AICc correction divides by zero, so
        // only degree 2 can win.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.1, 3.2, 6.9, 13.3];

        let selection = select_degree(&x, &y, &SelectOptions::default()).unwrap();
        assert_eq!(selection.best.model.degree, 2);

        let degenerate = selection
            .fits
            .iter()
            .find(|f| f.model.degree == 3)
            .expect("degree 3 should have been fitted and scored");
        assert!(!degenerate.quality.aicc.is_finite());
    }

    #[test]
    fn strict_mode_rejects_non_finite_scores() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.1, 3.2, 6.9, 13.3];

        let err = select_degree(&x, &y, &SelectOptions { strict: true }).unwrap_err();
        assert!(matches!(err, FitError::NumericDegenerate { degree: 3, .. }));
    }

    #[test]
    fn bundled_dataset_selection_is_deterministic() {
        let dataset = bundled_dataset().unwrap();

        let a = select_degree(&dataset.x, &dataset.y, &SelectOptions::default()).unwrap();
        let b = select_degree(&dataset.x, &dataset.y, &SelectOptions::default()).unwrap();

        assert!((DEGREE_MIN..=DEGREE_MAX).contains(&a.best.model.degree));
        assert_eq!(
            a.best.model.coefficients.len(),
            a.best.model.degree + 1,
            "coefficient count must track the chosen degree"
        );

        assert_eq!(a.best.model.degree, b.best.model.degree);
        assert_eq!(a.best.model.coefficients, b.best.model.coefficients);
        assert_eq!(
            a.best.quality.ratio.to_bits(),
            b.best.quality.ratio.to_bits(),
            "repeat runs must agree bit for bit"
        );
        assert_eq!(a.skipped, b.skipped);
    }
}
