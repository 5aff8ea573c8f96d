//! Reporting utilities: residuals and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Dataset, DatasetStats, FitConfig, PointResidual, PolyModel};
use crate::error::AppError;
use crate::fit::selection::{DegreeSelection, DEGREE_MAX, DEGREE_MIN};
use crate::math::eval_poly;
use crate::stats::SumsOfSquares;

/// Compute fitted values and residuals for each observation.
pub fn compute_residuals(
    dataset: &Dataset,
    model: &PolyModel,
) -> Result<Vec<PointResidual>, AppError> {
    let mut out = Vec::with_capacity(dataset.len());
    for (&x, &y_obs) in dataset.x.iter().zip(dataset.y.iter()) {
        let y_fit = eval_poly(&model.coefficients, x);
        if !y_fit.is_finite() {
            return Err(AppError::new(
                4,
                "Non-finite model prediction during residual computation.",
            ));
        }
        out.push(PointResidual {
            x,
            y_obs,
            y_fit,
            residual: y_obs - y_fit,
        });
    }
    Ok(out)
}

/// Format the full run summary (dataset stats + degree diagnostics + chosen model).
pub fn format_run_summary(
    stats: &DatasetStats,
    selection: &DegreeSelection,
    full: &SumsOfSquares,
    config: &FitConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== preg - Polynomial Regression Fit ===\n");
    match &config.data_path {
        Some(path) => out.push_str(&format!("Data: {}\n", path.display())),
        None => out.push_str("Data: bundled sample\n"),
    }
    match config.degree {
        Some(d) => out.push_str(&format!("Degree: fixed ({d})\n")),
        None => out.push_str(&format!(
            "Degree: auto (AICc over {DEGREE_MIN}..={DEGREE_MAX})\n"
        )),
    }
    out.push_str(&format!(
        "Points: n={} | x=[{:.3}, {:.3}] | y=[{:.2}, {:.2}]\n",
        stats.n_points, stats.x_min, stats.x_max, stats.y_min, stats.y_max
    ));

    out.push_str("\nDegree diagnostics:\n");
    for fit in &selection.fits {
        let chosen = if fit.model.degree == selection.best.model.degree {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{chosen} d={} ratio={:.6} AICc={:.3} BIC={:.3}\n",
            fit.model.degree, fit.quality.ratio, fit.quality.aicc, fit.quality.bic
        ));
    }
    for (degree, reason) in &selection.skipped {
        out.push_str(&format!("  (skipped d={degree}) {reason}\n"));
    }

    out.push_str("\nChosen model:\n");
    out.push_str(&format!("- degree: {}\n", selection.best.model.degree));
    out.push_str(&format!(
        "- coefficients: {}\n",
        fmt_vec(&selection.best.model.coefficients)
    ));
    out.push_str(&format!(
        "- ratio (SSE/SST over the fit window): {:.6}\n",
        selection.best.quality.ratio
    ));
    out.push_str(&format!(
        "- full sample: R²={:.6} | SSE={:.3} | SST={:.3} (n={})\n",
        full.r_squared(),
        full.sse,
        full.sst,
        selection.best.quality.n
    ));
    out.push('\n');

    out
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
