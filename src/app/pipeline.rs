//! Shared "fit pipeline" logic behind the `preg fit` subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load data -> fit/search -> selection -> residuals
//!
//! The CLI front-end can then focus on presentation (printing and exports).

use crate::data::{bundled_dataset, compute_stats};
use crate::domain::{Dataset, DatasetStats, DegreeFit, FitConfig, FitQuality, PointResidual};
use crate::error::AppError;
use crate::fit::fitter::fit_fixed_degree;
use crate::fit::selection::{select_degree, DegreeSelection, SelectOptions};
use crate::stats::{aic, bic, sums_of_squares, sums_of_squares_full, SumsOfSquares};

/// All computed outputs of a single `preg fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub stats: DatasetStats,
    pub selection: DegreeSelection,
    /// Conventional whole-sample sums for the chosen model.
    pub full: SumsOfSquares,
    pub residuals: Vec<PointResidual>,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Load the dataset (bundled sample unless a file was given).
    let dataset = match &config.data_path {
        Some(path) => crate::io::read_pairs_json(path)?,
        None => bundled_dataset()?,
    };

    // 2) Summarize it for display.
    let stats = compute_stats(&dataset)
        .ok_or_else(|| AppError::new(3, "Dataset is empty; nothing to fit."))?;

    // 3) Fit: either the automatic degree search or one fixed degree.
    let selection = match config.degree {
        None => select_degree(
            &dataset.x,
            &dataset.y,
            &SelectOptions {
                strict: config.strict,
            },
        )?,
        Some(degree) => fixed_degree_selection(&dataset, degree)?,
    };

    // 4) Conventional full-sample stats for the report.
    let full = sums_of_squares_full(&dataset.x, &dataset.y, &selection.best.model.coefficients)?;

    // 5) Residuals for plotting/export.
    let residuals = crate::report::compute_residuals(&dataset, &selection.best.model)?;

    Ok(RunOutput {
        dataset,
        stats,
        selection,
        full,
        residuals,
    })
}

/// Fit one requested degree and wrap it as a single-candidate selection so
/// downstream reporting stays uniform with the automatic search.
fn fixed_degree_selection(dataset: &Dataset, degree: usize) -> Result<DegreeSelection, AppError> {
    let model = fit_fixed_degree(&dataset.x, &dataset.y, degree)?;
    let sums = sums_of_squares(&dataset.x, &dataset.y, &model.coefficients)?;

    let n = dataset.len();
    let fit = DegreeFit {
        model,
        quality: FitQuality {
            ratio: sums.ratio(),
            aicc: aic(n, degree, sums.ssr, true),
            bic: bic(n, degree, sums.ssr),
            sse: sums.sse,
            sst: sums.sst,
            ssr: sums.ssr,
            n,
        },
    };

    Ok(DegreeSelection {
        best: fit.clone(),
        fits: vec![fit],
        skipped: Vec::new(),
    })
}
