//! Read/write fit JSON files.
//!
//! Fit JSON is the portable representation of a fitted polynomial:
//! - degree + coefficients
//! - fit quality statistics
//! - a precomputed fitted grid for quick plotting
//!
//! The schema is defined by `domain::FitFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{DatasetStats, DegreeFit, FitFile, FitGrid};
use crate::error::AppError;
use crate::math::eval_poly;

/// Write a fit JSON file.
pub fn write_fit_json(path: &Path, fit: &DegreeFit, stats: &DatasetStats) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create fit JSON '{}': {e}", path.display()),
        )
    })?;

    let (x, y) = build_grid(fit, stats.x_min, stats.x_max, 101);

    let fit_file = FitFile {
        tool: "preg".to_string(),
        model: fit.model.clone(),
        quality: fit.quality.clone(),
        grid: FitGrid { x, y },
    };

    serde_json::to_writer_pretty(file, &fit_file)
        .map_err(|e| AppError::new(2, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open fit JSON '{}': {e}", path.display()),
        )
    })?;
    let fit: FitFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid fit JSON: {e}")))?;
    Ok(fit)
}

fn build_grid(fit: &DegreeFit, x_min: f64, x_max: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let n = n.max(2);
    let mut x0 = x_min;
    let mut x1 = x_max;
    if !(x0.is_finite() && x1.is_finite()) || x1 <= x0 {
        x0 = 0.0;
        x1 = 1.0;
    }
    if (x1 - x0).abs() < 1e-9 {
        x0 -= 0.5;
        x1 += 0.5;
    }

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);

    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let xv = x0 + u * (x1 - x0);
        x.push(xv);
        y.push(eval_poly(&fit.model.coefficients, xv));
    }

    (x, y)
}
