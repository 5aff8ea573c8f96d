//! Read/write dataset JSON files.
//!
//! A dataset file is a bare array of `[y, x]` pairs, dependent value first,
//! in the same shape as the bundled sample. `preg synth --out` writes this
//! format and `preg fit --data` reads it back.

use std::fs;
use std::fs::File;
use std::path::Path;

use crate::data::parse_pairs;
use crate::domain::Dataset;
use crate::error::AppError;

/// Read a `[[y, x], ...]` JSON dataset file.
pub fn read_pairs_json(path: &Path) -> Result<Dataset, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open dataset JSON '{}': {e}", path.display()),
        )
    })?;
    parse_pairs(&text)
}

/// Write a dataset as `[[y, x], ...]` JSON.
pub fn write_pairs_json(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create dataset JSON '{}': {e}", path.display()),
        )
    })?;

    let pairs: Vec<[f64; 2]> = dataset
        .y
        .iter()
        .zip(dataset.x.iter())
        .map(|(&y, &x)| [y, x])
        .collect();

    serde_json::to_writer_pretty(file, &pairs)
        .map_err(|e| AppError::new(2, format!("Failed to write dataset JSON: {e}")))?;

    Ok(())
}
