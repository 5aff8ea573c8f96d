//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Paired observations: `x` is the input, `y` the response.
///
/// Equal lengths are enforced by every fitting entry point, not by
/// construction, because datasets arrive from JSON files whose two columns
/// are only validated once, up front.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// Range summary for the report header.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A fitted polynomial. `coefficients[j]` multiplies `x^j`, so index 0 is
/// the constant term and the vector has `degree + 1` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyModel {
    pub degree: usize,
    pub coefficients: Vec<f64>,
}

/// Fit quality diagnostics retained for each candidate degree.
///
/// `ratio` is `sse/sst`, the reported fit statistic. It is not the
/// conventional R² and must not be "fixed" into one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub ratio: f64,
    pub aicc: f64,
    pub bic: f64,
    pub sse: f64,
    pub sst: f64,
    pub ssr: f64,
    pub n: usize,
}

/// Fit output for a single candidate degree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeFit {
    pub model: PolyModel,
    pub quality: FitQuality,
}

/// One observation with its fitted value (used for plots and exports).
#[derive(Debug, Clone)]
pub struct PointResidual {
    pub x: f64,
    pub y_obs: f64,
    pub y_fit: f64,
    pub residual: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Dataset JSON to fit; `None` means the bundled sample.
    pub data_path: Option<PathBuf>,
    /// Fixed polynomial degree; `None` means automatic selection.
    pub degree: Option<usize>,
    /// Fail on non-finite criterion scores instead of skipping past them.
    pub strict: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_fit: Option<PathBuf>,
}

/// A saved fit file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub model: PolyModel,
    pub quality: FitQuality,
    pub grid: FitGrid,
}

/// Precomputed fitted curve for quick re-plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
