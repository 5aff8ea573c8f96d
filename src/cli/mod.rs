//! Command-line parsing for the polynomial regression fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "preg",
    version,
    about = "Polynomial regression with automatic degree selection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a polynomial to a dataset, print diagnostics, and optionally plot/export.
    Fit(FitArgs),
    /// Generate a synthetic noisy polynomial dataset and write it as JSON.
    Synth(SynthArgs),
    /// Plot a previously exported fit JSON.
    Plot(PlotArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Dataset JSON file of [y, x] pairs (defaults to the bundled sample).
    #[arg(long, value_name = "JSON")]
    pub data: Option<PathBuf>,

    /// Fit this exact degree instead of searching 2..=9.
    #[arg(short = 'd', long)]
    pub degree: Option<usize>,

    /// Fail when any candidate score is non-finite instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-point residuals to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export fit (degree + coefficients + fitted grid) to JSON.
    #[arg(long = "export-fit")]
    pub export_fit: Option<PathBuf>,
}

/// Options for synthetic dataset generation.
#[derive(Debug, Parser)]
pub struct SynthArgs {
    /// Generating coefficients, ascending powers (comma separated).
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [1.0, 1.0, 1.0],
        allow_hyphen_values = true
    )]
    pub coefficients: Vec<f64>,

    /// Number of points to generate.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    /// Lower end of the x range.
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    pub x_min: f64,

    /// Upper end of the x range.
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pub x_max: f64,

    /// Standard deviation of the additive Gaussian noise.
    #[arg(long, default_value_t = 1.0)]
    pub noise: f64,

    /// Random seed (mixed with the other parameters for reproducibility).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Where to write the dataset JSON.
    #[arg(long, value_name = "JSON")]
    pub out: PathBuf,
}

/// Options for plotting a saved fit.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Fit JSON file produced by `preg fit --export-fit`.
    #[arg(long, value_name = "JSON")]
    pub fit: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
