//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - datasets and their range summaries (`Dataset`, `DatasetStats`)
//! - fit outputs (`PolyModel`, `FitQuality`, `DegreeFit`)
//! - run configuration (`FitConfig`) and the saved-fit schema (`FitFile`)

pub mod types;

pub use types::*;
