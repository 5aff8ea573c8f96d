//! Polynomial fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit a single fixed degree (`fitter`)
//! - evaluate every candidate degree in parallel and pick the AICc winner
//!   (`selection`)

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
