//! Input/output helpers.
//!
//! - dataset JSON read/write (`dataset`)
//! - residual exports to CSV (`export`)
//! - fit JSON read/write (`fitfile`)

pub mod dataset;
pub mod export;
pub mod fitfile;

pub use dataset::*;
pub use export::*;
pub use fitfile::*;
