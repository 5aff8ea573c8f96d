//! Data acquisition: the bundled sample series and synthetic generation.

pub mod dataset;
pub mod synth;

pub use dataset::*;
pub use synth::*;
