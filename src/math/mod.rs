//! Mathematical utilities: polynomial basis and least squares.

pub mod lstsq;
pub mod poly;

pub use lstsq::*;
pub use poly::*;
