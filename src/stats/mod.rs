//! Fit statistics: sum-of-squares quantities and information criteria.

pub mod criteria;
pub mod residuals;

pub use criteria::*;
pub use residuals::*;
