//! Synthetic dataset generation from a known polynomial.
//!
//! Draws x uniformly over a range, evaluates the generating polynomial and
//! adds Gaussian noise. Useful for exercising the fitter against data whose
//! ground truth is known.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::Dataset;
use crate::error::AppError;
use crate::math::eval_poly;

/// Parameters for synthetic data generation.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Generating coefficients, ascending powers.
    pub coefficients: Vec<f64>,
    /// Number of points to draw.
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Standard deviation of the additive noise.
    pub noise_sigma: f64,
    /// User-facing seed; mixed with the other parameters below.
    pub seed: u64,
}

/// Generate a noisy sample of the configured polynomial.
///
/// Generation is deterministic: the same config always produces the same
/// dataset, and any parameter change (not just the seed) reshuffles it.
pub fn generate_synthetic(config: &SynthConfig) -> Result<Dataset, AppError> {
    if config.coefficients.is_empty() {
        return Err(AppError::new(2, "At least one coefficient is required."));
    }
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if !(config.noise_sigma.is_finite() && config.noise_sigma >= 0.0) {
        return Err(AppError::new(2, "Invalid noise sigma setting."));
    }

    let mut rng = StdRng::seed_from_u64(synth_seed(config));
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut x = Vec::with_capacity(config.count);
    let mut y = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let xv = rng.gen_range(config.x_min..=config.x_max);
        let z: f64 = normal.sample(&mut rng);
        x.push(xv);
        y.push(eval_poly(&config.coefficients, xv) + config.noise_sigma * z);
    }

    Ok(Dataset { x, y })
}

fn synth_seed(config: &SynthConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    for c in &config.coefficients {
        c.to_bits().hash(&mut hasher);
    }
    config.count.hash(&mut hasher);
    config.x_min.to_bits().hash(&mut hasher);
    config.x_max.to_bits().hash(&mut hasher);
    config.noise_sigma.to_bits().hash(&mut hasher);
    config.seed.hash(&mut hasher);
    hasher.finish()
}
