//! Range noise sources
//!
//! Provides Gaussian noise generation with deterministic seeding support.

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;

/// Zero-mean noise added to each range reading.
///
/// Sources hold sequential state, so a scan draws from its source one beam
/// at a time.
pub trait NoiseSource {
    /// Draw one sample with the given standard deviation.
    fn sample(&mut self, std_dev: f64) -> f64;
}

/// Gaussian noise with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    rng: SmallRng,
}

impl GaussianNoise {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }
}

impl NoiseSource for GaussianNoise {
    #[inline]
    fn sample(&mut self, std_dev: f64) -> f64 {
        if std_dev == 0.0 {
            return 0.0;
        }
        let n: f64 = self.rng.sample(StandardNormal);
        n * std_dev
    }
}

/// Noise source that always returns 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    #[inline]
    fn sample(&mut self, _std_dev: f64) -> f64 {
        0.0
    }
}
