//! The seeded random stream every generation step draws from.
//!
//! A `Sampler` owns its RNG; nothing in the crate touches a process-wide
//! random source, so two generators with the same seed never interfere.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::prelude::*;
use rand_distr::{LogNormal, Normal};

use crate::domain::error::GenerationError;

use super::weighted::WeightedChoice;

/// Seeded random stream with the distributions the generator needs.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler whose whole stream is determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw from a normal distribution.
    ///
    /// A negative or non-finite `std_dev` is an invalid distribution.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, GenerationError> {
        check_spread("normal", std_dev)?;
        let dist = Normal::new(mean, std_dev).map_err(|e| GenerationError::InvalidDistribution {
            distribution: "normal",
            reason: e.to_string(),
        })?;
        Ok(self.rng.sample(dist))
    }

    /// Draw from a log-normal distribution with underlying normal `(mu, sigma)`.
    pub fn log_normal(&mut self, mu: f64, sigma: f64) -> Result<f64, GenerationError> {
        check_spread("log-normal", sigma)?;
        let dist = LogNormal::new(mu, sigma).map_err(|e| GenerationError::InvalidDistribution {
            distribution: "log-normal",
            reason: e.to_string(),
        })?;
        Ok(self.rng.sample(dist))
    }

    /// Draw uniformly from a non-empty range (`a..b` or `a..=b`).
    pub fn uniform<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Pick one catalog entry with equal probability.
    pub fn choose<T: Copy>(
        &mut self,
        catalog: &'static str,
        items: &[T],
    ) -> Result<T, GenerationError> {
        items
            .choose(&mut self.rng)
            .copied()
            .ok_or(GenerationError::EmptyCatalog { catalog })
    }

    /// Pick one entry of a weighted table.
    pub fn weighted<T: Copy>(&mut self, choice: &WeightedChoice<T>) -> T {
        choice.sample(&mut self.rng)
    }
}

/// `rand_distr` accepts negative spreads; the generator does not.
fn check_spread(distribution: &'static str, spread: f64) -> Result<(), GenerationError> {
    if spread.is_finite() && spread >= 0.0 {
        Ok(())
    } else {
        Err(GenerationError::InvalidDistribution {
            distribution,
            reason: format!("spread must be finite and non-negative, got {spread}"),
        })
    }
}
