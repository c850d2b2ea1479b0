//! Weighted categorical choice over an explicit `(value, weight)` table.

use rand::Rng;

use crate::domain::error::GenerationError;

/// A categorical distribution backed by a cumulative probability table.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    cdf: Vec<(f64, T)>,
}

impl<T: Copy> WeightedChoice<T> {
    /// Build from `(value, weight)` pairs; weights are normalized.
    ///
    /// Weights must be finite and non-negative with a positive total.
    pub fn new(pairs: &[(T, f64)]) -> Result<Self, GenerationError> {
        if pairs.is_empty() {
            return Err(GenerationError::EmptyCatalog {
                catalog: "weighted choice",
            });
        }
        if let Some((_, weight)) = pairs.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(GenerationError::InvalidDistribution {
                distribution: "weighted choice",
                reason: format!("weight {weight} is not a finite non-negative number"),
            });
        }

        let total: f64 = pairs.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(GenerationError::InvalidDistribution {
                distribution: "weighted choice",
                reason: "weights sum to zero".to_string(),
            });
        }

        let mut cumulative = 0.0;
        let cdf = pairs
            .iter()
            .map(|(value, weight)| {
                cumulative += weight / total;
                (cumulative, *value)
            })
            .collect();

        Ok(Self { cdf })
    }

    /// Draw one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let r: f64 = rng.gen();
        self.pick(r)
    }

    /// Value whose cumulative band contains `r` in `[0, 1)`.
    fn pick(&self, r: f64) -> T {
        // Rounding can leave the last bound a hair under 1.0; fall back to it.
        let last = self.cdf[self.cdf.len() - 1].1;
        self.cdf
            .iter()
            .find(|(bound, _)| r < *bound)
            .map_or(last, |(_, value)| *value)
    }
}
