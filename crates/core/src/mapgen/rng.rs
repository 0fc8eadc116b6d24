//! Uniform random draws for generation, backed by a per-run ChaCha stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Source of the uniform draws every generation step consumes.
///
/// Each run owns its source; nothing is shared between runs.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform integer in `[low, high)`. The range must be non-empty.
    fn range(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low < high);
        low + self.below(high - low)
    }
}

pub struct TileRng {
    rng: ChaCha8Rng,
}

impl TileRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for TileRng {
    fn next_unit(&mut self) -> f64 {
        // 53 high bits fill the f64 mantissa exactly.
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        let bound = bound as u64;
        // Reject the tail that would bias the modulo.
        let zone = u64::MAX - (u64::MAX - bound + 1) % bound;
        loop {
            let value = self.rng.next_u64();
            if value <= zone {
                return (value % bound) as usize;
            }
        }
    }
}
