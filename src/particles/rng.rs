use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::foundation::core::Vec2;

/// Explicit, reseedable random source shared by the particle generators and styling.
///
/// Generators never reach for thread-local randomness; the caller decides when the stream is
/// reset, which is what keeps a frame reproducible.
#[derive(Clone, Debug)]
pub struct ParticleRng {
    rng: StdRng,
}

impl ParticleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Uniform in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Uniform in `[-1, 1)`.
    pub fn symmetric(&mut self) -> f64 {
        self.uniform() * 2.0 - 1.0
    }

    /// Standard normal sample.
    pub fn gaussian(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Uniform index in `[0, n)`; `n` must be non-zero.
    pub fn index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    /// `count` indices in `[0, n)`, drawn with replacement.
    pub fn indices(&mut self, n: usize, count: usize) -> Vec<usize> {
        if n == 0 {
            return Vec::new();
        }
        (0..count).map(|_| self.index(n)).collect()
    }

    /// Independent symmetric offset per axis, scaled by `scale`.
    pub fn jitter(&mut self, scale: f64) -> Vec2 {
        let x = self.symmetric();
        let y = self.symmetric();
        Vec2::new(x, y) * scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/rng.rs"]
mod tests;
