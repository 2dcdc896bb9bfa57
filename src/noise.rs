//! Injectable randomness for time-estimate jitter
//!
//! Development-time estimates carry stochastic jitter so repeated analyses
//! do not pretend to a precision the heuristic does not have. The jitter
//! source is a strategy object: production runs draw from a seeded or
//! entropy-backed RNG, deterministic runs substitute `NoNoise` and get the
//! documented base values back.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Source of jitter for heuristic estimates
///
/// Implementations must be deterministic for a fixed internal state so
/// seeded runs reproduce byte-identical results.
pub trait Noise {
    /// Sample from a normal distribution centered on zero
    fn normal(&mut self, std_dev: f64) -> f64;

    /// Sample uniformly from `[lo, hi)`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

/// Jitter policy for an analysis run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum JitterMode {
    /// Entropy-seeded jitter (default)
    Random,
    /// Reproducible jitter from a fixed seed
    Seeded(u64),
    /// No jitter at all - estimates take their base values
    Disabled,
}

impl JitterMode {
    /// Build the noise source for this mode
    pub fn build(self) -> Box<dyn Noise + Send> {
        match self {
            JitterMode::Random => Box::new(SeededNoise::from_entropy()),
            JitterMode::Seeded(seed) => Box::new(SeededNoise::new(seed)),
            JitterMode::Disabled => Box::new(NoNoise),
        }
    }
}

impl Default for JitterMode {
    fn default() -> Self {
        JitterMode::Random
    }
}

/// RNG-backed noise source
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    /// Create a noise source from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a noise source from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Noise for SeededNoise {
    fn normal(&mut self, std_dev: f64) -> f64 {
        // Box-Muller transform over two uniforms; keeps the dependency
        // surface at plain `rand`.
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen::<f64>();
        let mag = (-2.0 * u1.ln()).sqrt();
        std_dev * mag * (2.0 * std::f64::consts::PI * u2).cos()
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }
}

/// Zero-jitter source for deterministic runs
///
/// Normal samples collapse to 0.0 and uniform ranges to their lower bound,
/// so tier heuristics yield exactly their documented base values.
pub struct NoNoise;

impl Noise for NoNoise {
    fn normal(&mut self, _std_dev: f64) -> f64 {
        0.0
    }

    fn uniform(&mut self, lo: f64, _hi: f64) -> f64 {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_noise_is_zero() {
        let mut noise = NoNoise;
        assert_eq!(noise.normal(0.5), 0.0);
        assert_eq!(noise.uniform(0.3, 0.7), 0.3);
    }

    #[test]
    fn test_seeded_noise_reproducible() {
        let mut a = SeededNoise::new(42);
        let mut b = SeededNoise::new(42);
        for _ in 0..10 {
            assert_eq!(a.normal(0.5), b.normal(0.5));
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededNoise::new(1);
        let mut b = SeededNoise::new(2);
        let samples_a: Vec<f64> = (0..5).map(|_| a.uniform(0.0, 1.0)).collect();
        let samples_b: Vec<f64> = (0..5).map(|_| b.uniform(0.0, 1.0)).collect();
        assert_ne!(samples_a, samples_b);
    }

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut noise = SeededNoise::new(7);
        for _ in 0..1000 {
            let v = noise.uniform(0.5, 0.8);
            assert!(v >= 0.5 && v < 0.8);
        }
    }

    #[test]
    fn test_normal_roughly_centered() {
        let mut noise = SeededNoise::new(11);
        let n = 5000;
        let mean: f64 = (0..n).map(|_| noise.normal(0.5)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "sample mean {mean} too far from 0");
    }

    #[test]
    fn test_jitter_mode_disabled_builds_no_noise() {
        let mut noise = JitterMode::Disabled.build();
        assert_eq!(noise.normal(0.5), 0.0);
    }

    #[test]
    fn test_jitter_mode_seeded_reproducible() {
        let mut a = JitterMode::Seeded(99).build();
        let mut b = JitterMode::Seeded(99).build();
        assert_eq!(a.normal(0.5), b.normal(0.5));
    }
}
