//! Seeded random source for blip placement

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::time::{SystemTime, UNIX_EPOCH};

/// PCG-backed random source
///
/// Seeded once per process; never reseeded mid-session.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: Pcg32,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the wall clock so runs don't replay
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in [0, 1)
    pub fn uniform(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// +1.0 or -1.0 with equal probability
    pub fn sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    /// `uniform() * sign()`, a value in (-1, 1)
    pub fn signed_unit(&mut self) -> f32 {
        self.uniform() * self.sign()
    }
}
