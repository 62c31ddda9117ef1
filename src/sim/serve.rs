//! Serve direction providers
//!
//! A serve is always diagonal: each axis gets a sign of +1 or -1.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the diagonal direction used whenever the ball is re-served
pub trait ServeDirection {
    /// Returns `(x_sign, y_sign)`, each exactly `1.0` or `-1.0`
    fn next_signs(&mut self) -> (f32, f32);
}

/// Seeded random serves (reproducible for a given seed)
#[derive(Debug, Clone)]
pub struct SeededServe {
    seed: u64,
    rng: Pcg32,
}

impl SeededServe {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ServeDirection for SeededServe {
    fn next_signs(&mut self) -> (f32, f32) {
        let sx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        (sx, sy)
    }
}

/// Always serves in the same direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedServe {
    pub x_sign: f32,
    pub y_sign: f32,
}

impl FixedServe {
    /// Signs are normalized to +1/-1; zero counts as positive
    pub fn new(x_sign: f32, y_sign: f32) -> Self {
        Self {
            x_sign: if x_sign < 0.0 { -1.0 } else { 1.0 },
            y_sign: if y_sign < 0.0 { -1.0 } else { 1.0 },
        }
    }
}

impl Default for FixedServe {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl ServeDirection for FixedServe {
    fn next_signs(&mut self) -> (f32, f32) {
        (self.x_sign, self.y_sign)
    }
}
