//! Injectable uniform random source.
//!
//! Every action that draws random parameters takes a `&mut dyn RandomSource`
//! so tests can replace the generator with a fixed sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }

    /// Vector whose components are each drawn from `[min, max)`.
    fn vec3(&mut self, min: f32, max: f32) -> Vec3 {
        let x = self.range(min, max);
        let y = self.range(min, max);
        let z = self.range(min, max);
        Vec3::new(x, y, z)
    }
}

/// Production source backed by [`StdRng`].
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Deterministic generator for reproducible runs.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5EED);
        log::debug!("StdRandom seeded with {seed:#x}");
        Self::from_seed(seed)
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RandomSource for StdRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.random_range(0.0..1.0f32)
    }
}

/// Replays a fixed sequence, cycling when exhausted.
///
/// An empty sequence behaves as a constant `0.5`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always yields `value`.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
