//! Random number source for secrets.
//!
//! In production this wraps a real RNG. Tests inject a fixed value.
use rand::Rng;
use rand::rngs::ThreadRng;
use rand_core::RngCore;
use std::ops::RangeInclusive;

/// Provides a random integer in an inclusive range
pub trait SecretSource {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniform draws from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: RngCore> SecretSource for RngSource<R> {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Always yields the same value, clamped into the requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(pub u32);

impl SecretSource for FixedSecret {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.clamp(*range.start(), *range.end())
    }
}
