//! Deterministic linear congruential generator
//!
//! Classic `rand()`-style LCG: `seed = seed * 1103515245 + 12345 (mod 2^32)`,
//! with draws taken from bits 16..31 of the new seed.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SEED;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// Largest value returned by [`Lcg::next`]
pub const LCG_MAX: u32 = 32_767;

/// Session-owned PRNG. Same seed and call sequence, same stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    seed: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Current internal state
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advance the generator and return the raw 32-bit state
    #[inline]
    fn step(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Next draw in `[0, 32767]`
    #[inline]
    pub fn next(&mut self) -> u32 {
        (self.step() / 65_536) % (LCG_MAX + 1)
    }

    /// `next() % modulus`, the form every gameplay roll uses
    #[inline]
    pub fn next_mod(&mut self, modulus: u32) -> u32 {
        self.next() % modulus
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
