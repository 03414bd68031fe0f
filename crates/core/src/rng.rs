//! RNG module - injectable random source
//!
//! Every random draw the engine makes (generation, refill, reshuffle, forced
//! fix) goes through [`RandomSource`], so a seeded source replays a game
//! exactly. [`SimpleRng`] is the default deterministic implementation.

use crate::types::{Palette, Tag};

/// Source of uniformly distributed `u32` values
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max). An empty range yields 0.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; use the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Draw a uniformly random tag from `palette`.
pub fn random_tag<R: RandomSource + ?Sized>(rng: &mut R, palette: Palette) -> Tag {
    palette.tag(rng.next_range(palette.size() as u32))
}
