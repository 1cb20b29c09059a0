//! RNG module - seedable randomness for the game core
//!
//! Piece selection is uniform over the seven kinds (no bag), and particle
//! velocities/colors are drawn from the same generator, so one seed
//! reproduces a whole game.

use crate::types::PieceKind;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate a float uniformly in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 bits fit exactly in an f32 mantissa.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Pick one element of a non-empty slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Pick a piece kind uniformly at random
    pub fn next_piece(&mut self) -> PieceKind {
        self.choose(&PieceKind::ALL)
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
