//! RNG module - deterministic randomness and the lookahead queue
//!
//! Spawning draws colors and shuffles empty cells from one seeded LCG, so a
//! seed fully determines a game given the same clicks.

use crate::types::{PieceColor, SPAWN_COUNT};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Uniformly random piece color
    pub fn next_color(&mut self) -> PieceColor {
        PieceColor::ALL[self.next_range(PieceColor::ALL.len() as u32) as usize]
    }

    /// Current internal state (usable as a seed to reproduce the sequence from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// The next colors to be spawned
#[derive(Debug, Clone)]
pub struct ColorQueue {
    upcoming: [PieceColor; SPAWN_COUNT],
    rng: SimpleRng,
}

impl ColorQueue {
    /// Create a new queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let upcoming = [rng.next_color(), rng.next_color()];
        Self { upcoming, rng }
    }

    /// Peek at the lookahead without consuming it
    pub fn peek(&self) -> &[PieceColor; SPAWN_COUNT] {
        &self.upcoming
    }

    /// Take the whole lookahead and regenerate a fresh one
    pub fn take(&mut self) -> [PieceColor; SPAWN_COUNT] {
        let taken = self.upcoming;
        self.upcoming = [self.rng.next_color(), self.rng.next_color()];
        taken
    }

    /// Shared RNG, also used for placement shuffles
    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    /// Get the current RNG state (for restarting with a fresh but reproducible sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ColorQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(6) < 6);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_colors_appear() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[(rng.next_color().code() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_queue_take_matches_peek() {
        let mut queue = ColorQueue::new(42);
        let peeked = *queue.peek();
        assert_eq!(queue.take(), peeked);
    }
}
