//! RNG module - injectable randomness for piece spawning
//!
//! Spawning draws three uniform values per piece (kind, rotation, column).
//! The source is pluggable through [`Randomizer`]:
//!
//! - [`SimpleRng`]: seeded LCG, the default. Same seed, same game.
//! - [`ScriptedRng`]: replays a fixed sequence, for tests and replays.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform random integers
pub trait Randomizer {
    /// Generate a value in `[0, max)`. `max` is always at least 1.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
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

    /// Create a new RNG seeded from the system clock
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Randomizer for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the wall clock (seconds xor sub-second nanos)
pub fn time_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested range, so a script written for
/// the spawn order (kind, rotation, column) reproduces exact spawns.
///
/// # Examples
///
/// ```
/// use tiny_tetris_core::rng::{Randomizer, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([2, 0, 4]);
/// assert_eq!(rng.next_range(7), 2);
/// assert_eq!(rng.next_range(4), 0);
/// assert_eq!(rng.next_range(9), 4);
/// assert_eq!(rng.next_range(7), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            pos: 0,
        }
    }
}

impl Randomizer for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let Some(&v) = self.values.get(self.pos) else {
            return 0;
        };
        self.pos = (self.pos + 1) % self.values.len();
        v % max.max(1)
    }
}
