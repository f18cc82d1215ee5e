//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces the same shuffle order, so
//!   tests can assert on exact outcomes
//! - **Uniform**: shuffling is a single Fisher-Yates pass over the slice,
//!   every permutation equally likely
//! - **Entropy-seeded by default**: production sessions draw their seed from
//!   the OS
//!
//! ## Usage
//!
//! ```
//! use flashdeck::core::DeckRng;
//!
//! let mut rng = DeckRng::seeded(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut cards);
//!
//! // Same seed, same permutation.
//! let mut rng2 = DeckRng::seeded(42);
//! let mut cards2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut cards2);
//! assert_eq!(cards, cards2);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffle RNG for a study session.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
}

impl DeckRng {
    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create an RNG with a fixed seed.
    ///
    /// The same seed always produces the same shuffle sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place with a uniform permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_determinism() {
        let mut rng1 = DeckRng::seeded(42);
        let mut rng2 = DeckRng::seeded(42);

        let mut a: Vec<u32> = (0..100).collect();
        let mut b: Vec<u32> = (0..100).collect();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = DeckRng::seeded(1);
        let mut rng2 = DeckRng::seeded(2);

        let mut a: Vec<u32> = (0..100).collect();
        let mut b: Vec<u32> = (0..100).collect();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = DeckRng::seeded(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (overwhelmingly likely at n=10)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut rng = DeckRng::seeded(7);

        let mut empty: Vec<u32> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }
}
