//! Permutation sources for the draw.
//!
//! Both generators shuffle part of the field before pairing. The shuffle is
//! injected so a draw can be reproduced: production code uses
//! [`RandomShuffler::new`], tests use [`RandomShuffler::seeded`] or
//! [`FixedOrder`].

use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng, seq::SliceRandom};

/// Something that can permute a slice in place.
pub trait Shuffler {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<S: Shuffler + ?Sized> Shuffler for &mut S {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}

/// Uniform random permutation backed by any [`Rng`].
pub struct RandomShuffler<R = ThreadRng> {
    /// Random number generator
    rng: R,
}

impl RandomShuffler<ThreadRng> {
    /// Create a shuffler over the thread-local generator
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomShuffler<StdRng> {
    /// Create a reproducible shuffler
    ///
    /// # Arguments
    ///
    /// * `seed` - Same seed and same input give the same permutations
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomShuffler<R> {
    /// Wrap an existing generator
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomShuffler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Identity permutation. Leaves input order untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedOrder;

impl Shuffler for FixedOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut shuffler = RandomShuffler::new();
        let mut items: Vec<u32> = (0..20).collect();
        shuffler.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        RandomShuffler::seeded(7).shuffle(&mut a);
        RandomShuffler::seeded(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_randomizes() {
        let original: Vec<u32> = (0..32).collect();
        let mut items = original.clone();
        RandomShuffler::seeded(42).shuffle(&mut items);
        // 32! orderings; staying sorted would mean the shuffle did nothing
        assert_ne!(items, original, "Seeded shuffle should permute");
    }

    #[test]
    fn test_fixed_order_is_identity() {
        let mut items = vec!['a', 'b', 'c'];
        FixedOrder.shuffle(&mut items);
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_shuffle_through_reference() {
        fn shuffle_owned<S: Shuffler>(mut shuffler: S, items: &mut [u32]) {
            shuffler.shuffle(items);
        }

        let mut shuffler = RandomShuffler::seeded(3);
        let mut items: Vec<u32> = (0..16).collect();
        shuffle_owned(&mut shuffler, &mut items);
        assert_eq!(items.len(), 16);
    }
}
