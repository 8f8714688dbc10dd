//! A small deterministic random source.
//!
//! Random positions and colours are only used for demos and tests, where reproducibility matters more than
//! statistical quality. Every generator is seeded explicitly so that a failing run can be replayed.

/// A 64-bit linear congruential generator (Knuth's MMIX constants).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: seed };
        // Mix the seed so that nearby seeds do not produce nearby first outputs
        rng.next_u64();
        rng
    }

    /// Generate the next random `u64`.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // The low bits of an LCG are weak; fold the high half down
        self.state ^ (self.state >> 33)
    }

    /// Generate a random value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "Cannot generate a random value below zero");
        (self.next_u64() % bound as u64) as usize
    }

    /// Generate a random byte.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        assert!((0..10).any(|_| a.next_u64() != b.next_u64()));
    }

    #[test]
    fn next_below_stays_in_range() {
        let mut rng = Rng::new(7);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    #[should_panic]
    fn next_below_zero_panics() {
        Rng::new(0).next_below(0);
    }
}
