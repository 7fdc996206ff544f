use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const MODULUS: i64 = i32::MAX as i64;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness for the Easy difficulty.
///
/// Injected into a [`GameSession`](crate::session::GameSession) so that games can be
/// replayed exactly with a seeded generator.
pub trait RandomGenerator: Default {
    /// Next raw value.
    fn next(&mut self) -> i32;

    /// A value in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one item uniformly, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        let upper = i32::try_from(items.len()).unwrap_or(i32::MAX);
        let index = self.next_range(0, upper) as usize;
        items.get(index)
    }
}

/// Entropy-backed generator using the thread-local `rand` RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// Deterministic linear congruential generator for reproducible games and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % MODULUS;
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    /// Creates a generator from any seed; the seed is folded into the LCG's range.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(MODULUS),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{CustomNumberGenerator, RandomGenerator, StandardRandomGenerator};

    #[test]
    fn outputs_same_numbers() {
        let mut crg = CustomNumberGenerator::new(42);
        assert_eq!(crg.next_range(0, 10), 8);
        assert_eq!(crg.next_range(0, 10), 4);
        assert_eq!(crg.next_range(0, 10), 1);
        assert_eq!(crg.next_range(0, 10), 2);
        assert_eq!(crg.next_range(0, 10), 4);
    }

    #[test]
    fn choose_is_reproducible() {
        let items = [432, 6542, 534, 6, 13, 645, 88, 2352, 345, 2667, 8287];
        let mut crg = CustomNumberGenerator::default();
        assert_eq!(crg.choose(&items), Some(&6));
        assert_eq!(crg.choose(&items), Some(&2667));
        assert_eq!(crg.choose(&items), Some(&534));
        assert_eq!(crg.choose(&items), Some(&8287));
        assert_eq!(crg.choose(&items), Some(&6));
    }

    #[test]
    fn choose_from_empty_slice_is_none() {
        let empty: [u8; 0] = [];
        assert_eq!(CustomNumberGenerator::default().choose(&empty), None);
        assert_eq!(StandardRandomGenerator.choose(&empty), None);
    }

    #[test]
    fn huge_and_negative_seeds_do_not_overflow() {
        let mut big = CustomNumberGenerator::new(i64::MAX);
        let mut negative = CustomNumberGenerator::new(-17);
        for _ in 0..100 {
            assert!((0..9).contains(&big.next_range(0, 9)));
            assert!((0..9).contains(&negative.next_range(0, 9)));
        }
    }

    #[test]
    fn standard_generator_stays_in_range() {
        let mut rng = StandardRandomGenerator;
        for _ in 0..100 {
            assert!((3..7).contains(&rng.next_range(3, 7)));
        }
    }
}
