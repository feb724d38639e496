//! Uniform random price draws.

use dishmatch_core::{Price, PriceSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// [`PriceSource`] drawing ladder steps uniformly at random.
///
/// Seeding with [`RandomPriceSource::seeded`] makes a whole session's prices
/// reproducible.
///
/// # Examples
/// ```
/// use dishmatch_core::PriceSource;
/// use dishmatch_pricing::RandomPriceSource;
///
/// let mut left = RandomPriceSource::seeded(42);
/// let mut right = RandomPriceSource::seeded(42);
/// assert_eq!(left.next_step(), right.next_step());
/// ```
#[derive(Debug, Clone)]
pub struct RandomPriceSource {
    rng: ChaCha8Rng,
}

impl RandomPriceSource {
    /// Create a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPriceSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PriceSource for RandomPriceSource {
    fn next_step(&mut self) -> u8 {
        self.rng.gen_range(0..Price::STEPS)
    }
}
