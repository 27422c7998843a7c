//! Utility functions for random number generation.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::Result;

/// Fast RNG suitable for no_std environments.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Creates a fast RNG with entropy from the OS-seeded thread-local RNG.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::utils::rng_from_entropy;
///
/// let mut rng = rng_from_entropy();
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn rng_from_entropy() -> FastRng {
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}

/// # Overview
///
/// Seeded RNG when a seed is given, entropy-seeded otherwise. Without the
/// `std` feature there is no entropy source and a seed is required.
pub fn rng_from_option(seed: Option<u64>) -> Result<FastRng> {
    match seed {
        Some(seed) => Ok(rng_from_seed(seed)),
        #[cfg(feature = "std")]
        None => Ok(rng_from_entropy()),
        #[cfg(not(feature = "std"))]
        None => Err(crate::error::Error::MissingRandom)
    }
}

/// # Overview
///
/// Derives an independent child generator, one per clause.
#[inline]
pub fn rng_split(parent: &mut FastRng) -> FastRng {
    Xoshiro256PlusPlus::from_rng(parent)
}

/// # Overview
///
/// Generates a random f32 in [0, 1).
#[inline]
pub fn random_f32<R: Rng>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}
