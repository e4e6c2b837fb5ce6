//! Seeded random construction.
//!
//! Gives multi-start search a different basin to descend from on each
//! restart. The order depends only on the RNG state, so a fixed seed
//! reproduces it exactly.

use rand::Rng;

/// Returns the free hubs in a uniformly random order (Fisher-Yates).
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use hub_routing::constructive::shuffled;
///
/// let a = shuffled(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let b = shuffled(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffled<R: Rng>(free: &[usize], rng: &mut R) -> Vec<usize> {
    let mut perm = free.to_vec();
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    perm
}
