//! In-place Knuth shuffle

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shuffle `items` in place with the thread-local RNG
pub fn shuffle<T>(items: &mut [T]) -> &mut [T] {
    let mut rng = rand::rng();
    shuffle_with(items, &mut rng)
}

/// Shuffle `items` in place with a seeded RNG, reproducibly
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) -> &mut [T] {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle_with(items, &mut rng)
}

/// Shuffle `items` in place with `rng`
///
/// Walks from the end, swapping each slot with a uniformly chosen slot at or
/// before it (TAOCP vol. II, Algorithm P).
pub fn shuffle_with<'a, T, R: Rng>(items: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    let mut balance = items.len();
    while balance > 0 {
        let candidate = rng.random_range(0..balance);
        balance -= 1;
        items.swap(balance, candidate);
    }
    items
}
