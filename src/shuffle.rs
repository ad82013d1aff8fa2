//! In-place uniform shuffling.

use rand::Rng;

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// Walks from the last index down to 1 and swaps each element with a
/// uniformly chosen element at or below it, which yields every permutation
/// with equal probability.
///
/// # Example
///
/// ```
/// use memrs::shuffle;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut values = [1, 2, 3, 4, 5];
/// shuffle(&mut values, &mut rng);
///
/// let mut sorted = values;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
