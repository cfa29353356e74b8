//! Deterministic Fisher–Yates shuffle.

use crate::seed::seeded_random;

/// Shuffle a slice into a new `Vec`, deterministically.
///
/// Fisher–Yates from the end of the sequence: at each step `i` (counting
/// down from `len` to 1) the swap target is
/// `floor(seeded_random(seed + i) * i)`. Offsetting the seed by the step
/// index gives each swap an independent-looking draw while keeping the
/// whole permutation a pure function of `(items, seed)`. The input is
/// never mutated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn shuffle<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..=shuffled.len()).rev() {
        let j = (seeded_random(seed + i as i64) * i as f64) as usize;
        shuffled.swap(i - 1, j);
    }
    shuffled
}
