//! Password generation.

use rand::Rng;

use super::charset::{self, CheckboxState};

/// Fisher-Yates shuffle in place.
#[inline]
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `s`. The input is left untouched.
pub fn shuffle<R: Rng>(s: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    shuffle_in_place(&mut chars, rng);
    chars.into_iter().collect()
}

/// Generate a password of `length` characters drawn from `pool`.
///
/// The pool is shuffled once, then every position is drawn independently
/// with replacement. An empty pool yields an empty password.
pub fn generate<R: Rng>(pool: &str, length: usize, rng: &mut R) -> String {
    let mut chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    shuffle_in_place(&mut chars, rng);

    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Build the pool for `selection`, then generate from it.
pub fn generate_from_selection<R: Rng>(
    selection: &CheckboxState,
    length: usize,
    rng: &mut R,
) -> String {
    let pool = charset::build_pool(selection);
    generate(&pool, length, rng)
}
