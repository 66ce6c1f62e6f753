use ::rand::Rng;

/// Largest value (inclusive) produced by [`random_vector`]. Kept small
/// so that dot products of realistically sized vectors stay within
/// `i32` range.
pub const MAX_ELEMENT: i32 = 100;

/// Generates a vector of `size` values drawn uniformly from
/// `0..=MAX_ELEMENT`. The entropy source is an explicit parameter so
/// that generation is reproducible from a seeded rng.
pub fn random_vector<R: Rng>(rng: &mut R, size: usize) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..=MAX_ELEMENT)).collect()
}
