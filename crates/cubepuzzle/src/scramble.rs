//! Random slice generation.

use rand::Rng;

use crate::{Face, Slice};

/// Returns a uniformly random slice for a cube of size `size`, which must be
/// nonzero.
pub fn random_slice(rng: &mut impl Rng, size: usize) -> Slice {
    let face = Face::ALL[rng.random_range(0..Face::COUNT)];
    let depth = rng.random_range(0..size);
    let clockwise = rng.random_bool(0.5);
    Slice::new(face, depth, clockwise)
}

/// Returns `count` uniformly random slices for a cube of size `size`, which
/// must be nonzero.
pub fn random_slices(rng: &mut impl Rng, size: usize, count: usize) -> Vec<Slice> {
    (0..count).map(|_| random_slice(rng, size)).collect()
}
