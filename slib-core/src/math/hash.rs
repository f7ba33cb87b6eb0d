// =============================================================================
// Hash Combining
// =============================================================================

use core::hash::{BuildHasher, Hash};

/// Golden-ratio constant of the classic `hash_combine` mix.
const GOLDEN_RATIO_32: u64 = 0x9e3779b9;

/// Mixes an already computed `hash` into `seed`.
///
/// `seed ^= hash + 0x9e3779b9 + (seed << 6) + (seed >> 2)`, all wrapping.
/// Order matters: combining `a` then `b` differs from `b` then `a`.
#[inline]
pub fn hash_combine(seed: &mut u64, hash: u64) {
    *seed ^= hash
        .wrapping_add(GOLDEN_RATIO_32)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

/// Hashes `value` with `builder` and mixes the result into `seed`.
#[inline]
pub fn hash_combine_with<S: BuildHasher, T: Hash + ?Sized>(seed: &mut u64, builder: &S, value: &T) {
    hash_combine(seed, builder.hash_one(value));
}
