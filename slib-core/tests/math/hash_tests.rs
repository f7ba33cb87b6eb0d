//! Tests for seed-based hash combining.

use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::hash::BuildHasherDefault;
use std::hash::DefaultHasher;

use slib_core::math::{hash_combine, hash_combine_with};

#[test]
fn test_hash_combine_from_zero_seed() {
    let mut seed = 0u64;
    hash_combine(&mut seed, 0);
    assert_eq!(seed, 0x9e3779b9);
}

#[test]
fn test_hash_combine_known_step() {
    let mut seed = 1u64;
    hash_combine(&mut seed, 2);
    // 1 ^ (2 + 0x9e3779b9 + (1 << 6) + (1 >> 2))
    assert_eq!(seed, 1 ^ (2 + 0x9e3779b9 + 64));
}

#[test]
fn test_hash_combine_wraps() {
    let mut seed = u64::MAX;
    hash_combine(&mut seed, u64::MAX);
    let expected = u64::MAX
        ^ u64::MAX
            .wrapping_add(0x9e3779b9)
            .wrapping_add(u64::MAX << 6)
            .wrapping_add(u64::MAX >> 2);
    assert_eq!(seed, expected);
}

#[test]
fn test_hash_combine_is_order_sensitive() {
    let mut ab = 0u64;
    hash_combine(&mut ab, 10);
    hash_combine(&mut ab, 20);

    let mut ba = 0u64;
    hash_combine(&mut ba, 20);
    hash_combine(&mut ba, 10);

    assert_ne!(ab, ba);
}

#[test]
fn test_hash_combine_with_is_deterministic_per_builder() {
    let builder = BuildHasherDefault::<DefaultHasher>::default();

    let mut first = 0u64;
    hash_combine_with(&mut first, &builder, "slib");
    hash_combine_with(&mut first, &builder, &42u32);

    let mut second = 0u64;
    hash_combine_with(&mut second, &builder, "slib");
    hash_combine_with(&mut second, &builder, &42u32);

    assert_eq!(first, second);
}

#[test]
fn test_hash_combine_with_spreads_small_keys() {
    let builder = RandomState::new();
    let seeds: HashSet<u64> = (0u32..256)
        .map(|key| {
            let mut seed = 0u64;
            hash_combine_with(&mut seed, &builder, &key);
            seed
        })
        .collect();
    assert_eq!(seeds.len(), 256);
}
