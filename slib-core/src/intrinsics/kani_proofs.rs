//! Kani formal verification proofs for the intrinsics module.
//!
//! These proofs cover the provider agreement the whole kernel relies on and
//! the algebraic identities of the permutation helpers.
//!
//! Run with: `cargo kani --package slib-core`

use super::bits::{align_up, bit_swap, reverse_bits, rotate_left, rotate_right, round_up};
use super::provider::{BitPrimitives, Intrinsic, Portable};

// ============================================================================
// Proof 1: providers agree on the counting primitives
// ============================================================================
// What: Portable loops and core builtins return the same counts for all u32
// Why: The provider is swapped at build time; results must not change

/// Verify the portable provider matches the intrinsic provider on u32.
#[kani::proof]
#[kani::unwind(34)]
fn verify_providers_agree_u32() {
    let x: u32 = kani::any();

    kani::assert(
        Portable::count_leading_zeros(x) == Intrinsic::count_leading_zeros(x),
        "clz must agree",
    );
    kani::assert(
        Portable::count_trailing_zeros(x) == Intrinsic::count_trailing_zeros(x),
        "ctz must agree",
    );
    kani::assert(
        Portable::popcount(x) == Intrinsic::popcount(x),
        "popcount must agree",
    );
}

// ============================================================================
// Proof 2: bit_floor / checked_bit_ceil bracket the input
// ============================================================================
// What: floor <= x <= ceil, both powers of two, for every non-zero u16
// Why: Power-of-two rounding feeds buffer sizing in callers

/// Verify the power-of-two bracket around any non-zero u16.
#[kani::proof]
fn verify_power_of_two_bracket() {
    let x: u16 = kani::any();
    kani::assume(x != 0);

    let floor = Intrinsic::bit_floor(x);
    kani::assert(floor <= x, "floor must not exceed x");
    kani::assert(floor.count_ones() == 1, "floor must be a power of two");

    if let Some(ceil) = Intrinsic::checked_bit_ceil(x) {
        kani::assert(ceil >= x, "ceil must not be below x");
        kani::assert(ceil.count_ones() == 1, "ceil must be a power of two");
    } else {
        kani::assert(x > 1 << 15, "only values above the top power overflow");
    }
}

// ============================================================================
// Proof 3: permutations are involutions
// ============================================================================
// What: reverse_bits and bit_swap applied twice return the input
// Why: Butterfly masks are hand-written per width

/// Verify reverse_bits and bit_swap are involutions on u64.
#[kani::proof]
fn verify_permutations_involutive() {
    let x: u64 = kani::any();

    kani::assert(reverse_bits(reverse_bits(x)) == x, "reverse twice is identity");
    kani::assert(bit_swap(bit_swap(x)) == x, "byte swap twice is identity");
    kani::assert(reverse_bits(x) == x.reverse_bits(), "network matches core");
}

// ============================================================================
// Proof 4: rotations invert each other for any signed count
// ============================================================================

/// Verify rotate_right undoes rotate_left for every count, negative included.
#[kani::proof]
fn verify_rotation_inverse() {
    let x: u32 = kani::any();
    let k: i32 = kani::any();

    kani::assert(rotate_right(rotate_left(x, k), k) == x, "rotation must invert");
}

// ============================================================================
// Proof 5: alignment produces multiples
// ============================================================================

/// Verify round_up and align_up land on a multiple without undershooting.
#[kani::proof]
fn verify_alignment_multiples() {
    let x: u16 = kani::any();
    let shift: u32 = kani::any();
    kani::assume(shift < 8);
    kani::assume(x <= u16::MAX - 256);

    let alignment = 1u16 << shift;
    let aligned = align_up(x, alignment);
    kani::assert(aligned % alignment == 0, "align_up must yield a multiple");
    kani::assert(aligned >= x, "align_up must not round down");

    let y: u16 = kani::any();
    kani::assume(y != 0 && y <= 256);
    let rounded = round_up(x, y);
    kani::assert(rounded % y == 0, "round_up must yield a multiple");
    kani::assert(rounded >= x, "round_up must not round down");
}
