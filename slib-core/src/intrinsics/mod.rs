// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Bit counting, bit permutation, single-bit access and alignment over the
// fixed-width unsigned integers.

/// Counting primitives and the build-time provider selection.
pub mod provider;

/// Width-specialized bit and byte reversal networks.
pub mod butterfly;

/// Free functions over any [`UnsignedInt`](crate::num::UnsignedInt).
pub mod bits;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

// Providers
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "lzcnt",
    target_feature = "bmi1",
    target_feature = "popcnt"
))]
pub use provider::Hardware;
pub use provider::{ActiveBits, BitPrimitives, Intrinsic, Portable};

// Queries
pub use bits::{
    bit_ceil, bit_floor, bit_width, checked_bit_ceil, closest_power_of_two, count_cleared_bits,
    count_leading_zeros, count_set_bits, count_trailing_zeros, floor_log2, has_single_bit,
    is_power_of_two, next_power_of_two, parity, popcount, previous_power_of_two,
};

// Permutations and single-bit access
pub use bits::{
    bit_swap, check_bit, clear_bit, reverse_bits, rotate_left, rotate_right, set_bit, toggle_bit,
};

// Alignment
pub use bits::{align_up, round_up};
