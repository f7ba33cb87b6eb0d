// =============================================================================
// Bit Manipulation
// =============================================================================
//
// Free-function front end of the bit kernel. Counting queries delegate to the
// build-time provider (`ActiveBits`); everything else is plain shift/mask
// arithmetic that does not depend on the provider.

use super::provider::{ActiveBits, BitPrimitives};
use crate::num::UnsignedInt;

// =============================================================================
// Queries
// =============================================================================

/// Count leading zeros. Returns `T::BITS` for zero.
#[inline(always)]
pub fn count_leading_zeros<T: UnsignedInt>(value: T) -> u32 {
    ActiveBits::count_leading_zeros(value)
}

/// Count trailing zeros. Returns `T::BITS` for zero.
#[inline(always)]
pub fn count_trailing_zeros<T: UnsignedInt>(value: T) -> u32 {
    ActiveBits::count_trailing_zeros(value)
}

/// Population count (number of set bits).
#[inline(always)]
pub fn popcount<T: UnsignedInt>(value: T) -> u32 {
    ActiveBits::popcount(value)
}

/// Alias of [`popcount`].
#[inline(always)]
pub fn count_set_bits<T: UnsignedInt>(value: T) -> u32 {
    popcount(value)
}

/// Number of zero bits: `T::BITS - popcount(value)`.
#[inline(always)]
pub fn count_cleared_bits<T: UnsignedInt>(value: T) -> u32 {
    ActiveBits::count_cleared_bits(value)
}

/// `popcount(value) % 2`.
#[inline(always)]
pub fn parity<T: UnsignedInt>(value: T) -> u32 {
    ActiveBits::parity(value)
}

/// `true` iff exactly one bit is set.
#[inline(always)]
pub fn has_single_bit<T: UnsignedInt>(value: T) -> bool {
    ActiveBits::has_single_bit(value)
}

/// Alias of [`has_single_bit`]. Zero is not a power of two.
#[inline(always)]
pub fn is_power_of_two<T: UnsignedInt>(value: T) -> bool {
    has_single_bit(value)
}

/// Index of the highest set bit; `-1` for zero.
#[inline(always)]
pub fn floor_log2<T: UnsignedInt>(value: T) -> i32 {
    ActiveBits::floor_log2(value)
}

/// Bits needed to represent `value`; `0` for zero.
#[inline(always)]
pub fn bit_width<T: UnsignedInt>(value: T) -> u32 {
    ActiveBits::bit_width(value)
}

/// Largest power of two `<= value`; zero stays zero.
#[inline(always)]
pub fn bit_floor<T: UnsignedInt>(value: T) -> T {
    ActiveBits::bit_floor(value)
}

/// Alias of [`bit_floor`].
#[inline(always)]
pub fn previous_power_of_two<T: UnsignedInt>(value: T) -> T {
    bit_floor(value)
}

/// Smallest power of two `>= value`; values `<= 1` give `1`.
///
/// Wraps to `0` when the result would need `T::BITS + 1` bits.
///
/// ```
/// use slib_core::intrinsics::bit_ceil;
///
/// assert_eq!(bit_ceil(5u8), 8);
/// assert_eq!(bit_ceil(128u8), 128);
/// assert_eq!(bit_ceil(129u8), 0);
/// ```
#[inline(always)]
pub fn bit_ceil<T: UnsignedInt>(value: T) -> T {
    ActiveBits::bit_ceil(value)
}

/// [`bit_ceil`] that reports an unrepresentable result as `None`.
#[inline(always)]
pub fn checked_bit_ceil<T: UnsignedInt>(value: T) -> Option<T> {
    ActiveBits::checked_bit_ceil(value)
}

/// Alias of [`bit_ceil`].
#[inline(always)]
pub fn next_power_of_two<T: UnsignedInt>(value: T) -> T {
    bit_ceil(value)
}

/// Nearest power of two; ties resolve upwards.
#[inline(always)]
pub fn closest_power_of_two<T: UnsignedInt>(value: T) -> T {
    ActiveBits::closest_power_of_two(value)
}

// =============================================================================
// Permutations
// =============================================================================

/// Reverses the bit order across the full width.
#[inline(always)]
pub fn reverse_bits<T: UnsignedInt>(value: T) -> T {
    value.reverse_bits_network()
}

/// Reverses the byte order (endianness swap). Identity for `u8`.
#[inline(always)]
pub fn bit_swap<T: UnsignedInt>(value: T) -> T {
    value.swap_bytes_network()
}

/// Maps a signed rotation to `[0, T::BITS)`.
#[inline(always)]
fn normalize_rotation<T: UnsignedInt>(count: i32) -> u32 {
    count.rem_euclid(T::BITS as i32) as u32
}

/// Rotates left by `count` bits.
///
/// `count` is taken modulo the width; a negative count rotates right, so
/// `rotate_left(x, -1) == rotate_right(x, 1)`.
#[inline(always)]
pub fn rotate_left<T: UnsignedInt>(value: T, count: i32) -> T {
    let count = normalize_rotation::<T>(count);
    if count == 0 {
        return value;
    }
    (value << count as usize) | (value >> (T::BITS - count) as usize)
}

/// Rotates right by `count` bits. See [`rotate_left`].
#[inline(always)]
pub fn rotate_right<T: UnsignedInt>(value: T, count: i32) -> T {
    let count = normalize_rotation::<T>(count);
    if count == 0 {
        return value;
    }
    (value >> count as usize) | (value << (T::BITS - count) as usize)
}

// =============================================================================
// Single-bit access
// =============================================================================
//
// `pos` is not validated. It must be below `T::BITS`; larger positions
// overflow the shift (a panic in debug builds).

/// Sets bit `pos`.
#[inline(always)]
pub fn set_bit<T: UnsignedInt>(value: T, pos: u32) -> T {
    value | (T::one() << pos as usize)
}

/// Clears bit `pos`.
#[inline(always)]
pub fn clear_bit<T: UnsignedInt>(value: T, pos: u32) -> T {
    value & !(T::one() << pos as usize)
}

/// Flips bit `pos`.
#[inline(always)]
pub fn toggle_bit<T: UnsignedInt>(value: T, pos: u32) -> T {
    value ^ (T::one() << pos as usize)
}

/// Tests bit `pos`.
#[inline(always)]
pub fn check_bit<T: UnsignedInt>(value: T, pos: u32) -> bool {
    (value >> pos as usize) & T::one() == T::one()
}

// =============================================================================
// Alignment
// =============================================================================

/// Rounds `x` up to a multiple of `y`.
///
/// Two inputs are special-cased and kept as-is for compatibility:
/// `x == 0` returns `y` (not `0`), and `y == 0` returns `0`. A result past
/// `T::MAX` wraps.
///
/// ```
/// use slib_core::intrinsics::round_up;
///
/// assert_eq!(round_up(10u32, 4), 12);
/// assert_eq!(round_up(12u32, 4), 12);
/// assert_eq!(round_up(0u32, 4), 4);
/// assert_eq!(round_up(7u32, 0), 0);
/// ```
#[inline]
pub fn round_up<T: UnsignedInt>(x: T, y: T) -> T {
    if x == T::zero() {
        return y;
    }
    if y == T::zero() {
        return y;
    }
    let quotient = x / y;
    if x % y == T::zero() {
        x
    } else {
        quotient.wrapping_add(&T::one()).wrapping_mul(&y)
    }
}

/// Rounds `value` up to a multiple of `alignment`.
///
/// `alignment` must be a power of two; other values give meaningless results
/// and are not checked. Wraps past `T::MAX`.
#[inline(always)]
pub fn align_up<T: UnsignedInt>(value: T, alignment: T) -> T {
    let mask = alignment.wrapping_sub(&T::one());
    value.wrapping_add(&mask) & !mask
}
