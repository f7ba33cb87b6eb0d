// =============================================================================
// Bit Primitive Providers
// =============================================================================
//
// Three interchangeable implementations of the counting primitives the rest of
// the kernel is built on. The provider is chosen at build time through
// `ActiveBits`; every provider must produce identical results for every input.

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "lzcnt",
    target_feature = "bmi1",
    target_feature = "popcnt"
))]
use core::arch::x86_64::{_lzcnt_u64, _popcnt64, _tzcnt_u64};

use crate::num::UnsignedInt;

/// Source of the bit-counting primitives.
///
/// Implementors supply the three counting operations. Every derived query is a
/// provided method expressed in terms of them, so swapping the provider
/// changes the instructions executed but never the results.
///
/// All counts saturate at `T::BITS` for a zero input.
///
/// # Example
///
/// ```
/// use slib_core::intrinsics::{BitPrimitives, Intrinsic, Portable};
///
/// let x = 0b0010_1000u8;
/// assert_eq!(Intrinsic::count_leading_zeros(x), 2);
/// assert_eq!(Portable::count_leading_zeros(x), 2);
/// assert_eq!(Portable::bit_floor(x), 0b0010_0000);
/// ```
pub trait BitPrimitives {
    /// Number of zero bits above the most significant set bit.
    fn count_leading_zeros<T: UnsignedInt>(value: T) -> u32;

    /// Number of zero bits below the least significant set bit.
    fn count_trailing_zeros<T: UnsignedInt>(value: T) -> u32;

    /// Number of set bits.
    fn popcount<T: UnsignedInt>(value: T) -> u32;

    /// Number of zero bits.
    #[inline(always)]
    fn count_cleared_bits<T: UnsignedInt>(value: T) -> u32 {
        T::BITS - Self::popcount(value)
    }

    /// `1` if an odd number of bits is set, `0` otherwise.
    #[inline(always)]
    fn parity<T: UnsignedInt>(value: T) -> u32 {
        Self::popcount(value) & 1
    }

    /// `true` iff exactly one bit is set.
    #[inline(always)]
    fn has_single_bit<T: UnsignedInt>(value: T) -> bool {
        value != T::zero() && (value & (value - T::one())) == T::zero()
    }

    /// Index of the most significant set bit, or `-1` for zero.
    #[inline(always)]
    fn floor_log2<T: UnsignedInt>(value: T) -> i32 {
        if value == T::zero() {
            return -1;
        }
        (T::BITS - 1 - Self::count_leading_zeros(value)) as i32
    }

    /// Number of bits needed to represent `value`; `0` for zero.
    #[inline(always)]
    fn bit_width<T: UnsignedInt>(value: T) -> u32 {
        T::BITS - Self::count_leading_zeros(value)
    }

    /// Largest power of two not greater than `value`; zero stays zero.
    #[inline(always)]
    fn bit_floor<T: UnsignedInt>(value: T) -> T {
        if value == T::zero() {
            return T::zero();
        }
        T::one() << (T::BITS - 1 - Self::count_leading_zeros(value)) as usize
    }

    /// Smallest power of two not less than `value`, or `None` when that power
    /// does not fit in `T`. Values `<= 1` map to `1`.
    #[inline(always)]
    fn checked_bit_ceil<T: UnsignedInt>(value: T) -> Option<T> {
        if value <= T::one() {
            return Some(T::one());
        }
        let shift = T::BITS - Self::count_leading_zeros(value - T::one());
        if shift >= T::BITS {
            return None;
        }
        Some(T::one() << shift as usize)
    }

    /// Smallest power of two not less than `value`.
    ///
    /// Wraps to `0` when the result does not fit in `T` (any value above
    /// `1 << (T::BITS - 1)`). Use [`BitPrimitives::checked_bit_ceil`] to
    /// detect that case.
    #[inline(always)]
    fn bit_ceil<T: UnsignedInt>(value: T) -> T {
        Self::checked_bit_ceil(value).unwrap_or_else(T::zero)
    }

    /// Whichever of [`bit_floor`](BitPrimitives::bit_floor) and
    /// [`bit_ceil`](BitPrimitives::bit_ceil) is nearer to `value`.
    ///
    /// Ties go to the ceiling. When the ceiling is not representable the floor
    /// is returned. Zero maps to zero.
    #[inline(always)]
    fn closest_power_of_two<T: UnsignedInt>(value: T) -> T {
        let floor = Self::bit_floor(value);
        match Self::checked_bit_ceil(value) {
            Some(ceil) if ceil - value > value - floor => floor,
            Some(ceil) => ceil,
            None => floor,
        }
    }
}

/// Counting through the core integer methods.
///
/// These lower to `ctlz`/`cttz`/`ctpop` compiler builtins, which the backend
/// turns into single instructions whenever the target has them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intrinsic;

impl BitPrimitives for Intrinsic {
    #[inline(always)]
    fn count_leading_zeros<T: UnsignedInt>(value: T) -> u32 {
        value.leading_zeros()
    }

    #[inline(always)]
    fn count_trailing_zeros<T: UnsignedInt>(value: T) -> u32 {
        value.trailing_zeros()
    }

    #[inline(always)]
    fn popcount<T: UnsignedInt>(value: T) -> u32 {
        value.count_ones()
    }
}

/// Counting through explicit x86_64 LZCNT / TZCNT / POPCNT instructions.
///
/// Only compiled when all three target features are enabled, e.g. with
/// `-C target-cpu=haswell` or newer.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "lzcnt",
    target_feature = "bmi1",
    target_feature = "popcnt"
))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Hardware;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "lzcnt",
    target_feature = "bmi1",
    target_feature = "popcnt"
))]
#[allow(unused_unsafe)]
impl BitPrimitives for Hardware {
    #[inline(always)]
    fn count_leading_zeros<T: UnsignedInt>(value: T) -> u32 {
        // SAFETY: `lzcnt` is enabled for the whole compilation unit.
        let wide = unsafe { _lzcnt_u64(value.widen()) } as u32;
        // Zero-extension adds exactly 64 - BITS leading zeros.
        wide - (64 - T::BITS)
    }

    #[inline(always)]
    fn count_trailing_zeros<T: UnsignedInt>(value: T) -> u32 {
        // SAFETY: `bmi1` is enabled for the whole compilation unit.
        let wide = unsafe { _tzcnt_u64(value.widen()) } as u32;
        // A zero input reports 64 here.
        wide.min(T::BITS)
    }

    #[inline(always)]
    fn popcount<T: UnsignedInt>(value: T) -> u32 {
        // SAFETY: `popcnt` is enabled for the whole compilation unit.
        unsafe { _popcnt64(value.widen() as i64) as u32 }
    }
}

/// Counting with plain shift-and-test loops.
///
/// Slow, dependency-free, and the reference the accelerated providers are
/// checked against.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl BitPrimitives for Portable {
    fn count_leading_zeros<T: UnsignedInt>(value: T) -> u32 {
        if value == T::zero() {
            return T::BITS;
        }
        let mut count = 0;
        let mut msb_mask = T::one() << (T::BITS - 1) as usize;
        while msb_mask != T::zero() && (value & msb_mask) == T::zero() {
            count += 1;
            msb_mask = msb_mask >> 1;
        }
        count
    }

    fn count_trailing_zeros<T: UnsignedInt>(value: T) -> u32 {
        if value == T::zero() {
            return T::BITS;
        }
        let mut count = 0;
        for i in 0..T::BITS {
            if (value >> i as usize) & T::one() != T::zero() {
                break;
            }
            count += 1;
        }
        count
    }

    fn popcount<T: UnsignedInt>(value: T) -> u32 {
        // Kernighan: each step clears the lowest set bit.
        let mut value = value;
        let mut count = 0;
        while value != T::zero() {
            value = value & (value - T::one());
            count += 1;
        }
        count
    }
}

/// Provider used by the free functions in [`crate::intrinsics`].
#[cfg(feature = "portable-bits")]
pub type ActiveBits = Portable;

/// Provider used by the free functions in [`crate::intrinsics`].
#[cfg(all(
    not(feature = "portable-bits"),
    target_arch = "x86_64",
    target_feature = "lzcnt",
    target_feature = "bmi1",
    target_feature = "popcnt"
))]
pub type ActiveBits = Hardware;

/// Provider used by the free functions in [`crate::intrinsics`].
#[cfg(all(
    not(feature = "portable-bits"),
    not(all(
        target_arch = "x86_64",
        target_feature = "lzcnt",
        target_feature = "bmi1",
        target_feature = "popcnt"
    ))
))]
pub type ActiveBits = Intrinsic;
