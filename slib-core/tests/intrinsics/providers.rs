//! Cross-provider agreement tests.
//!
//! Every `BitPrimitives` provider must return the same value for every input.
//! `u8` and `u16` are checked exhaustively; `u32` and `u64` by proptest.

use proptest::prelude::*;

use slib_core::intrinsics::{ActiveBits, BitPrimitives, Intrinsic, Portable};
use slib_core::UnsignedInt;

/// Asserts that providers `A` and `B` agree on every query for `x`.
fn agree<A: BitPrimitives, B: BitPrimitives, T: UnsignedInt>(x: T) -> Result<(), String> {
    macro_rules! check {
        ($op:ident) => {
            if A::$op(x) != B::$op(x) {
                return Err(format!(
                    "{} disagrees on {:?}: {:?} vs {:?}",
                    stringify!($op),
                    x,
                    A::$op(x),
                    B::$op(x)
                ));
            }
        };
    }

    check!(count_leading_zeros);
    check!(count_trailing_zeros);
    check!(popcount);
    check!(count_cleared_bits);
    check!(parity);
    check!(has_single_bit);
    check!(floor_log2);
    check!(bit_width);
    check!(bit_floor);
    check!(checked_bit_ceil);
    check!(bit_ceil);
    check!(closest_power_of_two);
    Ok(())
}

/// Checks `Portable` and `ActiveBits` against `Intrinsic`, plus `Hardware`
/// when it is compiled in.
fn all_agree<T: UnsignedInt>(x: T) -> Result<(), String> {
    agree::<Intrinsic, Portable, T>(x)?;
    agree::<Intrinsic, ActiveBits, T>(x)?;
    #[cfg(all(
        target_arch = "x86_64",
        target_feature = "lzcnt",
        target_feature = "bmi1",
        target_feature = "popcnt"
    ))]
    agree::<Intrinsic, slib_core::intrinsics::Hardware, T>(x)?;
    Ok(())
}

#[test]
fn providers_agree_on_every_u8() {
    for x in 0..=u8::MAX {
        if let Err(msg) = all_agree(x) {
            panic!("{msg}");
        }
    }
}

#[test]
fn providers_agree_on_every_u16() {
    for x in 0..=u16::MAX {
        if let Err(msg) = all_agree(x) {
            panic!("{msg}");
        }
    }
}

#[test]
fn providers_agree_on_boundaries() {
    let samples_u32 = [0u32, 1, 2, 3, 0x7FFF_FFFF, 0x8000_0000, 0x8000_0001, u32::MAX];
    for x in samples_u32 {
        all_agree(x).unwrap();
    }
    let samples_u64 = [0u64, 1, 1 << 32, (1 << 63) - 1, 1 << 63, (1 << 63) + 1, u64::MAX];
    for x in samples_u64 {
        all_agree(x).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_providers_agree_u32(x in any::<u32>()) {
        prop_assert!(all_agree(x).is_ok(), "{:?}", all_agree(x));
    }

    #[test]
    fn prop_providers_agree_u64(x in any::<u64>()) {
        prop_assert!(all_agree(x).is_ok(), "{:?}", all_agree(x));
    }

    #[test]
    fn prop_providers_agree_sparse_u64(shift in 0u32..64, noise in 0u64..16) {
        // Values near powers of two, where off-by-one errors live
        let x = (1u64 << shift).wrapping_add(noise).wrapping_sub(8);
        prop_assert!(all_agree(x).is_ok(), "{:?}", all_agree(x));
    }
}
