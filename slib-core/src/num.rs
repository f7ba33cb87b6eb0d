// =============================================================================
// Numeric Types
// =============================================================================
//
// Scalar aliases and the unsigned-integer concept shared by the bit kernel.

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{NumCast, PrimInt, Unsigned, WrappingAdd, WrappingMul, WrappingSub};

use crate::intrinsics::butterfly::Butterfly;

/// Size type used for byte counts.
pub type Size = usize;

/// Default floating-point scalar.
///
/// `f32`, or `f64` with the `double-precision` feature. The kernels are
/// generic and do not use this alias; it is offered to downstream code that
/// wants one scalar type for the whole build, paired with [`FloatBits`].
///
/// ```
/// use slib_core::{Float, FloatBits};
///
/// let x: Float = 1.5;
/// let bits: FloatBits = x.to_bits();
/// assert_eq!(core::mem::size_of::<Float>(), core::mem::size_of::<FloatBits>());
/// assert_eq!(Float::from_bits(bits), x);
/// ```
#[cfg(not(feature = "double-precision"))]
pub type Float = f32;

/// Bit pattern type with the same width as [`Float`].
#[cfg(not(feature = "double-precision"))]
pub type FloatBits = u32;

/// Default floating-point scalar: `f64` under the `double-precision` feature.
///
/// ```
/// use slib_core::{Float, FloatBits};
///
/// let x: Float = 1.5;
/// let bits: FloatBits = x.to_bits();
/// assert_eq!(core::mem::size_of::<Float>(), 8);
/// assert_eq!(Float::from_bits(bits), x);
/// ```
#[cfg(feature = "double-precision")]
pub type Float = f64;

/// Bit pattern type with the same width as [`Float`].
#[cfg(feature = "double-precision")]
pub type FloatBits = u64;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Fixed-width unsigned integer accepted by the bit kernel.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The trait is sealed: every
/// operation in [`crate::intrinsics`] is defined for all `2^BITS` inputs of these
/// widths and nothing else.
pub trait UnsignedInt:
    PrimInt
    + Unsigned
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Butterfly
    + Hash
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Width of the type in bits.
    const BITS: u32;

    /// Largest value of the type.
    const MAX: Self;

    /// Zero-extends the value to 64 bits.
    fn widen(self) -> u64;

    /// Keeps the low `BITS` bits of `wide`.
    fn narrow(wide: u64) -> Self;
}

macro_rules! impl_unsigned_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl UnsignedInt for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn widen(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn narrow(wide: u64) -> Self {
                    wide as $t
                }
            }
        )*
    };
}

impl_unsigned_int!(u8, u16, u32, u64);

/// Converts between numeric types, returning `None` when `value` is not
/// representable in `T`.
#[inline]
pub fn cast_to<T: NumCast, U: NumCast>(value: U) -> Option<T> {
    T::from(value)
}
