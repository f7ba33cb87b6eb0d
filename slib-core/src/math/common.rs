// =============================================================================
// Common Math
// =============================================================================
//
// Fused multiply-add, tolerance comparison, and the bit-trick approximations
// of sqrt, cbrt and 1/sqrt.

use num_traits::Float;

use crate::error::{MathError, MathResult};

/// Default tolerance of [`approx_eq`] and of the repeated-root test in
/// [`quadratic`](crate::math::quadratic).
pub const APPROX_EPSILON: f32 = f32::EPSILON;

/// Fused multiply-add: `a * b + c` with a single rounding.
#[inline(always)]
pub fn fma<T: Float>(a: T, b: T, c: T) -> T {
    a.mul_add(b, c)
}

/// `|x - y| < eps`.
#[inline]
pub fn approx_eq<T: Float>(x: T, y: T, eps: T) -> bool {
    (x - y).abs() < eps
}

/// Negation of [`approx_eq`].
#[inline]
pub fn approx_ne<T: Float>(x: T, y: T, eps: T) -> bool {
    !approx_eq(x, y, eps)
}

/// Smallest of two or more values.
///
/// ```
/// assert_eq!(slib_core::min!(3, 1, 2), 1);
/// assert_eq!(slib_core::min!(2.5, -1.0), -1.0);
/// ```
#[macro_export]
macro_rules! min {
    ($a:expr, $b:expr $(,)?) => {{
        let (a, b) = ($a, $b);
        if a < b { a } else { b }
    }};
    ($a:expr, $b:expr, $($rest:expr),+ $(,)?) => {
        $crate::min!($crate::min!($a, $b), $($rest),+)
    };
}

/// Largest of two or more values.
///
/// ```
/// assert_eq!(slib_core::max!(3, 1, 2), 3);
/// ```
#[macro_export]
macro_rules! max {
    ($a:expr, $b:expr $(,)?) => {{
        let (a, b) = ($a, $b);
        if a > b { a } else { b }
    }};
    ($a:expr, $b:expr, $($rest:expr),+ $(,)?) => {
        $crate::max!($crate::max!($a, $b), $($rest),+)
    };
}

// =============================================================================
// Bit-trick approximations
// =============================================================================

/// Every bit of an `f32` except the sign.
const ABS_MASK: u32 = 0x7fff_ffff;

/// Approximate square root.
///
/// Halves the exponent through the IEEE-754 bit pattern, then applies two
/// Newton-Raphson steps. Relative error is around `1e-6` for normal inputs.
/// The sign bit is ignored, so `-0.0` behaves like `0.0`.
///
/// `x0` must be non-negative; this is only checked in debug builds. See
/// [`try_approx_sqrt`] for a checked variant.
#[inline]
pub fn approx_sqrt(x0: f32) -> f32 {
    debug_assert!(x0 >= 0.0, "approx_sqrt: negative input {x0}");

    let mut x = f32::from_bits(0x1fbb3f80u32.wrapping_add((x0.to_bits() & ABS_MASK) >> 1));
    x = 0.5 * (x + x0 / x);
    x = 0.5 * (x + x0 / x);
    x
}

/// Approximate cube root.
///
/// Divides the bit pattern by roughly three (`1/4 + 1/16 + ...`), adds the
/// exponent bias correction, then applies two Newton-Raphson steps. The sign
/// bit is ignored, so `-0.0` behaves like `0.0`.
///
/// `x0` must be non-negative; this is only checked in debug builds.
#[inline]
pub fn approx_cbrt(x0: f32) -> f32 {
    debug_assert!(x0 >= 0.0, "approx_cbrt: negative input {x0}");

    let mut ix = x0.to_bits() & ABS_MASK;
    ix = ix / 4 + ix / 16;
    ix += ix / 16;
    ix += ix / 256;
    ix = 0x2a5137a0u32.wrapping_add(ix);

    let mut x = f32::from_bits(ix);
    x = 0.33333333 * (2.0 * x + x0 / (x * x));
    x = 0.33333333 * (2.0 * x + x0 / (x * x));
    x
}

/// Scalars with a bit-trick reciprocal square root.
pub trait FastRecipSqrt: Float {
    /// Approximate `1 / sqrt(self)`. `self` must be strictly positive.
    fn recip_sqrt_fast(self) -> Self;
}

impl FastRecipSqrt for f32 {
    /// Magic-constant estimate followed by two Newton-Raphson steps.
    #[inline]
    fn recip_sqrt_fast(self) -> Self {
        debug_assert!(self > 0.0, "recip_sqrt_fast: non-positive input {self}");

        let half = 0.5 * self;
        let mut x = f32::from_bits(0x5f37599eu32.wrapping_sub(self.to_bits() >> 1));
        x *= 1.5 - half * x * x;
        x *= 1.5 - half * x * x;
        x
    }
}

impl FastRecipSqrt for f64 {
    /// Magic-constant estimate only, with no refinement step.
    ///
    /// Expect a relative error of a few percent, far looser than the `f32`
    /// version.
    #[inline]
    fn recip_sqrt_fast(self) -> Self {
        debug_assert!(self > 0.0, "recip_sqrt_fast: non-positive input {self}");

        f64::from_bits(0x5fe6ec85e8000000u64.wrapping_sub(self.to_bits() >> 1))
    }
}

/// Approximate `1 / sqrt(x0)`; precision depends on `T`.
#[inline]
pub fn recip_sqrt_fast<T: FastRecipSqrt>(x0: T) -> T {
    x0.recip_sqrt_fast()
}

// =============================================================================
// Checked variants
// =============================================================================

fn require_non_negative(operation: &'static str, x: f64) -> MathResult<()> {
    if x.is_nan() {
        log::debug!("{operation}: rejected NaN input");
        return Err(MathError::NotANumber { operation });
    }
    if x < 0.0 {
        log::debug!("{operation}: rejected negative input {x}");
        return Err(MathError::NegativeInput { operation, value: x });
    }
    Ok(())
}

/// [`approx_sqrt`] with the precondition checked in every build.
pub fn try_approx_sqrt(x0: f32) -> MathResult<f32> {
    require_non_negative("approx_sqrt", f64::from(x0))?;
    Ok(approx_sqrt(x0))
}

/// [`approx_cbrt`] with the precondition checked in every build.
pub fn try_approx_cbrt(x0: f32) -> MathResult<f32> {
    require_non_negative("approx_cbrt", f64::from(x0))?;
    Ok(approx_cbrt(x0))
}

/// [`recip_sqrt_fast`] with the precondition checked in every build.
pub fn try_recip_sqrt_fast<T: FastRecipSqrt>(x0: T) -> MathResult<T> {
    const OPERATION: &str = "recip_sqrt_fast";

    if x0.is_nan() {
        log::debug!("{OPERATION}: rejected NaN input");
        return Err(MathError::NotANumber { operation: OPERATION });
    }
    if x0 <= T::zero() {
        let value = x0.to_f64().unwrap_or(f64::NAN);
        log::debug!("{OPERATION}: rejected non-positive input {value}");
        return Err(MathError::NonPositiveInput {
            operation: OPERATION,
            value,
        });
    }
    Ok(x0.recip_sqrt_fast())
}
