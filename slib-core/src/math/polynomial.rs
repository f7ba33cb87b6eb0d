// =============================================================================
// Polynomials and Compensated Products
// =============================================================================

use num_traits::{Float, ToPrimitive};

use super::common::{approx_eq, fma, APPROX_EPSILON};
use crate::error::{MathError, MathResult};

/// Evaluates `c0 + c1*t + c2*t^2 + ... + cn*t^n` with Horner's scheme.
///
/// Coefficients are listed constant term first and may be of any primitive
/// numeric type; each is converted to the type of `t`. Each step is a fused
/// multiply-add, so the whole evaluation rounds once per coefficient.
///
/// ```
/// use slib_core::evaluate_polynomial;
///
/// // 1 + 2t + 3t^2 at t = 2
/// assert_eq!(evaluate_polynomial!(2.0f64; 1.0, 2.0, 3.0), 17.0);
/// assert_eq!(evaluate_polynomial!(5.0f32; 4.0), 4.0);
/// assert_eq!(evaluate_polynomial!(2.0f64; 1, 2, 3), 17.0);
/// ```
#[macro_export]
macro_rules! evaluate_polynomial {
    ($t:expr; $c:expr $(,)?) => {{
        let t = $t;
        $crate::math::polynomial::cast_like(t, $c)
    }};
    ($t:expr; $c:expr, $($rest:expr),+ $(,)?) => {{
        let t = $t;
        $crate::math::fma(
            t,
            $crate::evaluate_polynomial!(t; $($rest),+),
            $crate::math::polynomial::cast_like(t, $c),
        )
    }};
}

/// Converts coefficient `c` to the float type of `_like`.
///
/// A value with no representation in `T` becomes NaN.
#[doc(hidden)]
#[inline(always)]
pub fn cast_like<T: Float, C: ToPrimitive>(_like: T, c: C) -> T {
    T::from(c).unwrap_or_else(T::nan)
}

/// Slice form of [`evaluate_polynomial!`]: `coefficients[i]` multiplies `t^i`.
///
/// An empty slice evaluates to zero.
#[inline]
pub fn evaluate_polynomial<T: Float>(t: T, coefficients: &[T]) -> T {
    match coefficients.split_last() {
        None => T::zero(),
        Some((&highest, lower)) => lower
            .iter()
            .rev()
            .fold(highest, |acc, &c| fma(t, acc, c)),
    }
}

/// `a*b - c*d` with the rounding error of `c*d` compensated (Kahan).
///
/// Requires a true fused multiply-add; with a separate multiply and add the
/// error term is always zero.
#[inline]
pub fn difference_of_products<T: Float>(a: T, b: T, c: T, d: T) -> T {
    let cd = c * d;
    let difference = fma(a, b, -cd);
    let error = fma(-c, d, cd);
    difference + error
}

/// `a*b + c*d` with the rounding error of `c*d` compensated.
#[inline]
pub fn sum_of_products<T: Float>(a: T, b: T, c: T, d: T) -> T {
    let cd = c * d;
    let sum = fma(a, b, cd);
    let error = fma(c, d, -cd);
    sum + error
}

/// Real roots of `a*t^2 + b*t + c = 0`, smaller root first.
///
/// Returns `None` when the discriminant is negative. A discriminant whose
/// square root is within [`APPROX_EPSILON`] of zero yields the repeated root
/// twice. Otherwise the roots come from `q = -(b + sign(b)*sqrt(disc)) / 2`
/// as `q/a` and `c/q`, which avoids cancellation between `b` and the
/// square root.
///
/// `a` must be non-zero; this is only checked in debug builds. See
/// [`try_quadratic`].
///
/// ```
/// use slib_core::math::quadratic;
///
/// assert_eq!(quadratic(1.0f64, -3.0, 2.0), Some((1.0, 2.0)));
/// assert_eq!(quadratic(1.0f64, 0.0, 1.0), None);
/// ```
pub fn quadratic<T: Float>(a: T, b: T, c: T) -> Option<(T, T)> {
    debug_assert!(a != T::zero(), "quadratic: leading coefficient is zero");

    let four = T::one() + T::one() + T::one() + T::one();
    let half = T::one() / (T::one() + T::one());

    let disc = difference_of_products(b, b, four * a, c);
    if disc < T::zero() {
        return None;
    }

    let root_disc = disc.sqrt();
    let eps = T::from(APPROX_EPSILON).unwrap_or_else(T::epsilon);
    if approx_eq(root_disc, T::zero(), eps) {
        let t = -half * b / a;
        return Some((t, t));
    }

    let q = -half * (b + root_disc.copysign(b));
    let t0 = q / a;
    let t1 = c / q;
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}

/// [`quadratic`] that rejects a zero leading coefficient instead of
/// asserting.
pub fn try_quadratic<T: Float>(a: T, b: T, c: T) -> MathResult<Option<(T, T)>> {
    if a == T::zero() {
        log::debug!("quadratic: rejected zero leading coefficient");
        return Err(MathError::DegenerateQuadratic);
    }
    if a.is_nan() || b.is_nan() || c.is_nan() {
        log::debug!("quadratic: rejected NaN coefficient");
        return Err(MathError::NotANumber {
            operation: "quadratic",
        });
    }
    Ok(quadratic(a, b, c))
}
