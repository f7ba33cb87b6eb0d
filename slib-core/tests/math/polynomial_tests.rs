//! Tests for Horner evaluation, compensated products and quadratic roots.

use approx::assert_relative_eq;

use slib_core::evaluate_polynomial;
use slib_core::math::{difference_of_products, quadratic, sum_of_products};

// =========================================================================
// Polynomial evaluation
// =========================================================================

#[test]
fn test_macro_constant_term_first() {
    // 1 + 2t + 3t^2
    assert_eq!(evaluate_polynomial!(2.0f64; 1.0, 2.0, 3.0), 17.0);
    assert_eq!(evaluate_polynomial!(0.0f64; 1.0, 2.0, 3.0), 1.0);
    assert_eq!(evaluate_polynomial!(-1.0f64; 1.0, 2.0, 3.0), 2.0);
}

#[test]
fn test_macro_single_coefficient() {
    assert_eq!(evaluate_polynomial!(123.0f32; 7.5), 7.5);
}

#[test]
fn test_macro_converts_coefficients() {
    // Integer coefficients
    assert_eq!(evaluate_polynomial!(2.0f64; 1, 2, 3), 17.0);
    assert_eq!(evaluate_polynomial!(3.0f32; 5u8), 5.0);
    // Narrower float coefficients with a wider t
    assert_eq!(evaluate_polynomial!(0.5f64; 1.0f32, 2.0f32, 4.0f32), 3.0);
    // Mixed types in one call
    assert_eq!(evaluate_polynomial!(-1.0f32; 1u16, 2.0f64, 3i32), 2.0);
}

#[test]
fn test_macro_evaluates_t_once() {
    let mut calls = 0;
    let mut next = || {
        calls += 1;
        3.0f64
    };
    let value = evaluate_polynomial!(next(); 1.0, 1.0, 1.0, 1.0);
    assert_eq!(value, 40.0);
    assert_eq!(calls, 1);
}

#[test]
fn test_slice_matches_macro() {
    let coefficients = [0.5f64, -1.25, 2.0, 0.125, -3.0];
    for &t in &[-2.0, -0.5, 0.0, 0.75, 1.0, 4.0] {
        let from_slice = slib_core::math::evaluate_polynomial(t, &coefficients);
        let from_macro = evaluate_polynomial!(t; 0.5, -1.25, 2.0, 0.125, -3.0);
        assert_eq!(from_slice, from_macro, "t = {t}");
    }
}

#[test]
fn test_slice_empty_and_single() {
    assert_eq!(slib_core::math::evaluate_polynomial::<f64>(2.0, &[]), 0.0);
    assert_eq!(slib_core::math::evaluate_polynomial(2.0f32, &[9.0]), 9.0);
}

#[test]
fn test_slice_exp_series() {
    // Truncated Taylor series of e^t
    let coefficients = [1.0, 1.0, 1.0 / 2.0, 1.0 / 6.0, 1.0 / 24.0, 1.0 / 120.0, 1.0 / 720.0];
    let value = slib_core::math::evaluate_polynomial(0.1f64, &coefficients);
    assert_relative_eq!(value, 0.1f64.exp(), max_relative = 1e-9);
}

// =========================================================================
// Compensated products
// =========================================================================

#[test]
fn test_difference_of_products_exact_cases() {
    assert_eq!(difference_of_products(3.0f64, 4.0, 2.0, 5.0), 2.0);
    assert_eq!(difference_of_products(1.5f32, 2.0, 1.0, 3.0), 0.0);
}

#[test]
fn test_sum_of_products_exact_cases() {
    assert_eq!(sum_of_products(3.0f64, 4.0, 2.0, 5.0), 22.0);
    assert_eq!(sum_of_products(-1.0f32, 2.0, 1.0, 2.0), 0.0);
}

#[test]
fn test_difference_of_products_recovers_cancelled_bits() {
    // a*a - b*b with a = 1 + 2^-30, b = 1: the exact answer is
    // 2^-29 + 2^-60, whose low term vanishes when both products round first
    let a = 1.0 + 2f64.powi(-30);
    let exact = 2f64.powi(-29) + 2f64.powi(-60);

    let naive = a * a - 1.0 * 1.0;
    let compensated = difference_of_products(a, a, 1.0, 1.0);

    assert_ne!(naive, exact);
    assert_eq!(compensated, exact);
}

#[test]
fn test_sum_of_products_recovers_rounding_of_cd() {
    // c*d = (1 + 2^-30)^2 is not representable; the compensation term adds
    // back what rounding it dropped
    let c = 1.0 + 2f64.powi(-30);
    let exact = 2f64.powi(-29) + 2f64.powi(-60);

    let compensated = sum_of_products(-1.0, 1.0, c, c);
    assert_eq!(compensated, exact);
}

// =========================================================================
// Quadratic roots
// =========================================================================

#[test]
fn test_quadratic_two_roots_ordered() {
    assert_eq!(quadratic(1.0f64, -3.0, 2.0), Some((1.0, 2.0)));
    assert_eq!(quadratic(1.0f64, 3.0, 2.0), Some((-2.0, -1.0)));
    assert_eq!(quadratic(1.0f64, 0.0, -4.0), Some((-2.0, 2.0)));
}

#[test]
fn test_quadratic_divides_by_leading_coefficient() {
    // 2t^2 - 6t + 4 = 2(t - 1)(t - 2)
    assert_eq!(quadratic(2.0f64, -6.0, 4.0), Some((1.0, 2.0)));
    // -t^2 + 1 opens downward; roots still come out ascending
    assert_eq!(quadratic(-1.0f64, 0.0, 1.0), Some((-1.0, 1.0)));
}

#[test]
fn test_quadratic_repeated_root() {
    assert_eq!(quadratic(1.0f64, -2.0, 1.0), Some((1.0, 1.0)));
    assert_eq!(quadratic(4.0f32, 4.0, 1.0), Some((-0.5, -0.5)));
}

#[test]
fn test_quadratic_no_real_roots() {
    assert_eq!(quadratic(1.0f64, 0.0, 1.0), None);
    assert_eq!(quadratic(1.0f32, 1.0, 1.0), None);
}

#[test]
fn test_quadratic_zero_constant_term() {
    // t(t - 5): one root is exactly zero
    let (t0, t1) = quadratic(1.0f64, -5.0, 0.0).unwrap();
    assert_eq!(t0, 0.0);
    assert_eq!(t1, 5.0);
}

#[test]
fn test_quadratic_no_cancellation_for_small_root() {
    // Roots 1e-8 and 1e8: the textbook formula loses the small root entirely
    let (small, large) = quadratic(1.0f64, -(1e8 + 1e-8), 1.0).unwrap();
    assert_relative_eq!(small, 1e-8, max_relative = 1e-12);
    assert_relative_eq!(large, 1e8, max_relative = 1e-12);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "leading coefficient")]
fn test_quadratic_zero_leading_coefficient_panics_in_debug() {
    quadratic(0.0f64, 1.0, 1.0);
}
