// =============================================================================
// Math Module
// =============================================================================
//
// Floating-point helpers: fused multiply-add, fast approximations, polynomial
// evaluation, compensated products and hash mixing.

/// Fused multiply-add, tolerance checks, fast sqrt / cbrt / rsqrt.
pub mod common;

/// Horner evaluation, compensated products, quadratic roots.
pub mod polynomial;

/// Seed-based hash combining.
pub mod hash;

pub use common::{
    approx_cbrt, approx_eq, approx_ne, approx_sqrt, fma, recip_sqrt_fast, try_approx_cbrt,
    try_approx_sqrt, try_recip_sqrt_fast, FastRecipSqrt, APPROX_EPSILON,
};
pub use hash::{hash_combine, hash_combine_with};
pub use polynomial::{
    difference_of_products, evaluate_polynomial, quadratic, sum_of_products, try_quadratic,
};
