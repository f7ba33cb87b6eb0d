//! # slib-core: Bit Manipulation and Fast Numeric Kernels
//!
//! `slib-core` is a `no_std`, zero-allocation library of small numeric building
//! blocks: bit counting and permutation over fixed-width unsigned integers,
//! power-of-two rounding and alignment, bit-trick approximations of square
//! root, cube root and reciprocal square root, and FMA-compensated polynomial
//! and product evaluation.
//!
//! ## Overview
//!
//! Every function is pure and stateless. The library is organized in layers:
//!
//! 1. **Bit primitives** - leading/trailing zero counts and popcount, supplied
//!    by a provider selected at build time ([`intrinsics::ActiveBits`])
//! 2. **Bit kernel** - derived queries, permutations, single-bit access and
//!    alignment built on those primitives ([`intrinsics`])
//! 3. **Float kernel** - FMA, fast approximations, polynomials and quadratic
//!    roots ([`math`])
//!
//! ## Bit Primitive Providers
//!
//! | Provider | Implementation | Availability |
//! |----------|----------------|--------------|
//! | [`intrinsics::Intrinsic`] | core `leading_zeros` / `trailing_zeros` / `count_ones` | everywhere |
//! | `intrinsics::Hardware` | explicit LZCNT / TZCNT / POPCNT | x86_64 with `lzcnt`, `bmi1`, `popcnt` |
//! | [`intrinsics::Portable`] | shift-and-test loops | everywhere |
//!
//! The `portable-bits` feature forces [`intrinsics::Portable`]. All providers
//! return identical results for every input; the test suite checks this
//! exhaustively for `u8`/`u16` and by property tests for `u32`/`u64`.
//!
//! ## Quick Start
//!
//! ```
//! use slib_core::intrinsics::{bit_ceil, count_leading_zeros, rotate_left};
//! use slib_core::math::{approx_sqrt, quadratic};
//!
//! assert_eq!(count_leading_zeros(0u32), 32);
//! assert_eq!(bit_ceil(17u16), 32);
//! assert_eq!(rotate_left(0x81u8, -1), 0xC0);
//!
//! assert!((approx_sqrt(4.0) - 2.0).abs() < 1e-3);
//! assert_eq!(quadratic(1.0f64, -3.0, 2.0), Some((1.0, 2.0)));
//! ```
//!
//! ## Preconditions
//!
//! Bit operations are total. The fast float kernels check their preconditions
//! with `debug_assert!` only; each has a `try_*` counterpart returning
//! [`MathError`] for callers that need a recoverable result.
//!
//! ## Module Organization
//!
//! - [`num`] - Scalar aliases and the [`UnsignedInt`] concept
//! - [`intrinsics`] - Bit primitives, queries, permutations, alignment
//! - [`math`] - FMA, approximations, polynomials, hash mixing
//! - [`memory`] - Byte-size helpers
//! - [`logger`] - Injectable leveled logger
//! - [`error`] - Recoverable precondition failures

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Scalar aliases and the unsigned-integer concept.
pub mod num;

/// Bit counting, permutation, single-bit access and alignment.
pub mod intrinsics;

/// Floating-point kernels.
pub mod math;

/// Byte-size helpers.
pub mod memory;

/// Injectable leveled logger.
pub mod logger;

/// Errors reported by the checked kernels.
pub mod error;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Numeric concepts
pub use num::{cast_to, Float, FloatBits, Size, UnsignedInt};

// Provider selection
pub use intrinsics::{ActiveBits, BitPrimitives};

// Errors
pub use error::{MathError, MathResult};

// Logging
pub use logger::{Level, Logger};
