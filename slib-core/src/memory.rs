//! Byte-size helpers.
//!
//! Decimal (`kb`, `mb`, `gb`: powers of 1000) and binary (`kib`, `mib`, `gib`:
//! powers of 1024) multiples, usable in `const` context.
//!
//! ```
//! use slib_core::memory::{kib, mb};
//!
//! const SCRATCH: usize = kib(4);
//! assert_eq!(SCRATCH, 4096);
//! assert_eq!(mb(1), 1_000_000);
//! ```

use crate::num::Size;

/// `size * unit^level`, wrapping on overflow.
const fn scale(size: Size, unit: Size, level: u32) -> Size {
    let mut result = size;
    let mut i = 0;
    while i < level {
        result = result.wrapping_mul(unit);
        i += 1;
    }
    result
}

/// `size * 1000`.
pub const fn kb(size: Size) -> Size {
    scale(size, 1000, 1)
}

/// `size * 1000^2`.
pub const fn mb(size: Size) -> Size {
    scale(size, 1000, 2)
}

/// `size * 1000^3`.
pub const fn gb(size: Size) -> Size {
    scale(size, 1000, 3)
}

/// `size * 1024`.
pub const fn kib(size: Size) -> Size {
    scale(size, 1024, 1)
}

/// `size * 1024^2`.
pub const fn mib(size: Size) -> Size {
    scale(size, 1024, 2)
}

/// `size * 1024^3`.
pub const fn gib(size: Size) -> Size {
    scale(size, 1024, 3)
}

/// Upper bound for a single allocation request (16 GiB).
///
/// Only defined for 64-bit targets; [`max_allocation_size`] works everywhere.
#[cfg(target_pointer_width = "64")]
pub const MAX_ALLOCATION_SIZE: Size = gib(16);

/// Upper bound for dynamically sized scratch buffers (32 MiB).
pub const MAX_DYNAMIC_SIZE: Size = mib(32);

/// Upper bound for a single allocation request on the current target:
/// 16 GiB, clamped to `usize::MAX`.
pub const fn max_allocation_size() -> Size {
    match 16usize.checked_mul(1 << 30) {
        Some(size) => size,
        None => Size::MAX,
    }
}
