//! Tests for the byte-size helpers.

use slib_core::memory::{gb, gib, kb, kib, max_allocation_size, mb, mib, MAX_DYNAMIC_SIZE};

#[test]
fn test_decimal_units() {
    assert_eq!(kb(1), 1_000);
    assert_eq!(kb(3), 3_000);
    assert_eq!(mb(1), 1_000_000);
    assert_eq!(mb(0), 0);
    assert_eq!(gb(2), 2_000_000_000);
}

#[test]
fn test_binary_units() {
    assert_eq!(kib(1), 1 << 10);
    assert_eq!(kib(4), 4096);
    assert_eq!(mib(1), 1 << 20);
    assert_eq!(gib(1), 1 << 30);
}

#[test]
fn test_units_are_const() {
    const PAGE: usize = kib(4);
    const TABLE: [u8; kib(1)] = [0; kib(1)];
    assert_eq!(PAGE, 4096);
    assert_eq!(TABLE.len(), 1024);
}

#[test]
fn test_limits() {
    assert_eq!(MAX_DYNAMIC_SIZE, 32 * 1024 * 1024);
    assert!(max_allocation_size() >= MAX_DYNAMIC_SIZE);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_allocation_limit_on_64_bit() {
    use slib_core::memory::MAX_ALLOCATION_SIZE;

    assert_eq!(MAX_ALLOCATION_SIZE, gib(16));
    assert_eq!(max_allocation_size(), MAX_ALLOCATION_SIZE);
}
