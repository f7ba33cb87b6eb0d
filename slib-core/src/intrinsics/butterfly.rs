// =============================================================================
// Butterfly Networks
// =============================================================================
//
// Width-specialized swap networks. Each stage exchanges adjacent groups of
// 2^k bits; log2(W) stages reverse the bit order, the upper three stages alone
// reverse the byte order.

/// Per-width bit and byte reversal kernels.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`; use [`crate::intrinsics::reverse_bits`]
/// and [`crate::intrinsics::bit_swap`] rather than calling these directly.
pub trait Butterfly: Copy {
    /// Reverses the order of all bits.
    fn reverse_bits_network(self) -> Self;

    /// Reverses the order of all bytes.
    fn swap_bytes_network(self) -> Self;
}

impl Butterfly for u8 {
    #[inline(always)]
    fn reverse_bits_network(self) -> Self {
        let mut v = self;
        v = ((v & 0xF0) >> 4) | ((v & 0x0F) << 4);
        v = ((v & 0xCC) >> 2) | ((v & 0x33) << 2);
        v = ((v & 0xAA) >> 1) | ((v & 0x55) << 1);
        v
    }

    #[inline(always)]
    fn swap_bytes_network(self) -> Self {
        self
    }
}

impl Butterfly for u16 {
    #[inline(always)]
    fn reverse_bits_network(self) -> Self {
        let mut v = self;
        v = ((v & 0xFF00) >> 8) | ((v & 0x00FF) << 8);
        v = ((v & 0xF0F0) >> 4) | ((v & 0x0F0F) << 4);
        v = ((v & 0xCCCC) >> 2) | ((v & 0x3333) << 2);
        v = ((v & 0xAAAA) >> 1) | ((v & 0x5555) << 1);
        v
    }

    #[inline(always)]
    fn swap_bytes_network(self) -> Self {
        (self >> 8) | (self << 8)
    }
}

impl Butterfly for u32 {
    #[inline(always)]
    fn reverse_bits_network(self) -> Self {
        let mut v = self;
        v = ((v & 0xFFFF0000) >> 16) | ((v & 0x0000FFFF) << 16);
        v = ((v & 0xFF00FF00) >> 8) | ((v & 0x00FF00FF) << 8);
        v = ((v & 0xF0F0F0F0) >> 4) | ((v & 0x0F0F0F0F) << 4);
        v = ((v & 0xCCCCCCCC) >> 2) | ((v & 0x33333333) << 2);
        v = ((v & 0xAAAAAAAA) >> 1) | ((v & 0x55555555) << 1);
        v
    }

    #[inline(always)]
    fn swap_bytes_network(self) -> Self {
        let v = self;
        (v << 24) | ((v << 8) & 0x00FF0000) | ((v >> 8) & 0x0000FF00) | (v >> 24)
    }
}

impl Butterfly for u64 {
    #[inline(always)]
    fn reverse_bits_network(self) -> Self {
        let mut v = self.swap_bytes_network();
        v = ((v & 0xF0F0F0F0F0F0F0F0) >> 4) | ((v & 0x0F0F0F0F0F0F0F0F) << 4);
        v = ((v & 0xCCCCCCCCCCCCCCCC) >> 2) | ((v & 0x3333333333333333) << 2);
        v = ((v & 0xAAAAAAAAAAAAAAAA) >> 1) | ((v & 0x5555555555555555) << 1);
        v
    }

    #[inline(always)]
    fn swap_bytes_network(self) -> Self {
        let mut v = self;
        v = ((v & 0x00000000FFFFFFFF) << 32) | ((v & 0xFFFFFFFF00000000) >> 32);
        v = ((v & 0x0000FFFF0000FFFF) << 16) | ((v & 0xFFFF0000FFFF0000) >> 16);
        v = ((v & 0x00FF00FF00FF00FF) << 8) | ((v & 0xFF00FF00FF00FF00) >> 8);
        v
    }
}
