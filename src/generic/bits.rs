/*!
Interleaving of two 32-bit integers into a single 64-bit integer (aka. a Morton code).

The bits of the `hi` half occupy the odd positions of the result and the bits of the `lo` half occupy the even positions.
So, bit 0 of the result is bit 0 of `lo`, bit 1 of the result is bit 0 of `hi`, bit 2 of the result is bit 1 of `lo`, and so on.

```rust
# use otter_belief::generic::bits::{interleave, deinterleave};
let packed = interleave(0b11, 0b01);
assert_eq!(packed, 0b1011);
assert_eq!(deinterleave(packed), (0b11, 0b01));
```

As a consequence, two interleaved integers agree on their `hi` halves exactly when their XOR has no bit in common with [HI_MASK].
*/

/// The mask of all bits which originate from the `hi` half of an interleaving.
pub const HI_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// The mask of all bits which originate from the `lo` half of an interleaving.
pub const LO_MASK: u64 = 0x5555_5555_5555_5555;

/// Spreads the bits of `x` over the even positions of a `u64`.
#[inline]
fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & LO_MASK;
    x
}

/// The inverse of [spread], ignoring bits in odd positions.
#[inline]
fn compact(x: u64) -> u32 {
    let mut x = x & LO_MASK;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Interleaves `hi` and `lo`, with `hi` on the odd bit positions.
#[inline]
pub fn interleave(hi: u32, lo: u32) -> u64 {
    (spread(hi) << 1) | spread(lo)
}

/// Splits an interleaving back into its `(hi, lo)` halves.
#[inline]
pub fn deinterleave(packed: u64) -> (u32, u32) {
    (compact(packed >> 1), compact(packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(interleave(0, 0), 0);
        assert_eq!(interleave(u32::MAX, 0), HI_MASK);
        assert_eq!(interleave(0, u32::MAX), LO_MASK);
        assert_eq!(interleave(u32::MAX, u32::MAX), u64::MAX);
    }

    #[test]
    fn halves_survive() {
        for (hi, lo) in [(1, 2), (7, 0), (0, 7), (0xDEAD_BEEF, 0x1234_5678), (u32::MAX, 1)] {
            assert_eq!(deinterleave(interleave(hi, lo)), (hi, lo));
        }
    }

    #[test]
    fn hi_mask_separates_halves() {
        let a = interleave(42, 8);
        let b = interleave(42, 9);
        let c = interleave(43, 8);
        assert_eq!((a ^ b) & HI_MASK, 0);
        assert_ne!((a ^ c) & HI_MASK, 0);
    }
}
