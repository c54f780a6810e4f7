//! Bit-field extraction and mask decomposition primitives.
//!
//! A channel mask decomposes into a shift (position of its lowest set bit)
//! and a width (its population count); every mask built here is
//! `((1 << width) - 1) << shift`.

/// Extract a `width`-bit field starting at bit `offset` of `word`.
pub(crate) const fn field(word: u32, offset: u32, width: u32) -> u32 {
    (word >> offset) & ((1 << width) - 1)
}

/// Bit position of the lowest set bit of `mask`, or 0 for an empty mask.
pub(crate) const fn mask_shift(mask: u32) -> u32 {
    if mask == 0 { 0 } else { mask.trailing_zeros() }
}

/// Number of set bits in `mask`.
pub(crate) const fn mask_width(mask: u32) -> u32 {
    mask.count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_extraction() {
        assert_eq!(field(0x1634_2004, 24, 4), 0x6);
        assert_eq!(field(0x1634_2004, 28, 4), 0x1);
        assert_eq!(field(0x1634_2004, 0, 8), 0x04);
        assert_eq!(field(0xFFFF_FFFF, 8, 8), 0xFF);
    }

    #[test]
    fn shift_and_width_of_565_red() {
        // Bits 11-15 set: a 5-bit field at offset 11.
        assert_eq!(mask_shift(0x0000_F800), 11);
        assert_eq!(mask_width(0x0000_F800), 5);
    }

    #[test]
    fn shift_of_empty_mask_is_zero() {
        assert_eq!(mask_shift(0), 0);
        assert_eq!(mask_width(0), 0);
    }

    #[test]
    fn mask_reconstructs_from_shift_and_width() {
        for mask in [0x0000_00FFu32, 0x0000_F800, 0x3FF0_0000, 0x8000_0000, 0x1] {
            let rebuilt = ((1u32 << mask_width(mask)) - 1) << mask_shift(mask);
            assert_eq!(rebuilt, mask);
        }
    }
}
