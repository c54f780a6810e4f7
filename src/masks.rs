//! Conversion between format descriptors and per-channel bit masks.
//!
//! A packed format is equivalently described by its bits-per-pixel plus
//! four channel masks; each mask decomposes into a shift (lowest set bit)
//! and a width (population count). Conversion runs in both directions:
//! [`PixelFormat::to_masks`] derives the masks from the order and layout
//! fields, and [`PixelFormat::from_masks`] searches the catalog for the
//! descriptor matching a set of masks, degrading to
//! [`PixelFormat::UNKNOWN`] rather than failing.

use thiserror::Error;

use crate::bits::{mask_shift, mask_width};
use crate::pixel_format::{ChannelOrder, PackedLayout, PackedOrder, PixelFormat};

/// Per-channel bit masks equivalent of a pixel format.
///
/// A channel absent from the format has mask 0. Formats that are not
/// packed bitfields (indexed and array classes) have all-zero masks but a
/// meaningful bits-per-pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatMasks {
    /// Total bits occupied by one pixel.
    pub bits_per_pixel: u8,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
}

impl FormatMasks {
    /// Bit width of one channel mask (its population count).
    pub const fn channel_width(mask: u32) -> u32 {
        mask_width(mask)
    }

    /// Shift amount of one channel mask (position of its lowest set bit;
    /// 0 for an empty mask).
    pub const fn channel_shift(mask: u32) -> u32 {
        mask_shift(mask)
    }
}

/// Error from [`PixelFormat::to_masks`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MaskError {
    /// The format has no per-channel bit-mask representation (a FourCC
    /// format, or a packed word with an unassigned order or layout).
    #[error("{0} has no bit-mask representation")]
    NotRepresentable(PixelFormat),
}

/// True when the mask is a single contiguous run of set bits (or empty).
const fn contiguous(mask: u32) -> bool {
    let width = mask_width(mask);
    let run = if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    };
    (run << mask_shift(mask)) == mask
}

impl PixelFormat {
    /// Derive the per-channel bit masks of this format.
    ///
    /// Packed formats yield one mask per channel from their layout and
    /// order; indexed and array formats yield all-zero masks with the
    /// format's bits-per-pixel. FourCC formats (and packed words with an
    /// unassigned order or layout) have no mask representation and fail.
    pub fn to_masks(self) -> Result<FormatMasks, MaskError> {
        if self.is_fourcc() {
            return Err(MaskError::NotRepresentable(self));
        }
        if !self.is_packed() {
            return Ok(FormatMasks {
                bits_per_pixel: self.bits_per_pixel(),
                ..FormatMasks::default()
            });
        }

        let layout = self.layout();
        if layout == PackedLayout::None {
            return Err(MaskError::NotRepresentable(self));
        }

        // Build the four slot masks from the layout widths, then hand each
        // slot to its channel according to the order. Slot 0 is the most
        // significant field.
        let widths = layout.slot_widths();
        let mut slots = [0u32; 4];
        let mut shift = 0;
        for i in (0..4).rev() {
            slots[i] = ((1u32 << widths[i]) - 1) << shift;
            shift += widths[i];
        }

        let order = match self.order() {
            ChannelOrder::Packed(order) => order,
            _ => PackedOrder::None,
        };
        let (red, green, blue, alpha) = match order {
            PackedOrder::Xrgb => (slots[1], slots[2], slots[3], 0),
            PackedOrder::Rgbx => (slots[0], slots[1], slots[2], 0),
            PackedOrder::Argb => (slots[1], slots[2], slots[3], slots[0]),
            PackedOrder::Rgba => (slots[0], slots[1], slots[2], slots[3]),
            PackedOrder::Xbgr => (slots[3], slots[2], slots[1], 0),
            PackedOrder::Bgrx => (slots[2], slots[1], slots[0], 0),
            PackedOrder::Abgr => (slots[3], slots[2], slots[1], slots[0]),
            PackedOrder::Bgra => (slots[2], slots[1], slots[0], slots[3]),
            PackedOrder::None => return Err(MaskError::NotRepresentable(self)),
        };

        Ok(FormatMasks {
            bits_per_pixel: self.bits_per_pixel(),
            red,
            green,
            blue,
            alpha,
        })
    }

    /// Find the catalog descriptor matching a set of channel masks.
    ///
    /// All-zero masks resolve by bit depth alone to the conventional
    /// defaults (most-significant-first indexed formats, RGB24, XRGB8888).
    /// Otherwise each mask is decomposed into shift and width and compared
    /// against the packed catalog; the caller's bit depth may name either
    /// the format's occupied bits or its container size (15 and 16 both
    /// match the 1555 layouts).
    ///
    /// Masks matching no catalog entry return [`PixelFormat::UNKNOWN`];
    /// callers must check for it explicitly.
    pub fn from_masks(masks: FormatMasks) -> PixelFormat {
        let FormatMasks {
            bits_per_pixel: bpp,
            red,
            green,
            blue,
            alpha,
        } = masks;

        if red == 0 && green == 0 && blue == 0 && alpha == 0 {
            return match bpp {
                1 => PixelFormat::INDEX1MSB,
                2 => PixelFormat::INDEX2MSB,
                4 => PixelFormat::INDEX4MSB,
                8 => PixelFormat::INDEX8,
                24 => PixelFormat::RGB24,
                32 => PixelFormat::XRGB8888,
                _ => PixelFormat::UNKNOWN,
            };
        }

        // A catalog layout is a sequence of contiguous fields; fragmented
        // masks cannot match anything.
        if !(contiguous(red) && contiguous(green) && contiguous(blue) && contiguous(alpha)) {
            return PixelFormat::UNKNOWN;
        }

        for &format in PixelFormat::KNOWN {
            if !format.is_packed() {
                continue;
            }
            let Ok(candidate) = format.to_masks() else {
                continue;
            };
            let container_bits = format.bytes_per_pixel() as u32 * 8;
            let depth_matches =
                bpp == format.bits_per_pixel() || bpp as u32 == container_bits;
            if depth_matches
                && candidate.red == red
                && candidate.green == green
                && candidate.blue == blue
                && candidate.alpha == alpha
            {
                return format;
            }
        }
        PixelFormat::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_masks() {
        let m = PixelFormat::RGB565.to_masks().unwrap();
        assert_eq!(m.bits_per_pixel, 16);
        assert_eq!(m.red, 0xF800);
        assert_eq!(m.green, 0x07E0);
        assert_eq!(m.blue, 0x001F);
        assert_eq!(m.alpha, 0);
        assert_eq!(FormatMasks::channel_shift(m.red), 11);
        assert_eq!(FormatMasks::channel_width(m.red), 5);
        assert_eq!(FormatMasks::channel_width(m.green), 6);
    }

    #[test]
    fn bgr565_swaps_red_and_blue() {
        let m = PixelFormat::BGR565.to_masks().unwrap();
        assert_eq!(m.blue, 0xF800);
        assert_eq!(m.green, 0x07E0);
        assert_eq!(m.red, 0x001F);
    }

    #[test]
    fn argb8888_masks() {
        let m = PixelFormat::ARGB8888.to_masks().unwrap();
        assert_eq!(m.alpha, 0xFF00_0000);
        assert_eq!(m.red, 0x00FF_0000);
        assert_eq!(m.green, 0x0000_FF00);
        assert_eq!(m.blue, 0x0000_00FF);
    }

    #[test]
    fn xrgb8888_has_no_alpha_mask() {
        let m = PixelFormat::XRGB8888.to_masks().unwrap();
        assert_eq!(m.alpha, 0);
        assert_eq!(m.red, 0x00FF_0000);
        assert_eq!(m.bits_per_pixel, 24);
    }

    #[test]
    fn argb2101010_masks() {
        let m = PixelFormat::ARGB2101010.to_masks().unwrap();
        assert_eq!(m.alpha, 0xC000_0000);
        assert_eq!(m.red, 0x3FF0_0000);
        assert_eq!(m.green, 0x000F_FC00);
        assert_eq!(m.blue, 0x0000_03FF);
    }

    #[test]
    fn rgba5551_alpha_in_low_bit() {
        let m = PixelFormat::RGBA5551.to_masks().unwrap();
        assert_eq!(m.red, 0xF800);
        assert_eq!(m.green, 0x07C0);
        assert_eq!(m.blue, 0x003E);
        assert_eq!(m.alpha, 0x0001);
    }

    #[test]
    fn fourcc_not_representable() {
        let err = PixelFormat::YV12.to_masks().unwrap_err();
        assert_eq!(err, MaskError::NotRepresentable(PixelFormat::YV12));
        assert!(PixelFormat::NV12.to_masks().is_err());
        assert!(PixelFormat::P010.to_masks().is_err());
    }

    #[test]
    fn not_representable_message_names_the_format() {
        let err = PixelFormat::YV12.to_masks().unwrap_err();
        assert_eq!(
            alloc::format!("{err}"),
            "YV12 has no bit-mask representation"
        );
    }

    #[test]
    fn non_packed_formats_report_zero_masks() {
        let m = PixelFormat::INDEX8.to_masks().unwrap();
        assert_eq!(m.bits_per_pixel, 8);
        assert_eq!((m.red, m.green, m.blue, m.alpha), (0, 0, 0, 0));
        let m = PixelFormat::RGB24.to_masks().unwrap();
        assert_eq!(m.bits_per_pixel, 24);
        assert_eq!(m.red, 0);
        let m = PixelFormat::RGBA128_FLOAT.to_masks().unwrap();
        assert_eq!(m.bits_per_pixel, 128);
        assert_eq!(m.alpha, 0);
    }

    #[test]
    fn packed_catalog_roundtrips_through_masks() {
        for &format in PixelFormat::KNOWN {
            if !format.is_packed() {
                continue;
            }
            let masks = format.to_masks().unwrap();
            assert_eq!(
                PixelFormat::from_masks(masks),
                format,
                "mask round trip failed for {format}"
            );
        }
    }

    #[test]
    fn from_masks_by_literal_565() {
        let format = PixelFormat::from_masks(FormatMasks {
            bits_per_pixel: 16,
            red: 0xF800,
            green: 0x07E0,
            blue: 0x001F,
            alpha: 0,
        });
        assert_eq!(format, PixelFormat::RGB565);
    }

    #[test]
    fn from_masks_accepts_container_depth() {
        // XRGB8888 occupies 24 bits of a 32-bit container; callers name it
        // either way.
        let masks = FormatMasks {
            bits_per_pixel: 32,
            red: 0x00FF_0000,
            green: 0x0000_FF00,
            blue: 0x0000_00FF,
            alpha: 0,
        };
        assert_eq!(PixelFormat::from_masks(masks), PixelFormat::XRGB8888);

        // 15- and 16-bit depths both name the 1555 layouts.
        for bpp in [15u8, 16] {
            let masks = FormatMasks {
                bits_per_pixel: bpp,
                red: 0x7C00,
                green: 0x03E0,
                blue: 0x001F,
                alpha: 0,
            };
            assert_eq!(PixelFormat::from_masks(masks), PixelFormat::XRGB1555);
        }
    }

    #[test]
    fn from_masks_argb4444() {
        let masks = FormatMasks {
            bits_per_pixel: 16,
            red: 0x0F00,
            green: 0x00F0,
            blue: 0x000F,
            alpha: 0xF000,
        };
        assert_eq!(PixelFormat::from_masks(masks), PixelFormat::ARGB4444);
    }

    #[test]
    fn unsupported_channel_order_degrades_to_unknown() {
        // A 4-4-4-4 arrangement with red on top and alpha in the low
        // nibble's neighbor matches no catalog order.
        let masks = FormatMasks {
            bits_per_pixel: 16,
            red: 0xF000,
            green: 0x000F,
            blue: 0x00F0,
            alpha: 0x0F00,
        };
        assert_eq!(PixelFormat::from_masks(masks), PixelFormat::UNKNOWN);
    }

    #[test]
    fn fragmented_mask_degrades_to_unknown() {
        let masks = FormatMasks {
            bits_per_pixel: 16,
            red: 0xF00F,
            green: 0x0F00,
            blue: 0x00F0,
            alpha: 0,
        };
        assert_eq!(PixelFormat::from_masks(masks), PixelFormat::UNKNOWN);
    }

    #[test]
    fn zero_masks_resolve_by_depth() {
        let by_depth = |bpp| {
            PixelFormat::from_masks(FormatMasks {
                bits_per_pixel: bpp,
                ..FormatMasks::default()
            })
        };
        assert_eq!(by_depth(1), PixelFormat::INDEX1MSB);
        assert_eq!(by_depth(2), PixelFormat::INDEX2MSB);
        assert_eq!(by_depth(4), PixelFormat::INDEX4MSB);
        assert_eq!(by_depth(8), PixelFormat::INDEX8);
        assert_eq!(by_depth(24), PixelFormat::RGB24);
        assert_eq!(by_depth(32), PixelFormat::XRGB8888);
        assert_eq!(by_depth(7), PixelFormat::UNKNOWN);
        assert_eq!(by_depth(0), PixelFormat::UNKNOWN);
    }

    #[test]
    fn rgb332_masks_and_back() {
        let m = PixelFormat::RGB332.to_masks().unwrap();
        assert_eq!(m.bits_per_pixel, 8);
        assert_eq!(m.red, 0xE0);
        assert_eq!(m.green, 0x1C);
        assert_eq!(m.blue, 0x03);
        assert_eq!(PixelFormat::from_masks(m), PixelFormat::RGB332);
    }

    #[test]
    fn composed_packed_word_without_layout_is_not_representable() {
        use crate::pixel_format::PixelType;
        let bogus = PixelFormat::new(
            PixelType::Packed16,
            ChannelOrder::Packed(PackedOrder::Argb),
            PackedLayout::None,
            16,
            2,
        );
        assert!(bogus.to_masks().is_err());
    }
}
