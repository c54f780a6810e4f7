//! Pixel-format descriptor words.
//!
//! A pixel format is a single `u32`. For bit-layout formats the word packs a
//! flags nibble, a storage class ([`PixelType`]), a channel order, a packed
//! bit layout, and the total bit/byte widths:
//!
//! ```text
//! bits 28-31  flags (1 for every composed format)
//! bits 24-27  storage class
//! bits 20-23  channel order (interpretation depends on the storage class)
//! bits 16-19  packed bit layout
//! bits  8-15  bits per pixel
//! bits  0-7   bytes per pixel
//! ```
//!
//! Any word whose flags nibble is not 1 is instead a [`FourCc`] — four raw
//! ASCII bytes naming a codec-defined format (YV12, NV12, …) with no bit
//! layout of its own.
//!
//! The named constants are externally standardized words; their numeric
//! values are part of the public contract.

use core::fmt;
use core::fmt::Write as _;

use crate::bits::field;

/// Storage class of a pixel format: how pixel memory is organized.
///
/// The raw values are fixed by the external standard and appear in bits
/// 24-27 of the format word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum PixelType {
    #[default]
    Unknown = 0,
    /// 1-bit palette index (also the monochrome bitmap class).
    Index1 = 1,
    /// 4-bit palette index.
    Index4 = 2,
    /// 8-bit palette index.
    Index8 = 3,
    /// Channel bitfields packed into one byte.
    Packed8 = 4,
    /// Channel bitfields packed into one 16-bit word.
    Packed16 = 5,
    /// Channel bitfields packed into one 32-bit word.
    Packed32 = 6,
    /// One byte per channel.
    ArrayU8 = 7,
    /// One 16-bit integer per channel.
    ArrayU16 = 8,
    /// One 32-bit integer per channel.
    ArrayU32 = 9,
    /// One half-precision float per channel.
    ArrayF16 = 10,
    /// One single-precision float per channel.
    ArrayF32 = 11,
    /// 2-bit palette index.
    Index2 = 12,
}

impl PixelType {
    /// Decode from the 4-bit storage-class field.
    ///
    /// Returns [`Unknown`](PixelType::Unknown) for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Index1,
            2 => Self::Index4,
            3 => Self::Index8,
            4 => Self::Packed8,
            5 => Self::Packed16,
            6 => Self::Packed32,
            7 => Self::ArrayU8,
            8 => Self::ArrayU16,
            9 => Self::ArrayU32,
            10 => Self::ArrayF16,
            11 => Self::ArrayF32,
            12 => Self::Index2,
            _ => Self::Unknown,
        }
    }

    /// Whether this is one of the palette-indexed classes.
    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            Self::Index1 | Self::Index2 | Self::Index4 | Self::Index8
        )
    }

    /// Whether this is one of the packed-bitfield classes.
    pub const fn is_packed(self) -> bool {
        matches!(self, Self::Packed8 | Self::Packed16 | Self::Packed32)
    }

    /// Whether this is one of the per-channel array classes.
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::ArrayU8 | Self::ArrayU16 | Self::ArrayU32 | Self::ArrayF16 | Self::ArrayF32
        )
    }
}

/// Bit packing order for sub-byte indexed formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum BitmapOrder {
    #[default]
    None = 0,
    /// The pixel with the lowest index lives in the least significant bits.
    Lsb = 1,
    /// The pixel with the lowest index lives in the most significant bits.
    Msb = 2,
}

impl BitmapOrder {
    /// Decode from the 4-bit order field; `None` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Lsb,
            2 => Self::Msb,
            _ => Self::None,
        }
    }
}

/// Channel permutation for packed-bitfield formats, named from the most
/// significant field down. `X` is a padding field with no channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum PackedOrder {
    #[default]
    None = 0,
    Xrgb = 1,
    Rgbx = 2,
    Argb = 3,
    Rgba = 4,
    Xbgr = 5,
    Bgrx = 6,
    Abgr = 7,
    Bgra = 8,
}

impl PackedOrder {
    /// Decode from the 4-bit order field; `None` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Xrgb,
            2 => Self::Rgbx,
            3 => Self::Argb,
            4 => Self::Rgba,
            5 => Self::Xbgr,
            6 => Self::Bgrx,
            7 => Self::Abgr,
            8 => Self::Bgra,
            _ => Self::None,
        }
    }

    /// Whether the permutation includes an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Argb | Self::Rgba | Self::Abgr | Self::Bgra)
    }
}

/// Channel permutation for array formats, named in memory order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ArrayOrder {
    #[default]
    None = 0,
    Rgb = 1,
    Rgba = 2,
    Argb = 3,
    Bgr = 4,
    Bgra = 5,
    Abgr = 6,
}

impl ArrayOrder {
    /// Decode from the 4-bit order field; `None` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Rgb,
            2 => Self::Rgba,
            3 => Self::Argb,
            4 => Self::Bgr,
            5 => Self::Bgra,
            6 => Self::Abgr,
            _ => Self::None,
        }
    }

    /// Whether the permutation includes an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Argb | Self::Bgra | Self::Abgr)
    }
}

/// Channel order with the interpretation selected by the storage class.
///
/// The three order enumerations share the same 4-bit field but have
/// unrelated domains; exactly one applies to a given format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChannelOrder {
    #[default]
    None,
    /// Bit packing order of a sub-byte indexed format.
    Bitmap(BitmapOrder),
    /// Field permutation of a packed-bitfield format.
    Packed(PackedOrder),
    /// Memory-order permutation of an array format.
    Array(ArrayOrder),
}

impl ChannelOrder {
    /// Raw value for the 4-bit order field.
    pub const fn bits(self) -> u32 {
        match self {
            ChannelOrder::None => 0,
            ChannelOrder::Bitmap(o) => o as u32,
            ChannelOrder::Packed(o) => o as u32,
            ChannelOrder::Array(o) => o as u32,
        }
    }

    /// Whether the order places an alpha channel in any position.
    pub const fn has_alpha(self) -> bool {
        match self {
            ChannelOrder::Packed(o) => o.has_alpha(),
            ChannelOrder::Array(o) => o.has_alpha(),
            _ => false,
        }
    }
}

/// Sub-byte bit distribution of a packed format, field widths from the most
/// significant bit down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum PackedLayout {
    #[default]
    None = 0,
    /// 3-3-2 in one byte.
    L332 = 1,
    /// 4-4-4-4 in 16 bits.
    L4444 = 2,
    /// 1-5-5-5 in 16 bits.
    L1555 = 3,
    /// 5-5-5-1 in 16 bits.
    L5551 = 4,
    /// 5-6-5 in 16 bits.
    L565 = 5,
    /// 8-8-8-8 in 32 bits.
    L8888 = 6,
    /// 2-10-10-10 in 32 bits.
    L2101010 = 7,
    /// 10-10-10-2 in 32 bits.
    L1010102 = 8,
}

impl PackedLayout {
    /// Decode from the 4-bit layout field; `None` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::L332,
            2 => Self::L4444,
            3 => Self::L1555,
            4 => Self::L5551,
            5 => Self::L565,
            6 => Self::L8888,
            7 => Self::L2101010,
            8 => Self::L1010102,
            _ => Self::None,
        }
    }

    /// Field widths of the four layout slots, most significant slot first.
    ///
    /// Three-field layouts leave the top slot at width 0. A slot's shift is
    /// the sum of the widths below it.
    pub const fn slot_widths(self) -> [u32; 4] {
        match self {
            PackedLayout::None => [0, 0, 0, 0],
            PackedLayout::L332 => [0, 3, 3, 2],
            PackedLayout::L4444 => [4, 4, 4, 4],
            PackedLayout::L1555 => [1, 5, 5, 5],
            PackedLayout::L5551 => [5, 5, 5, 1],
            PackedLayout::L565 => [0, 5, 6, 5],
            PackedLayout::L8888 => [8, 8, 8, 8],
            PackedLayout::L2101010 => [2, 10, 10, 10],
            PackedLayout::L1010102 => [10, 10, 10, 2],
        }
    }
}

/// A four-character code: four ASCII bytes naming a codec-defined format.
///
/// The word stores the first character in the least significant byte, so
/// reading the four bytes in memory order on a little-endian host yields
/// the tag as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FourCc(pub(crate) u32);

impl FourCc {
    /// Build from the four tag characters as written, e.g. `FourCc::new(*b"YV12")`.
    pub const fn new(tag: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(tag))
    }

    /// The four tag characters as written.
    pub const fn bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// The packed tag word.
    pub const fn to_bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bytes() {
            let c = if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            };
            f.write_char(c)?;
        }
        Ok(())
    }
}

/// Decoded view of a pixel-format word, one variant per storage class.
///
/// Each variant carries only the fields meaningful to its class;
/// [`pack`](FormatDetails::pack) reverses [`PixelFormat::details`] exactly
/// for every composed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatDetails {
    /// The zero word, or a composed word with an unassigned storage class.
    Unknown,
    /// Codec-defined format named by a four-character tag; no bit layout.
    FourCc(FourCc),
    /// Palette index per pixel (1, 2, 4, or 8 bits).
    Indexed {
        pixel_type: PixelType,
        order: BitmapOrder,
        bits_per_pixel: u8,
        bytes_per_pixel: u8,
    },
    /// Channel bitfields packed into one 8/16/32-bit word.
    Packed {
        pixel_type: PixelType,
        order: PackedOrder,
        layout: PackedLayout,
        bits_per_pixel: u8,
        bytes_per_pixel: u8,
    },
    /// One array element per channel.
    Array {
        pixel_type: PixelType,
        order: ArrayOrder,
        bits_per_pixel: u8,
        bytes_per_pixel: u8,
    },
}

impl FormatDetails {
    /// Re-encode into the packed word.
    ///
    /// The variant fields are taken at face value; composing an indexed
    /// variant with a packed storage class (or similar mismatches) yields a
    /// word outside the catalog with no defined meaning.
    pub const fn pack(self) -> PixelFormat {
        match self {
            FormatDetails::Unknown => PixelFormat::UNKNOWN,
            FormatDetails::FourCc(tag) => PixelFormat(tag.0),
            FormatDetails::Indexed {
                pixel_type,
                order,
                bits_per_pixel,
                bytes_per_pixel,
            } => PixelFormat::new(
                pixel_type,
                ChannelOrder::Bitmap(order),
                PackedLayout::None,
                bits_per_pixel,
                bytes_per_pixel,
            ),
            FormatDetails::Packed {
                pixel_type,
                order,
                layout,
                bits_per_pixel,
                bytes_per_pixel,
            } => PixelFormat::new(
                pixel_type,
                ChannelOrder::Packed(order),
                layout,
                bits_per_pixel,
                bytes_per_pixel,
            ),
            FormatDetails::Array {
                pixel_type,
                order,
                bits_per_pixel,
                bytes_per_pixel,
            } => PixelFormat::new(
                pixel_type,
                ChannelOrder::Array(order),
                PackedLayout::None,
                bits_per_pixel,
                bytes_per_pixel,
            ),
        }
    }
}

/// A packed pixel-format descriptor word.
///
/// Immutable value type. Obtain one from the named constants, from
/// [`new`](PixelFormat::new) / [`from_fourcc`](PixelFormat::from_fourcc),
/// or from a raw word via [`from_bits`](PixelFormat::from_bits) (every
/// `u32` decodes to something, possibly nonsense).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelFormat(pub(crate) u32);

impl PixelFormat {
    /// Compose a bit-layout format word.
    ///
    /// `order` must be the variant matching `pixel_type` (bitmap orders with
    /// indexed classes, packed orders with packed classes, array orders with
    /// array classes). Mismatched composition is not checked and produces a
    /// word outside the catalog.
    pub const fn new(
        pixel_type: PixelType,
        order: ChannelOrder,
        layout: PackedLayout,
        bits_per_pixel: u8,
        bytes_per_pixel: u8,
    ) -> Self {
        Self(
            (1 << 28)
                | ((pixel_type as u32) << 24)
                | (order.bits() << 20)
                | ((layout as u32) << 16)
                | ((bits_per_pixel as u32) << 8)
                | (bytes_per_pixel as u32),
        )
    }

    /// Build a FourCC format from the four tag characters as written.
    pub const fn from_fourcc(tag: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(tag))
    }

    /// Reinterpret a raw word as a format descriptor.
    pub const fn from_bits(word: u32) -> Self {
        Self(word)
    }

    /// The raw descriptor word.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Whether the word is a four-character code rather than a composed
    /// bit-layout descriptor. The zero word is not a FourCC.
    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && field(self.0, 28, 4) != 1
    }

    /// Storage class, or `Unknown` for FourCC words (the field is not
    /// applicable there).
    pub const fn pixel_type(self) -> PixelType {
        if self.is_fourcc() {
            PixelType::Unknown
        } else {
            PixelType::from_bits(field(self.0, 24, 4))
        }
    }

    /// Channel order in the interpretation selected by the storage class.
    pub const fn order(self) -> ChannelOrder {
        let raw = field(self.0, 20, 4);
        let ty = self.pixel_type();
        if ty.is_indexed() {
            ChannelOrder::Bitmap(BitmapOrder::from_bits(raw))
        } else if ty.is_packed() {
            ChannelOrder::Packed(PackedOrder::from_bits(raw))
        } else if ty.is_array() {
            ChannelOrder::Array(ArrayOrder::from_bits(raw))
        } else {
            ChannelOrder::None
        }
    }

    /// Packed bit layout. Only meaningful for packed storage classes;
    /// `None` for FourCC words.
    pub const fn layout(self) -> PackedLayout {
        if self.is_fourcc() {
            PackedLayout::None
        } else {
            PackedLayout::from_bits(field(self.0, 16, 4))
        }
    }

    /// Total bits occupied by one pixel. 0 for FourCC words, whose pixel
    /// size is not described by the descriptor.
    pub const fn bits_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            0
        } else {
            field(self.0, 8, 8) as u8
        }
    }

    /// Total bytes occupied by one pixel.
    ///
    /// For FourCC words this comes from a fixed per-tag table: the packed
    /// 4:2:2 tags (YUY2, UYVY, YVYU) and P010 occupy 2 bytes per sample,
    /// every other tag 1. Sub-byte indexed formats report 0.
    pub const fn bytes_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            match self {
                Self::YUY2 | Self::UYVY | Self::YVYU | Self::P010 => 2,
                _ => 1,
            }
        } else {
            field(self.0, 0, 8) as u8
        }
    }

    /// Whether this is a palette-indexed format.
    pub const fn is_indexed(self) -> bool {
        self.pixel_type().is_indexed()
    }

    /// Whether this is a packed-bitfield format.
    pub const fn is_packed(self) -> bool {
        self.pixel_type().is_packed()
    }

    /// Whether this is a per-channel array format.
    pub const fn is_array(self) -> bool {
        self.pixel_type().is_array()
    }

    /// Whether this is a packed-32 format with 10-bit color channels.
    pub const fn is_10bit(self) -> bool {
        matches!(self.pixel_type(), PixelType::Packed32)
            && matches!(self.layout(), PackedLayout::L2101010)
    }

    /// Whether the channels are floating point (half or single precision).
    pub const fn is_float(self) -> bool {
        matches!(
            self.pixel_type(),
            PixelType::ArrayF16 | PixelType::ArrayF32
        )
    }

    /// Whether the channel order places an alpha channel in any position.
    /// Always false for FourCC and indexed formats.
    pub const fn has_alpha(self) -> bool {
        self.order().has_alpha()
    }

    /// Decode into the tagged per-storage-class view.
    pub const fn details(self) -> FormatDetails {
        if self.is_fourcc() {
            return FormatDetails::FourCc(FourCc(self.0));
        }
        let ty = self.pixel_type();
        let bits = self.bits_per_pixel();
        let bytes = self.bytes_per_pixel();
        match self.order() {
            ChannelOrder::Bitmap(order) => FormatDetails::Indexed {
                pixel_type: ty,
                order,
                bits_per_pixel: bits,
                bytes_per_pixel: bytes,
            },
            ChannelOrder::Packed(order) => FormatDetails::Packed {
                pixel_type: ty,
                order,
                layout: self.layout(),
                bits_per_pixel: bits,
                bytes_per_pixel: bytes,
            },
            ChannelOrder::Array(order) => FormatDetails::Array {
                pixel_type: ty,
                order,
                bits_per_pixel: bits,
                bytes_per_pixel: bytes,
            },
            ChannelOrder::None => FormatDetails::Unknown,
        }
    }
}

// Catalog of named formats. The composed words are bit-for-bit the
// externally standardized values.
impl PixelFormat {
    pub const UNKNOWN: Self = Self(0);

    pub const INDEX1LSB: Self = Self::new(
        PixelType::Index1,
        ChannelOrder::Bitmap(BitmapOrder::Lsb),
        PackedLayout::None,
        1,
        0,
    );
    pub const INDEX1MSB: Self = Self::new(
        PixelType::Index1,
        ChannelOrder::Bitmap(BitmapOrder::Msb),
        PackedLayout::None,
        1,
        0,
    );
    pub const INDEX2LSB: Self = Self::new(
        PixelType::Index2,
        ChannelOrder::Bitmap(BitmapOrder::Lsb),
        PackedLayout::None,
        2,
        0,
    );
    pub const INDEX2MSB: Self = Self::new(
        PixelType::Index2,
        ChannelOrder::Bitmap(BitmapOrder::Msb),
        PackedLayout::None,
        2,
        0,
    );
    pub const INDEX4LSB: Self = Self::new(
        PixelType::Index4,
        ChannelOrder::Bitmap(BitmapOrder::Lsb),
        PackedLayout::None,
        4,
        0,
    );
    pub const INDEX4MSB: Self = Self::new(
        PixelType::Index4,
        ChannelOrder::Bitmap(BitmapOrder::Msb),
        PackedLayout::None,
        4,
        0,
    );
    pub const INDEX8: Self = Self::new(
        PixelType::Index8,
        ChannelOrder::None,
        PackedLayout::None,
        8,
        1,
    );

    pub const RGB332: Self = Self::new(
        PixelType::Packed8,
        ChannelOrder::Packed(PackedOrder::Xrgb),
        PackedLayout::L332,
        8,
        1,
    );
    pub const XRGB4444: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Xrgb),
        PackedLayout::L4444,
        12,
        2,
    );
    pub const XBGR4444: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Xbgr),
        PackedLayout::L4444,
        12,
        2,
    );
    pub const XRGB1555: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Xrgb),
        PackedLayout::L1555,
        15,
        2,
    );
    pub const XBGR1555: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Xbgr),
        PackedLayout::L1555,
        15,
        2,
    );
    pub const ARGB4444: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Argb),
        PackedLayout::L4444,
        16,
        2,
    );
    pub const RGBA4444: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Rgba),
        PackedLayout::L4444,
        16,
        2,
    );
    pub const ABGR4444: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Abgr),
        PackedLayout::L4444,
        16,
        2,
    );
    pub const BGRA4444: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Bgra),
        PackedLayout::L4444,
        16,
        2,
    );
    pub const ARGB1555: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Argb),
        PackedLayout::L1555,
        16,
        2,
    );
    pub const RGBA5551: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Rgba),
        PackedLayout::L5551,
        16,
        2,
    );
    pub const ABGR1555: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Abgr),
        PackedLayout::L1555,
        16,
        2,
    );
    pub const BGRA5551: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Bgra),
        PackedLayout::L5551,
        16,
        2,
    );
    pub const RGB565: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Xrgb),
        PackedLayout::L565,
        16,
        2,
    );
    pub const BGR565: Self = Self::new(
        PixelType::Packed16,
        ChannelOrder::Packed(PackedOrder::Xbgr),
        PackedLayout::L565,
        16,
        2,
    );

    pub const RGB24: Self = Self::new(
        PixelType::ArrayU8,
        ChannelOrder::Array(ArrayOrder::Rgb),
        PackedLayout::None,
        24,
        3,
    );
    pub const BGR24: Self = Self::new(
        PixelType::ArrayU8,
        ChannelOrder::Array(ArrayOrder::Bgr),
        PackedLayout::None,
        24,
        3,
    );

    pub const XRGB8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Xrgb),
        PackedLayout::L8888,
        24,
        4,
    );
    pub const RGBX8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Rgbx),
        PackedLayout::L8888,
        24,
        4,
    );
    pub const XBGR8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Xbgr),
        PackedLayout::L8888,
        24,
        4,
    );
    pub const BGRX8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Bgrx),
        PackedLayout::L8888,
        24,
        4,
    );
    pub const ARGB8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Argb),
        PackedLayout::L8888,
        32,
        4,
    );
    pub const RGBA8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Rgba),
        PackedLayout::L8888,
        32,
        4,
    );
    pub const ABGR8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Abgr),
        PackedLayout::L8888,
        32,
        4,
    );
    pub const BGRA8888: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Bgra),
        PackedLayout::L8888,
        32,
        4,
    );
    pub const XRGB2101010: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Xrgb),
        PackedLayout::L2101010,
        32,
        4,
    );
    pub const XBGR2101010: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Xbgr),
        PackedLayout::L2101010,
        32,
        4,
    );
    pub const ARGB2101010: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Argb),
        PackedLayout::L2101010,
        32,
        4,
    );
    pub const ABGR2101010: Self = Self::new(
        PixelType::Packed32,
        ChannelOrder::Packed(PackedOrder::Abgr),
        PackedLayout::L2101010,
        32,
        4,
    );

    pub const RGB48: Self = Self::new(
        PixelType::ArrayU16,
        ChannelOrder::Array(ArrayOrder::Rgb),
        PackedLayout::None,
        48,
        6,
    );
    pub const BGR48: Self = Self::new(
        PixelType::ArrayU16,
        ChannelOrder::Array(ArrayOrder::Bgr),
        PackedLayout::None,
        48,
        6,
    );
    pub const RGBA64: Self = Self::new(
        PixelType::ArrayU16,
        ChannelOrder::Array(ArrayOrder::Rgba),
        PackedLayout::None,
        64,
        8,
    );
    pub const ARGB64: Self = Self::new(
        PixelType::ArrayU16,
        ChannelOrder::Array(ArrayOrder::Argb),
        PackedLayout::None,
        64,
        8,
    );
    pub const BGRA64: Self = Self::new(
        PixelType::ArrayU16,
        ChannelOrder::Array(ArrayOrder::Bgra),
        PackedLayout::None,
        64,
        8,
    );
    pub const ABGR64: Self = Self::new(
        PixelType::ArrayU16,
        ChannelOrder::Array(ArrayOrder::Abgr),
        PackedLayout::None,
        64,
        8,
    );

    pub const RGB48_FLOAT: Self = Self::new(
        PixelType::ArrayF16,
        ChannelOrder::Array(ArrayOrder::Rgb),
        PackedLayout::None,
        48,
        6,
    );
    pub const BGR48_FLOAT: Self = Self::new(
        PixelType::ArrayF16,
        ChannelOrder::Array(ArrayOrder::Bgr),
        PackedLayout::None,
        48,
        6,
    );
    pub const RGBA64_FLOAT: Self = Self::new(
        PixelType::ArrayF16,
        ChannelOrder::Array(ArrayOrder::Rgba),
        PackedLayout::None,
        64,
        8,
    );
    pub const ARGB64_FLOAT: Self = Self::new(
        PixelType::ArrayF16,
        ChannelOrder::Array(ArrayOrder::Argb),
        PackedLayout::None,
        64,
        8,
    );
    pub const BGRA64_FLOAT: Self = Self::new(
        PixelType::ArrayF16,
        ChannelOrder::Array(ArrayOrder::Bgra),
        PackedLayout::None,
        64,
        8,
    );
    pub const ABGR64_FLOAT: Self = Self::new(
        PixelType::ArrayF16,
        ChannelOrder::Array(ArrayOrder::Abgr),
        PackedLayout::None,
        64,
        8,
    );
    pub const RGB96_FLOAT: Self = Self::new(
        PixelType::ArrayF32,
        ChannelOrder::Array(ArrayOrder::Rgb),
        PackedLayout::None,
        96,
        12,
    );
    pub const BGR96_FLOAT: Self = Self::new(
        PixelType::ArrayF32,
        ChannelOrder::Array(ArrayOrder::Bgr),
        PackedLayout::None,
        96,
        12,
    );
    pub const RGBA128_FLOAT: Self = Self::new(
        PixelType::ArrayF32,
        ChannelOrder::Array(ArrayOrder::Rgba),
        PackedLayout::None,
        128,
        16,
    );
    pub const ARGB128_FLOAT: Self = Self::new(
        PixelType::ArrayF32,
        ChannelOrder::Array(ArrayOrder::Argb),
        PackedLayout::None,
        128,
        16,
    );
    pub const BGRA128_FLOAT: Self = Self::new(
        PixelType::ArrayF32,
        ChannelOrder::Array(ArrayOrder::Bgra),
        PackedLayout::None,
        128,
        16,
    );
    pub const ABGR128_FLOAT: Self = Self::new(
        PixelType::ArrayF32,
        ChannelOrder::Array(ArrayOrder::Abgr),
        PackedLayout::None,
        128,
        16,
    );

    /// Planar YVU 4:2:0, Y plane then V then U.
    pub const YV12: Self = Self::from_fourcc(*b"YV12");
    /// Planar YUV 4:2:0, Y plane then U then V.
    pub const IYUV: Self = Self::from_fourcc(*b"IYUV");
    /// Packed YUV 4:2:2, Y0+U0+Y1+V0.
    pub const YUY2: Self = Self::from_fourcc(*b"YUY2");
    /// Packed YUV 4:2:2, U0+Y0+V0+Y1.
    pub const UYVY: Self = Self::from_fourcc(*b"UYVY");
    /// Packed YUV 4:2:2, Y0+V0+Y1+U0.
    pub const YVYU: Self = Self::from_fourcc(*b"YVYU");
    /// Planar YUV 4:2:0, Y plane then interleaved UV plane.
    pub const NV12: Self = Self::from_fourcc(*b"NV12");
    /// Planar YUV 4:2:0, Y plane then interleaved VU plane.
    pub const NV21: Self = Self::from_fourcc(*b"NV21");
    /// Planar 10-bit YUV 4:2:0, 16 bits per sample.
    pub const P010: Self = Self::from_fourcc(*b"P010");
    /// Android OES external texture.
    pub const EXTERNAL_OES: Self = Self::from_fourcc(*b"OES ");
    /// Motion JPEG.
    pub const MJPG: Self = Self::from_fourcc(*b"MJPG");

    // Byte-order aliases: the name gives the channel order as seen in
    // memory, so the packed-32 word they resolve to depends on host
    // endianness. Resolved once, at compile time, from the target's byte
    // order.
    pub const RGBA32: Self = if cfg!(target_endian = "big") {
        Self::RGBA8888
    } else {
        Self::ABGR8888
    };
    pub const ARGB32: Self = if cfg!(target_endian = "big") {
        Self::ARGB8888
    } else {
        Self::BGRA8888
    };
    pub const BGRA32: Self = if cfg!(target_endian = "big") {
        Self::BGRA8888
    } else {
        Self::ARGB8888
    };
    pub const ABGR32: Self = if cfg!(target_endian = "big") {
        Self::ABGR8888
    } else {
        Self::RGBA8888
    };
    pub const RGBX32: Self = if cfg!(target_endian = "big") {
        Self::RGBX8888
    } else {
        Self::XBGR8888
    };
    pub const XRGB32: Self = if cfg!(target_endian = "big") {
        Self::XRGB8888
    } else {
        Self::BGRX8888
    };
    pub const BGRX32: Self = if cfg!(target_endian = "big") {
        Self::BGRX8888
    } else {
        Self::XRGB8888
    };
    pub const XBGR32: Self = if cfg!(target_endian = "big") {
        Self::XBGR8888
    } else {
        Self::RGBX8888
    };

    /// Every named format, endianness aliases excluded (those resolve to
    /// entries already present).
    pub const KNOWN: &'static [PixelFormat] = &[
        Self::INDEX1LSB,
        Self::INDEX1MSB,
        Self::INDEX2LSB,
        Self::INDEX2MSB,
        Self::INDEX4LSB,
        Self::INDEX4MSB,
        Self::INDEX8,
        Self::RGB332,
        Self::XRGB4444,
        Self::XBGR4444,
        Self::XRGB1555,
        Self::XBGR1555,
        Self::ARGB4444,
        Self::RGBA4444,
        Self::ABGR4444,
        Self::BGRA4444,
        Self::ARGB1555,
        Self::RGBA5551,
        Self::ABGR1555,
        Self::BGRA5551,
        Self::RGB565,
        Self::BGR565,
        Self::RGB24,
        Self::BGR24,
        Self::XRGB8888,
        Self::RGBX8888,
        Self::XBGR8888,
        Self::BGRX8888,
        Self::ARGB8888,
        Self::RGBA8888,
        Self::ABGR8888,
        Self::BGRA8888,
        Self::XRGB2101010,
        Self::XBGR2101010,
        Self::ARGB2101010,
        Self::ABGR2101010,
        Self::RGB48,
        Self::BGR48,
        Self::RGBA64,
        Self::ARGB64,
        Self::BGRA64,
        Self::ABGR64,
        Self::RGB48_FLOAT,
        Self::BGR48_FLOAT,
        Self::RGBA64_FLOAT,
        Self::ARGB64_FLOAT,
        Self::BGRA64_FLOAT,
        Self::ABGR64_FLOAT,
        Self::RGB96_FLOAT,
        Self::BGR96_FLOAT,
        Self::RGBA128_FLOAT,
        Self::ARGB128_FLOAT,
        Self::BGRA128_FLOAT,
        Self::ABGR128_FLOAT,
        Self::YV12,
        Self::IYUV,
        Self::YUY2,
        Self::UYVY,
        Self::YVYU,
        Self::NV12,
        Self::NV21,
        Self::P010,
        Self::EXTERNAL_OES,
        Self::MJPG,
    ];

    /// Catalog name of this format, or `None` if it is not a named entry.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::INDEX1LSB => "INDEX1LSB",
            Self::INDEX1MSB => "INDEX1MSB",
            Self::INDEX2LSB => "INDEX2LSB",
            Self::INDEX2MSB => "INDEX2MSB",
            Self::INDEX4LSB => "INDEX4LSB",
            Self::INDEX4MSB => "INDEX4MSB",
            Self::INDEX8 => "INDEX8",
            Self::RGB332 => "RGB332",
            Self::XRGB4444 => "XRGB4444",
            Self::XBGR4444 => "XBGR4444",
            Self::XRGB1555 => "XRGB1555",
            Self::XBGR1555 => "XBGR1555",
            Self::ARGB4444 => "ARGB4444",
            Self::RGBA4444 => "RGBA4444",
            Self::ABGR4444 => "ABGR4444",
            Self::BGRA4444 => "BGRA4444",
            Self::ARGB1555 => "ARGB1555",
            Self::RGBA5551 => "RGBA5551",
            Self::ABGR1555 => "ABGR1555",
            Self::BGRA5551 => "BGRA5551",
            Self::RGB565 => "RGB565",
            Self::BGR565 => "BGR565",
            Self::RGB24 => "RGB24",
            Self::BGR24 => "BGR24",
            Self::XRGB8888 => "XRGB8888",
            Self::RGBX8888 => "RGBX8888",
            Self::XBGR8888 => "XBGR8888",
            Self::BGRX8888 => "BGRX8888",
            Self::ARGB8888 => "ARGB8888",
            Self::RGBA8888 => "RGBA8888",
            Self::ABGR8888 => "ABGR8888",
            Self::BGRA8888 => "BGRA8888",
            Self::XRGB2101010 => "XRGB2101010",
            Self::XBGR2101010 => "XBGR2101010",
            Self::ARGB2101010 => "ARGB2101010",
            Self::ABGR2101010 => "ABGR2101010",
            Self::RGB48 => "RGB48",
            Self::BGR48 => "BGR48",
            Self::RGBA64 => "RGBA64",
            Self::ARGB64 => "ARGB64",
            Self::BGRA64 => "BGRA64",
            Self::ABGR64 => "ABGR64",
            Self::RGB48_FLOAT => "RGB48_FLOAT",
            Self::BGR48_FLOAT => "BGR48_FLOAT",
            Self::RGBA64_FLOAT => "RGBA64_FLOAT",
            Self::ARGB64_FLOAT => "ARGB64_FLOAT",
            Self::BGRA64_FLOAT => "BGRA64_FLOAT",
            Self::ABGR64_FLOAT => "ABGR64_FLOAT",
            Self::RGB96_FLOAT => "RGB96_FLOAT",
            Self::BGR96_FLOAT => "BGR96_FLOAT",
            Self::RGBA128_FLOAT => "RGBA128_FLOAT",
            Self::ARGB128_FLOAT => "ARGB128_FLOAT",
            Self::BGRA128_FLOAT => "BGRA128_FLOAT",
            Self::ABGR128_FLOAT => "ABGR128_FLOAT",
            Self::YV12 => "YV12",
            Self::IYUV => "IYUV",
            Self::YUY2 => "YUY2",
            Self::UYVY => "UYVY",
            Self::YVYU => "YVYU",
            Self::NV12 => "NV12",
            Self::NV21 => "NV21",
            Self::P010 => "P010",
            Self::EXTERNAL_OES => "EXTERNAL_OES",
            Self::MJPG => "MJPG",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            f.write_str(name)
        } else if self.is_fourcc() {
            write!(f, "{}", FourCc(self.0))
        } else {
            write!(f, "UNKNOWN(0x{:08x})", self.0)
        }
    }
}
