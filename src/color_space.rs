//! Color-space descriptor words.
//!
//! A color space is a single `u32` packing six independent sub-fields:
//!
//! ```text
//! bits 28-31  color type (RGB / YCbCr)
//! bits 24-27  range (full / limited)
//! bits 20-23  chroma sample location
//! bits 10-14  color primaries        (ITU-T H.273 code point)
//! bits  5-9   transfer characteristics (H.273 code point)
//! bits  0-4   matrix coefficients      (H.273 code point)
//! ```
//!
//! Unlike pixel formats there is no tag-dependent reinterpretation: all six
//! fields are always meaningful. The named constants are externally
//! standardized words.

use core::fmt;

use crate::bits::field;

/// Broad content category of a color space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ColorType {
    #[default]
    Unknown = 0,
    Rgb = 1,
    YCbCr = 2,
}

impl ColorType {
    /// Decode from the 4-bit type field; `Unknown` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Rgb,
            2 => Self::YCbCr,
            _ => Self::Unknown,
        }
    }
}

/// Sample value range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ColorRange {
    #[default]
    Unknown = 0,
    /// Narrow range: 16-235 luma, 16-240 chroma for 8-bit content.
    Limited = 1,
    /// Full range: 0-255 for 8-bit content.
    Full = 2,
}

impl ColorRange {
    /// Decode from the 4-bit range field; `Unknown` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Limited,
            2 => Self::Full,
            _ => Self::Unknown,
        }
    }
}

/// Chroma sample location for subsampled YCbCr content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ChromaLocation {
    /// RGB content, or no chroma siting defined.
    #[default]
    None = 0,
    /// Horizontally co-sited with the left luma sample, centered vertically.
    /// MPEG-2/4 and H.264 default.
    Left = 1,
    /// Centered between four luma samples. JPEG/JFIF and MPEG-1 default.
    Center = 2,
    /// Co-sited with the top-left luma sample.
    TopLeft = 3,
}

impl ChromaLocation {
    /// Decode from the 4-bit chroma field; `None` for unassigned values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Left,
            2 => Self::Center,
            3 => Self::TopLeft,
            _ => Self::None,
        }
    }
}

/// Color primaries, as ITU-T H.273 ColourPrimaries code points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ColorPrimaries {
    #[default]
    Unknown = 0,
    /// ITU-R BT.709-6 (also sRGB).
    Bt709 = 1,
    Unspecified = 2,
    /// ITU-R BT.470-6 System M.
    Bt470M = 4,
    /// ITU-R BT.470-6 System B, G / BT.601-7 625.
    Bt470Bg = 5,
    /// ITU-R BT.601-7 525 (SMPTE 170M).
    Bt601 = 6,
    /// SMPTE 240M.
    Smpte240 = 7,
    /// Generic film (color filters using Illuminant C).
    GenericFilm = 8,
    /// ITU-R BT.2020-2 / BT.2100-0.
    Bt2020 = 9,
    /// SMPTE ST 428-1 (CIE 1931 XYZ).
    Xyz = 10,
    /// SMPTE RP 431-2 (DCI P3).
    Smpte431 = 11,
    /// SMPTE EG 432-1 (P3 D65 / Display P3).
    Smpte432 = 12,
    /// EBU Tech 3213-E.
    Ebu3213 = 22,
    Custom = 31,
}

impl ColorPrimaries {
    /// Decode from the 5-bit primaries field; `Unknown` for unassigned
    /// values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Bt470M,
            5 => Self::Bt470Bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::GenericFilm,
            9 => Self::Bt2020,
            10 => Self::Xyz,
            11 => Self::Smpte431,
            12 => Self::Smpte432,
            22 => Self::Ebu3213,
            31 => Self::Custom,
            _ => Self::Unknown,
        }
    }
}

/// Transfer characteristics, as ITU-T H.273 code points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum TransferCharacteristics {
    #[default]
    Unknown = 0,
    /// ITU-R BT.709-6.
    Bt709 = 1,
    Unspecified = 2,
    /// Assumed display gamma 2.2 (BT.470-6 System M).
    Gamma22 = 4,
    /// Assumed display gamma 2.8 (BT.470-6 System B, G).
    Gamma28 = 5,
    /// ITU-R BT.601-7 (SMPTE 170M).
    Bt601 = 6,
    /// SMPTE 240M.
    Smpte240 = 7,
    /// Linear light.
    Linear = 8,
    /// Logarithmic, 100:1 range.
    Log100 = 9,
    /// Logarithmic, 100*sqrt(10):1 range.
    Log100Sqrt10 = 10,
    /// IEC 61966-2-4 (xvYCC).
    Iec61966 = 11,
    /// ITU-R BT.1361 extended color gamut.
    Bt1361 = 12,
    /// IEC 61966-2-1 (sRGB).
    Srgb = 13,
    /// ITU-R BT.2020-2, 10-bit systems.
    Bt2020TenBit = 14,
    /// ITU-R BT.2020-2, 12-bit systems.
    Bt2020TwelveBit = 15,
    /// SMPTE ST 2084 perceptual quantizer (HDR10).
    Pq = 16,
    /// SMPTE ST 428-1.
    Smpte428 = 17,
    /// ARIB STD-B67 hybrid log-gamma.
    Hlg = 18,
    Custom = 31,
}

impl TransferCharacteristics {
    /// Decode from the 5-bit transfer field; `Unknown` for unassigned
    /// values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Gamma22,
            5 => Self::Gamma28,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::Linear,
            9 => Self::Log100,
            10 => Self::Log100Sqrt10,
            11 => Self::Iec61966,
            12 => Self::Bt1361,
            13 => Self::Srgb,
            14 => Self::Bt2020TenBit,
            15 => Self::Bt2020TwelveBit,
            16 => Self::Pq,
            17 => Self::Smpte428,
            18 => Self::Hlg,
            31 => Self::Custom,
            _ => Self::Unknown,
        }
    }
}

/// Matrix coefficients, as ITU-T H.273 code points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum MatrixCoefficients {
    /// Identity matrix (RGB, or XYZ).
    #[default]
    Identity = 0,
    /// ITU-R BT.709-6.
    Bt709 = 1,
    Unspecified = 2,
    /// US FCC Title 47.
    Fcc = 4,
    /// ITU-R BT.470-6 System B, G (functionally identical to BT.601).
    Bt470Bg = 5,
    /// ITU-R BT.601-7.
    Bt601 = 6,
    /// SMPTE 240M.
    Smpte240 = 7,
    /// YCgCo.
    YCgCo = 8,
    /// ITU-R BT.2020-2 non-constant luminance.
    Bt2020Ncl = 9,
    /// ITU-R BT.2020-2 constant luminance.
    Bt2020Cl = 10,
    /// SMPTE ST 2085.
    Smpte2085 = 11,
    /// Chromaticity-derived, non-constant luminance.
    ChromaDerivedNcl = 12,
    /// Chromaticity-derived, constant luminance.
    ChromaDerivedCl = 13,
    /// ITU-R BT.2100-0 ICtCp.
    ICtCp = 14,
    Custom = 31,
}

impl MatrixCoefficients {
    /// Decode from the 5-bit matrix field; `Identity` for unassigned
    /// values.
    pub const fn from_bits(value: u32) -> Self {
        match value {
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Fcc,
            5 => Self::Bt470Bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::YCgCo,
            9 => Self::Bt2020Ncl,
            10 => Self::Bt2020Cl,
            11 => Self::Smpte2085,
            12 => Self::ChromaDerivedNcl,
            13 => Self::ChromaDerivedCl,
            14 => Self::ICtCp,
            31 => Self::Custom,
            _ => Self::Identity,
        }
    }
}

/// A packed color-space descriptor word.
///
/// Immutable value type; build one from the named constants or compose the
/// six sub-fields with [`new`](ColorSpace::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSpace(pub(crate) u32);

impl ColorSpace {
    /// Compose a color-space word from its six sub-fields.
    pub const fn new(
        color_type: ColorType,
        range: ColorRange,
        primaries: ColorPrimaries,
        transfer: TransferCharacteristics,
        matrix: MatrixCoefficients,
        chroma: ChromaLocation,
    ) -> Self {
        Self(
            ((color_type as u32) << 28)
                | ((range as u32) << 24)
                | ((chroma as u32) << 20)
                | ((primaries as u32) << 10)
                | ((transfer as u32) << 5)
                | (matrix as u32),
        )
    }

    /// Reinterpret a raw word as a color-space descriptor.
    pub const fn from_bits(word: u32) -> Self {
        Self(word)
    }

    /// The raw descriptor word.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Content category.
    pub const fn color_type(self) -> ColorType {
        ColorType::from_bits(field(self.0, 28, 4))
    }

    /// Sample value range.
    pub const fn range(self) -> ColorRange {
        ColorRange::from_bits(field(self.0, 24, 4))
    }

    /// Chroma sample location.
    pub const fn chroma_location(self) -> ChromaLocation {
        ChromaLocation::from_bits(field(self.0, 20, 4))
    }

    /// Color primaries.
    pub const fn primaries(self) -> ColorPrimaries {
        ColorPrimaries::from_bits(field(self.0, 10, 5))
    }

    /// Transfer characteristics.
    pub const fn transfer(self) -> TransferCharacteristics {
        TransferCharacteristics::from_bits(field(self.0, 5, 5))
    }

    /// Matrix coefficients.
    pub const fn matrix(self) -> MatrixCoefficients {
        MatrixCoefficients::from_bits(field(self.0, 0, 5))
    }

    /// Whether samples use less than the full numeric range. True for both
    /// explicitly limited and unspecified range.
    pub const fn is_limited_range(self) -> bool {
        !matches!(self.range(), ColorRange::Full)
    }

    /// Whether samples use the full numeric range.
    pub const fn is_full_range(self) -> bool {
        matches!(self.range(), ColorRange::Full)
    }

    /// Whether the matrix is BT.601 (or the functionally identical
    /// BT.470BG).
    pub const fn is_matrix_bt601(self) -> bool {
        matches!(
            self.matrix(),
            MatrixCoefficients::Bt601 | MatrixCoefficients::Bt470Bg
        )
    }

    /// Whether the matrix is BT.709.
    pub const fn is_matrix_bt709(self) -> bool {
        matches!(self.matrix(), MatrixCoefficients::Bt709)
    }

    /// Whether the matrix is BT.2020 non-constant luminance.
    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        matches!(self.matrix(), MatrixCoefficients::Bt2020Ncl)
    }
}

// Catalog of named color spaces. These words are externally standardized
// identifiers; the literals below are part of the public contract.
impl ColorSpace {
    pub const UNKNOWN: Self = Self(0);

    /// sRGB: gamma-encoded RGB, BT.709 primaries, full range.
    pub const SRGB: Self = Self::new(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Srgb,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// Linear-light RGB with sRGB/BT.709 primaries, full range.
    pub const SRGB_LINEAR: Self = Self::new(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Linear,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// HDR10: PQ-encoded RGB with BT.2020 primaries, full range.
    pub const HDR10: Self = Self::new(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// JPEG/JFIF YCbCr: BT.601 matrix over full-range samples.
    pub const JPEG: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::None,
    );

    /// BT.601 YCbCr, limited range.
    pub const BT601_LIMITED: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt601,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::Left,
    );

    /// BT.601 YCbCr, full range.
    pub const BT601_FULL: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt601,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::Left,
    );

    /// BT.709 YCbCr, limited range.
    pub const BT709_LIMITED: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt709,
        MatrixCoefficients::Bt709,
        ChromaLocation::Left,
    );

    /// BT.709 YCbCr, full range.
    pub const BT709_FULL: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt709,
        MatrixCoefficients::Bt709,
        ChromaLocation::Left,
    );

    /// BT.2020 YCbCr with PQ transfer, limited range.
    pub const BT2020_LIMITED: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Bt2020Ncl,
        ChromaLocation::Left,
    );

    /// BT.2020 YCbCr with PQ transfer, full range.
    pub const BT2020_FULL: Self = Self::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Bt2020Ncl,
        ChromaLocation::Left,
    );

    /// Default for RGB content.
    pub const RGB_DEFAULT: Self = Self::SRGB;
    /// Default for YUV content.
    pub const YUV_DEFAULT: Self = Self::JPEG;

    /// Every named color space (defaults excluded; those resolve to
    /// entries already present).
    pub const KNOWN: &'static [ColorSpace] = &[
        Self::SRGB,
        Self::SRGB_LINEAR,
        Self::HDR10,
        Self::JPEG,
        Self::BT601_LIMITED,
        Self::BT601_FULL,
        Self::BT709_LIMITED,
        Self::BT709_FULL,
        Self::BT2020_LIMITED,
        Self::BT2020_FULL,
    ];

    /// Catalog name of this color space, or `None` if it is not a named
    /// entry.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::UNKNOWN => "UNKNOWN",
            Self::SRGB => "SRGB",
            Self::SRGB_LINEAR => "SRGB_LINEAR",
            Self::HDR10 => "HDR10",
            Self::JPEG => "JPEG",
            Self::BT601_LIMITED => "BT601_LIMITED",
            Self::BT601_FULL => "BT601_FULL",
            Self::BT709_LIMITED => "BT709_LIMITED",
            Self::BT709_FULL => "BT709_FULL",
            Self::BT2020_LIMITED => "BT2020_LIMITED",
            Self::BT2020_FULL => "BT2020_FULL",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08x}", self.0),
        }
    }
}
