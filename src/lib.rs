//! Packed pixel-format and color-space descriptor types for zen* codecs.
//!
//! A pixel format and a color space are each a single `u32` word carrying
//! several independent bit fields plus a set of derived classification
//! facts. This crate defines the codec for those words:
//!
//! - [`PixelFormat`] — the packed pixel-format word: storage class, channel
//!   order, bit layout, bit/byte widths, and the FourCC carve-out
//! - [`FormatDetails`] — tagged decode of a format word, one variant per
//!   storage class
//! - [`ColorSpace`] — the packed color-space word: type, range, chroma
//!   siting, primaries, transfer characteristics, matrix coefficients
//! - [`FormatMasks`] — per-channel bit masks equivalent of a packed format,
//!   convertible in both directions
//!
//! Both descriptor types are plain value objects; every operation is a pure
//! function over fixed-size integers and read-only catalogs, callable from
//! any thread without coordination.
//!
//! The named constants (`PixelFormat::ARGB8888`, `ColorSpace::SRGB`, …) are
//! externally standardized words and decode bit-for-bit to their published
//! values.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

mod bits;
mod color_space;
mod masks;
mod pixel_format;

pub use color_space::{
    ChromaLocation, ColorPrimaries, ColorRange, ColorSpace, ColorType, MatrixCoefficients,
    TransferCharacteristics,
};
pub use masks::{FormatMasks, MaskError};
pub use pixel_format::{
    ArrayOrder, BitmapOrder, ChannelOrder, FormatDetails, FourCc, PackedLayout, PackedOrder,
    PixelFormat, PixelType,
};
