//! Whole-catalog properties spanning the format codec and the mask
//! converter.

use zenformats::*;

#[test]
fn every_catalog_word_decodes_and_reencodes() {
    for &format in PixelFormat::KNOWN {
        let details = format.details();
        assert_eq!(details.pack(), format, "{format} did not round trip");
        match details {
            FormatDetails::FourCc(_) => assert!(format.is_fourcc()),
            FormatDetails::Indexed { .. } => assert!(format.is_indexed()),
            FormatDetails::Packed { .. } => assert!(format.is_packed()),
            FormatDetails::Array { .. } => assert!(format.is_array()),
            FormatDetails::Unknown => panic!("{format} decoded as unknown"),
            _ => unreachable!(),
        }
    }
}

#[test]
fn storage_classes_partition_the_catalog() {
    for &format in PixelFormat::KNOWN {
        let classes = [
            format.is_fourcc(),
            format.is_indexed(),
            format.is_packed(),
            format.is_array(),
        ];
        assert_eq!(
            classes.iter().filter(|&&c| c).count(),
            1,
            "{format} is not in exactly one storage class"
        );
    }
}

#[test]
fn every_catalog_entry_has_a_name() {
    for &format in PixelFormat::KNOWN {
        assert!(format.name().is_some(), "{format:?} has no catalog name");
    }
}

#[test]
fn byte_aligned_formats_occupy_at_least_one_byte() {
    for &format in PixelFormat::KNOWN {
        if format.is_fourcc() || format.bits_per_pixel() < 8 {
            continue;
        }
        assert!(
            format.bytes_per_pixel() >= 1,
            "{format} reports zero bytes per pixel"
        );
    }
}

#[test]
fn packed_masks_cover_the_format_bits_exactly() {
    for &format in PixelFormat::KNOWN {
        if !format.is_packed() {
            continue;
        }
        let m = format.to_masks().unwrap();
        let combined = m.red | m.green | m.blue | m.alpha;
        let channel_bits = FormatMasks::channel_width(m.red)
            + FormatMasks::channel_width(m.green)
            + FormatMasks::channel_width(m.blue)
            + FormatMasks::channel_width(m.alpha);
        // Channels never overlap.
        assert_eq!(
            FormatMasks::channel_width(combined),
            channel_bits,
            "{format} has overlapping channel masks"
        );
        // The declared depth counts exactly the channel bits, except the
        // 2101010 layouts which declare their 32-bit container.
        if format.is_10bit() {
            assert_eq!(format.bits_per_pixel(), 32);
        } else {
            assert_eq!(
                u32::from(m.bits_per_pixel),
                channel_bits,
                "{format} depth disagrees with its masks"
            );
        }
    }
}

#[test]
fn mask_roundtrip_for_all_packed_formats() {
    for &format in PixelFormat::KNOWN {
        if !format.is_packed() {
            continue;
        }
        let masks = format.to_masks().unwrap();
        assert_eq!(PixelFormat::from_masks(masks), format);
    }
}

#[test]
fn fourcc_formats_never_convert_to_masks() {
    for &format in PixelFormat::KNOWN {
        if format.is_fourcc() {
            assert_eq!(
                format.to_masks(),
                Err(MaskError::NotRepresentable(format)),
                "{format} should have no mask representation"
            );
        }
    }
}

#[test]
fn alpha_flag_agrees_with_alpha_mask() {
    for &format in PixelFormat::KNOWN {
        if !format.is_packed() {
            continue;
        }
        let m = format.to_masks().unwrap();
        assert_eq!(
            format.has_alpha(),
            m.alpha != 0,
            "{format} alpha flag disagrees with its alpha mask"
        );
    }
}

#[test]
fn endianness_alias_matches_memory_byte_order() {
    // Reading the four bytes of an RGBA32 pixel in memory order must give
    // R, G, B, A on any host. On little endian that is the ABGR8888 word.
    if u32::from_ne_bytes([1, 0, 0, 0]) == 1 {
        assert_eq!(PixelFormat::RGBA32, PixelFormat::ABGR8888);
        let m = PixelFormat::RGBA32.to_masks().unwrap();
        assert_eq!(m.red, 0x0000_00FF);
        assert_eq!(m.alpha, 0xFF00_0000);
    } else {
        assert_eq!(PixelFormat::RGBA32, PixelFormat::RGBA8888);
        let m = PixelFormat::RGBA32.to_masks().unwrap();
        assert_eq!(m.red, 0xFF00_0000);
        assert_eq!(m.alpha, 0x0000_00FF);
    }
}

#[test]
fn color_space_catalog_fields_are_coherent() {
    for &cs in ColorSpace::KNOWN {
        match cs.color_type() {
            ColorType::Rgb => {
                assert_eq!(cs.matrix(), MatrixCoefficients::Identity, "{cs}");
                assert_eq!(cs.chroma_location(), ChromaLocation::None, "{cs}");
            }
            ColorType::YCbCr => {
                assert_ne!(cs.matrix(), MatrixCoefficients::Identity, "{cs}");
            }
            other => panic!("{cs} has unexpected type {other:?}"),
        }
        assert_ne!(cs.range(), ColorRange::Unknown, "{cs}");
    }
}

#[test]
fn limited_and_full_pairs_share_everything_but_range() {
    let pairs = [
        (ColorSpace::BT601_LIMITED, ColorSpace::BT601_FULL),
        (ColorSpace::BT709_LIMITED, ColorSpace::BT709_FULL),
        (ColorSpace::BT2020_LIMITED, ColorSpace::BT2020_FULL),
    ];
    for (limited, full) in pairs {
        assert!(limited.is_limited_range());
        assert!(full.is_full_range());
        assert_eq!(limited.primaries(), full.primaries());
        assert_eq!(limited.transfer(), full.transfer());
        assert_eq!(limited.matrix(), full.matrix());
        assert_eq!(limited.chroma_location(), full.chroma_location());
    }
}
