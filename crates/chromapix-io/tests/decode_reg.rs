//! Decode regression test
//!
//! Tests that every writable format decodes back to an RGB raster with the
//! same pixels, and that format sniffing agrees with the encoder.

use chromapix_core::ImageFormat;
use chromapix_io::{IoError, detect_format_from_bytes, read_image, read_image_mem, write_image};
use chromapix_test::{RegParams, coordinate_pix, encode_pix};

#[test]
fn decode_reg() {
    let mut rp = RegParams::new("decode");
    let pix = coordinate_pix(40, 30).unwrap();

    // --- Lossless formats ---
    for format in [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Tiff, ImageFormat::Pnm] {
        eprintln!("Testing {}", format.extension());
        let bytes = encode_pix(&pix, format).unwrap();
        rp.check(
            detect_format_from_bytes(&bytes).ok() == Some(format),
            "sniffed format matches encoder",
        );

        let decoded = read_image_mem(&bytes).unwrap();
        rp.check(decoded.informat() == format, "informat recorded");
        rp.compare_values(3.0, decoded.spp() as f64, 0.0);
        let mut mismatches = 0;
        for y in 0..30 {
            for x in 0..40 {
                if decoded.get_rgb(x, y) != pix.get_rgb(x, y) {
                    mismatches += 1;
                }
            }
        }
        rp.compare_values(0.0, mismatches as f64, 0.0);
    }

    // --- JPEG is lossy but keeps geometry ---
    let bytes = encode_pix(&pix, ImageFormat::Jpeg).unwrap();
    let decoded = read_image_mem(&bytes).unwrap();
    rp.check(decoded.informat() == ImageFormat::Jpeg, "jpeg informat");
    rp.compare_values(40.0, decoded.width() as f64, 0.0);
    rp.compare_values(30.0, decoded.height() as f64, 0.0);

    // --- File round trip ---
    let path = std::env::temp_dir().join(format!("chromapix_decode_reg_{}.png", std::process::id()));
    write_image(&pix, &path, ImageFormat::Png).unwrap();
    let from_file = read_image(&path).unwrap();
    rp.compare_rgb((39, 29, 39 ^ 29), from_file.get_rgb(39, 29).unwrap(), 0);
    let _ = std::fs::remove_file(&path);

    // --- Bad input ---
    rp.check(
        matches!(read_image_mem(b"x"), Err(IoError::InvalidData(_))),
        "one byte is too short to sniff",
    );
    rp.check(
        matches!(read_image_mem(b"hello world"), Err(IoError::UnsupportedFormat(_))),
        "unknown magic rejected",
    );

    assert!(rp.cleanup());
}
