//! Encoding rasters back into image files

use crate::decode::pix_to_rgb_image;
use crate::format::to_image_format;
use crate::{IoError, IoResult};
use chromapix_core::{ImageFormat, Pix};
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;

/// Encode a 32 bpp image into an in-memory buffer
///
/// Alpha is not written. GIF and WebP are decode-only.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    if matches!(format, ImageFormat::Gif | ImageFormat::WebP) {
        return Err(IoError::UnsupportedFormat(format!(
            "writing {} is not supported",
            format.extension()
        )));
    }
    let target = to_image_format(format)?;

    let img = DynamicImage::ImageRgb8(pix_to_rgb_image(pix)?);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, target)
        .map_err(|e| IoError::EncodeError(format!("{} encode error: {}", format.extension(), e)))?;
    Ok(buf.into_inner())
}

/// Encode a 32 bpp image and write it to a file
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let data = write_image_mem(pix, format)?;
    std::fs::write(path, data)?;
    Ok(())
}
