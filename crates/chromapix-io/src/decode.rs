//! Decoding encoded images into RGB rasters
//!
//! Every decoded image is normalized to 8-bit RGB: alpha is dropped, palettes
//! are expanded and grayscale is replicated into the three channels. The
//! resulting [`Pix`] is always 32 bpp with `spp = 3`.

use crate::format::{detect_format_from_bytes, to_image_format};
use crate::{IoError, IoResult};
use chromapix_core::Pix;
use image::RgbImage;
use std::path::Path;

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    read_image_mem(&data)
}

/// Read an image from an in-memory buffer
///
/// The format is detected from the leading magic bytes.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    let decoded = image::load_from_memory_with_format(data, to_image_format(format)?)
        .map_err(|e| IoError::DecodeError(format!("{} decode error: {}", format.extension(), e)))?;

    let color = decoded.color();
    if color.has_alpha() {
        log::debug!("discarding alpha channel of {:?} image", color);
    }
    if color.bytes_per_pixel() / color.channel_count() > 1 {
        log::warn!("reducing {:?} samples to 8 bits per channel", color);
    }

    let pix = pix_from_rgb_image(&decoded.to_rgb8())?;
    let mut pix_mut = pix.try_into_mut().map_err(|_| {
        IoError::InvalidData("decoded image unexpectedly shared".to_string())
    })?;
    pix_mut.set_informat(format);

    let pix: Pix = pix_mut.into();
    log::debug!(
        "decoded {} image: {}x{}",
        format.extension(),
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

/// Convert an `image` RGB buffer into a 32 bpp `Pix`
pub fn pix_from_rgb_image(img: &RgbImage) -> IoResult<Pix> {
    let (width, height) = img.dimensions();
    let pix = Pix::from_rgb_samples(width, height, img.as_raw())?;
    Ok(pix)
}

/// Convert a 32 bpp `Pix` into an `image` RGB buffer
pub(crate) fn pix_to_rgb_image(pix: &Pix) -> IoResult<RgbImage> {
    let mut samples = Vec::with_capacity(pix.width() as usize * pix.height() as usize * 3);
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let (r, g, b) = pix.get_rgb(x, y).ok_or_else(|| {
                IoError::UnsupportedFormat(format!(
                    "cannot encode {} bpp image as RGB",
                    pix.depth().bits()
                ))
            })?;
            samples.extend_from_slice(&[r, g, b]);
        }
    }
    RgbImage::from_raw(pix.width(), pix.height(), samples)
        .ok_or_else(|| IoError::InvalidData("RGB buffer size mismatch".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromapix_core::ImageFormat;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn test_pix_from_rgb_image() {
        let img = RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 10, y as u8 * 20, 7]));
        let pix = pix_from_rgb_image(&img).unwrap();
        assert_eq!((pix.width(), pix.height()), (3, 2));
        assert_eq!(pix.spp(), 3);
        assert_eq!(pix.get_rgb(2, 1), Some((20, 20, 7)));
        assert_eq!(pix.informat(), ImageFormat::Unknown);
    }

    #[test]
    fn test_read_rgba_png_drops_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();

        let pix = read_image_mem(buf.get_ref()).unwrap();
        assert_eq!(pix.informat(), ImageFormat::Png);
        assert_eq!(pix.spp(), 3);
        assert_eq!(pix.get_rgba(1, 1), Some((10, 20, 30, 255)));
    }

    #[test]
    fn test_read_garbage() {
        assert!(matches!(
            read_image_mem(b"not an image at all"),
            Err(IoError::UnsupportedFormat(_))
        ));
        // Valid magic, truncated body
        let truncated = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert!(matches!(
            read_image_mem(&truncated),
            Err(IoError::DecodeError(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/chromapix/image.png"),
            Err(IoError::Io(_))
        ));
    }
}
