//! chromapix-test - Regression test harness for chromapix
//!
//! Provides [`RegParams`], which records every comparison made by a
//! regression test and reports all failures at the end, plus builders for
//! the in-memory images those tests sample from.
//!
//! # Usage
//!
//! ```ignore
//! use chromapix_test::{RegParams, solid_pix};
//!
//! let mut rp = RegParams::new("sample");
//! let pix = solid_pix(10, 10, (255, 0, 0)).unwrap();
//! rp.compare_values(10.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use chromapix_core::{ImageFormat, Pix, PixelDepth};

/// Build a 32 bpp image filled with one color
pub fn solid_pix(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<Pix> {
    let name = format!("solid {}x{}", width, height);
    let build_err = |e: chromapix_core::Error| TestError::ImageBuild {
        name: name.clone(),
        message: e.to_string(),
    };

    let pix = Pix::new(width, height, PixelDepth::Bit32).map_err(build_err)?;
    let mut pix_mut = pix.to_mut();
    pix_mut.set_all_rgb(rgb.0, rgb.1, rgb.2).map_err(build_err)?;
    Ok(pix_mut.into())
}

/// Build a 32 bpp image whose pixel at (x, y) is `(x, y, x ^ y)` (mod 256)
///
/// Every pixel is distinct for images up to 256x256, which makes
/// coordinate mix-ups (swapped axes, off-by-one rows) visible.
pub fn coordinate_pix(width: u32, height: u32) -> TestResult<Pix> {
    let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            samples.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8]);
        }
    }
    Pix::from_rgb_samples(width, height, &samples).map_err(|e| TestError::ImageBuild {
        name: format!("coordinate {}x{}", width, height),
        message: e.to_string(),
    })
}

/// Encode an image into `format`, for feeding the decoder
pub fn encode_pix(pix: &Pix, format: ImageFormat) -> TestResult<Vec<u8>> {
    chromapix_io::write_image_mem(pix, format).map_err(|e| TestError::ImageEncode {
        name: format!("{}x{}.{}", pix.width(), pix.height(), format.extension()),
        message: e.to_string(),
    })
}
