//! chromapix IO - Image decoding for color sampling
//!
//! Turns encoded image bytes (PNG, JPEG, BMP, GIF, TIFF, PNM, WebP) into the
//! RGB [`Pix`](chromapix_core::Pix) that the sampler reads from. Decoding
//! itself is delegated to the `image` crate; this crate sniffs the format,
//! normalizes the pixels to 3-channel RGB and records where they came from.

mod decode;
mod encode;
mod error;
pub mod format;

pub use chromapix_core::ImageFormat;
pub use decode::{pix_from_rgb_image, read_image, read_image_mem};
pub use encode::{write_image, write_image_mem};
pub use error::{IoError, IoResult};
pub use format::detect_format_from_bytes;
