//! Chromapix - Color conversion and pixel sampling for Rust
//!
//! # Overview
//!
//! Chromapix converts colors between three encodings and reads colors out of
//! images:
//!
//! - HEX (`#RRGGBB`, or the 3-digit shorthand `F00`)
//! - RGB (three integers in 0-255)
//! - CMYK (four percentages in 0-100)
//! - Format detection for free-form tokens such as `255, 0, 0`
//! - Single-pixel sampling from decoded PNG, JPEG, BMP, TIFF, PNM, GIF and
//!   WebP images
//!
//! # Example
//!
//! ```
//! use chromapix::color::{ColorFormat, convert, sample_pixel};
//! use chromapix::{Pix, PixelDepth};
//!
//! let result = convert(ColorFormat::Cmyk, "#72A6FF").unwrap();
//! assert_eq!(result.requested(), "CMYK(55.29%, 34.9%, 0%, 0%)");
//!
//! let pix = Pix::new(8, 8, PixelDepth::Bit32).unwrap();
//! let mut pix_mut = pix.to_mut();
//! pix_mut.set_rgb(3, 4, 255, 0, 0).unwrap();
//! let pix: Pix = pix_mut.into();
//! assert_eq!(sample_pixel(&pix, 3, 4).unwrap().hex, "#FF0000");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromapix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use chromapix_color as color;
pub use chromapix_io as io;
