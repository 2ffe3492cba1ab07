//! Error types for chromapix-color

use thiserror::Error;

/// Errors that can occur during color conversion and sampling
///
/// Every message is written to be shown to an end user as-is.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromapix_core::Error),

    /// A value could not be read as the kind of number required
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// A number lies outside the valid interval of its format
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Malformed hex color or coordinate string
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The input matches none of the supported color shapes
    #[error(
        "unrecognized color format: {input}\n\n\
         Supported formats:\n\
         - HEX: 3 or 6 hex digits (e.g. FF0000 or F00)\n\
         - RGB: 3 numbers from 0-255 (e.g. 255,0,0)\n\
         - CMYK: 4 numbers from 0-100 (e.g. 0,100,100,0)"
    )]
    Unrecognized { input: String },

    /// Unknown conversion target
    #[error("unknown target format '{0}': must be one of rgb, hex or cmyk")]
    UnknownTarget(String),

    /// Pixel coordinate outside the image
    #[error("coordinate ({x},{y}) is outside the image (size: {width}x{height})")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual} bpp")]
    UnsupportedDepth { expected: &'static str, actual: u32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
