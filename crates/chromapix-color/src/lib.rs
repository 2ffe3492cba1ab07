//! Chromapix Color - Color encoding conversion and sampling
//!
//! This crate converts colors between their HEX, RGB and CMYK encodings:
//!
//! - **Codec** ([`codec`]): validated RGB <-> HEX <-> CMYK conversion
//! - **Format resolution** ([`resolver`]): detect the encoding of a free-form
//!   token such as `F00`, `255, 0, 0` or `0,100,100,0`
//! - **Sampling** ([`sample`]): read one pixel of a decoded image
//! - **Reports** ([`report`]): plain-text rendering of results

pub mod codec;
pub mod error;
pub mod format;
pub mod number;
pub mod report;
pub mod resolver;
pub mod sample;

// Re-export core types
pub use chromapix_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export codec types and functions
pub use codec::{
    // Types
    Cmyk,
    HexColor,
    Rgb,
    // Functions
    cmyk_to_hex,
    cmyk_to_rgb,
    format_percent,
    hex_to_cmyk,
    hex_to_rgb,
    rgb_to_cmyk,
    rgb_to_hex,
    validate_cmyk,
    validate_rgb,
};

pub use format::ColorFormat;
pub use number::Number;

// Re-export resolver types and functions
pub use resolver::{
    // Types
    ColorInput,
    ConversionResult,
    Resolver,
    ResolverOptions,
    // Functions
    convert,
    detect_format,
};

pub use report::{format_conversion, format_sample, help_text};
pub use sample::{parse_coordinate, sample_pixel};
