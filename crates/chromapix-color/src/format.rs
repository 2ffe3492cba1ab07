//! Color format tags

use crate::{ColorError, ColorResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the three supported color encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#RRGGBB`
    Hex,
    /// Three integers in [0, 255]
    Rgb,
    /// Four percentages in [0, 100]
    Cmyk,
}

impl ColorFormat {
    /// All formats, in display order
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Cmyk];

    /// Lowercase tag (`"hex"`, `"rgb"`, `"cmyk"`)
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Cmyk => "cmyk",
        }
    }

    /// Uppercase label used in reports
    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Cmyk => "CMYK",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a target word such as `rgb` or `HEX` (case-insensitive)
impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        let word = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(word))
            .ok_or_else(|| ColorError::UnknownTarget(word.to_string()))
    }
}
