//! HEX / RGB / CMYK conversion
//!
//! Provides conversion between the three color encodings:
//! - RGB <-> HEX (exact, integer round-trip)
//! - RGB <-> CMYK (lossy: CMYK is rounded to 2 decimals, so RGB -> CMYK ->
//!   RGB may be off by 1 per channel)
//! - HEX <-> CMYK (through RGB)
//!
//! The free functions validate their inputs and return
//! [`ColorError::InvalidType`], [`ColorError::InvalidRange`] or
//! [`ColorError::InvalidFormat`]. Once a value is held in [`Rgb`] or
//! [`Cmyk`] it is known to be valid, and the methods on those types are
//! infallible.
//!
//! # Rounding
//!
//! Both rounding steps use round-half-away-from-zero (`f64::round`): CMYK
//! percentages are rounded to 2 decimals, RGB channels to the nearest
//! integer.

use crate::number::Number;
use crate::{ColorError, ColorResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// `k` above this threshold is treated as pure black, where the C/M/Y
/// formulas would divide by zero.
const BLACK_THRESHOLD: f64 = 0.999_999;

/// RGB color, each channel in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as a tuple
    pub fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Encode as `#RRGGBB`
    pub fn to_hex(self) -> HexColor {
        HexColor {
            text: format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            rgb: self,
        }
    }

    /// Convert to CMYK percentages, rounded to 2 decimals
    pub fn to_cmyk(self) -> Cmyk {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let k = 1.0 - r.max(g).max(b);
        let (c, m, y) = if k > BLACK_THRESHOLD {
            (0.0, 0.0, 0.0)
        } else {
            (
                (1.0 - r - k) / (1.0 - k),
                (1.0 - g - k) / (1.0 - k),
                (1.0 - b - k) / (1.0 - k),
            )
        };

        Cmyk {
            c: round2(c * 100.0),
            m: round2(m * 100.0),
            y: round2(y * 100.0),
            k: round2(k * 100.0),
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl PartialEq<(u8, u8, u8)> for Rgb {
    fn eq(&self, other: &(u8, u8, u8)) -> bool {
        self.as_tuple() == *other
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Serialized as a `[r, g, b]` array
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_tuple().serialize(serializer)
    }
}

/// CMYK color, each channel a percentage in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Create a validated CMYK color
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidType`] for non-finite values and
    /// [`ColorError::InvalidRange`] for values outside [0, 100].
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> ColorResult<Self> {
        validate_cmyk(c, m, y, k)
    }

    /// The channels as a tuple
    pub fn as_tuple(self) -> (f64, f64, f64, f64) {
        (self.c, self.m, self.y, self.k)
    }

    /// Round every channel to 2 decimals
    pub fn rounded(self) -> Self {
        Self {
            c: round2(self.c),
            m: round2(self.m),
            y: round2(self.y),
            k: round2(self.k),
        }
    }

    /// Convert to RGB
    pub fn to_rgb(self) -> Rgb {
        let c = self.c / 100.0;
        let m = self.m / 100.0;
        let y = self.y / 100.0;
        let k = self.k / 100.0;

        Rgb {
            r: to_channel(255.0 * (1.0 - c) * (1.0 - k)),
            g: to_channel(255.0 * (1.0 - m) * (1.0 - k)),
            b: to_channel(255.0 * (1.0 - y) * (1.0 - k)),
        }
    }
}

impl PartialEq<(f64, f64, f64, f64)> for Cmyk {
    fn eq(&self, other: &(f64, f64, f64, f64)) -> bool {
        self.as_tuple() == *other
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CMYK({}%, {}%, {}%, {}%)",
            format_percent(self.c),
            format_percent(self.m),
            format_percent(self.y),
            format_percent(self.k)
        )
    }
}

/// Serialized as a `[c, m, y, k]` array
impl Serialize for Cmyk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_tuple().serialize(serializer)
    }
}

/// Canonical hex color: `#` followed by 6 uppercase hex digits
///
/// Only built from an [`Rgb`], so the text and the channels always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Parse a 3- or 6-digit hex color into canonical form
    pub fn parse(s: &str) -> ColorResult<Self> {
        hex_to_rgb(s).map(Rgb::to_hex)
    }

    /// The canonical `#RRGGBB` text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decode to RGB
    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Serialized as the `#RRGGBB` string
impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

// =============================================================================
// Validation
// =============================================================================

fn rgb_channel(value: Number) -> ColorResult<u8> {
    let v = value.as_integer().ok_or_else(|| {
        ColorError::InvalidType(format!("RGB values must be integers (got {})", value))
    })?;
    u8::try_from(v).map_err(|_| {
        ColorError::InvalidRange(format!("RGB values must be in the range 0-255 (got {})", v))
    })
}

fn cmyk_channel(value: Number) -> ColorResult<f64> {
    let v = value.as_f64();
    if !v.is_finite() {
        return Err(ColorError::InvalidType(format!(
            "CMYK values must be numbers (got {})",
            value
        )));
    }
    if !(0.0..=100.0).contains(&v) {
        return Err(ColorError::InvalidRange(format!(
            "CMYK values must be in the range 0-100 (got {})",
            value
        )));
    }
    Ok(v)
}

/// Validate three RGB channels
///
/// # Errors
///
/// [`ColorError::InvalidType`] if a channel is not a whole number,
/// [`ColorError::InvalidRange`] if it lies outside [0, 255].
pub fn validate_rgb(
    r: impl Into<Number>,
    g: impl Into<Number>,
    b: impl Into<Number>,
) -> ColorResult<Rgb> {
    Ok(Rgb {
        r: rgb_channel(r.into())?,
        g: rgb_channel(g.into())?,
        b: rgb_channel(b.into())?,
    })
}

/// Validate four CMYK channels
///
/// # Errors
///
/// [`ColorError::InvalidType`] if a channel is not finite,
/// [`ColorError::InvalidRange`] if it lies outside [0, 100].
pub fn validate_cmyk(
    c: impl Into<Number>,
    m: impl Into<Number>,
    y: impl Into<Number>,
    k: impl Into<Number>,
) -> ColorResult<Cmyk> {
    Ok(Cmyk {
        c: cmyk_channel(c.into())?,
        m: cmyk_channel(m.into())?,
        y: cmyk_channel(y.into())?,
        k: cmyk_channel(k.into())?,
    })
}

// =============================================================================
// Conversions
// =============================================================================

/// Convert RGB channels to `#RRGGBB`
///
/// # Examples
///
/// ```
/// use chromapix_color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(255, 0, 0).unwrap(), "#FF0000");
/// assert_eq!(rgb_to_hex(114, 166, 255).unwrap(), "#72A6FF");
/// assert!(rgb_to_hex(256, 0, 0).is_err());
/// ```
pub fn rgb_to_hex(
    r: impl Into<Number>,
    g: impl Into<Number>,
    b: impl Into<Number>,
) -> ColorResult<HexColor> {
    validate_rgb(r, g, b).map(Rgb::to_hex)
}

/// Decode a hex color
///
/// Surrounding whitespace and one leading `#` are ignored. Exactly 3 or 6
/// hex digits are accepted, in either case; the 3-digit form expands each
/// digit by duplication (`F00` -> `FF0000`).
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for any other length or for
/// non-hex characters.
pub fn hex_to_rgb(s: &str) -> ColorResult<Rgb> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let invalid = || ColorError::InvalidFormat(format!("'{}' is not a valid hex color", s.trim()));
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        3 => {
            let v = u16::from_str_radix(digits, 16).map_err(|_| invalid())?;
            let nibble = |shift: u16| ((v >> shift) & 0xF) as u8 * 17;
            Ok(Rgb::new(nibble(8), nibble(4), nibble(0)))
        }
        6 => {
            let v = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            let byte = |shift: u32| ((v >> shift) & 0xFF) as u8;
            Ok(Rgb::new(byte(16), byte(8), byte(0)))
        }
        _ => Err(invalid()),
    }
}

/// Convert RGB channels to CMYK percentages
///
/// `k = 1 - max(r', g', b')` with channels normalized to [0, 1]. Pure black
/// maps to `(0, 0, 0, 100)`. All four results are rounded to 2 decimals.
///
/// # Examples
///
/// ```
/// use chromapix_color::rgb_to_cmyk;
///
/// assert_eq!(rgb_to_cmyk(255, 0, 0).unwrap(), (0.0, 100.0, 100.0, 0.0));
/// assert_eq!(rgb_to_cmyk(0, 0, 0).unwrap(), (0.0, 0.0, 0.0, 100.0));
/// ```
pub fn rgb_to_cmyk(
    r: impl Into<Number>,
    g: impl Into<Number>,
    b: impl Into<Number>,
) -> ColorResult<Cmyk> {
    validate_rgb(r, g, b).map(Rgb::to_cmyk)
}

/// Convert CMYK percentages to RGB
///
/// `r = 255 (1 - c)(1 - k)` and likewise for g and b, each rounded to the
/// nearest integer and clamped to [0, 255].
pub fn cmyk_to_rgb(
    c: impl Into<Number>,
    m: impl Into<Number>,
    y: impl Into<Number>,
    k: impl Into<Number>,
) -> ColorResult<Rgb> {
    validate_cmyk(c, m, y, k).map(Cmyk::to_rgb)
}

/// Convert CMYK percentages to `#RRGGBB`
pub fn cmyk_to_hex(
    c: impl Into<Number>,
    m: impl Into<Number>,
    y: impl Into<Number>,
    k: impl Into<Number>,
) -> ColorResult<HexColor> {
    let rgb = cmyk_to_rgb(c, m, y, k)?;
    log::trace!("cmyk_to_hex via {}", rgb);
    rgb_to_hex(rgb.r, rgb.g, rgb.b)
}

/// Convert a hex color to CMYK percentages
pub fn hex_to_cmyk(s: &str) -> ColorResult<Cmyk> {
    let rgb = hex_to_rgb(s)?;
    log::trace!("hex_to_cmyk via {}", rgb);
    rgb_to_cmyk(rgb.r, rgb.g, rgb.b)
}

// =============================================================================
// Helpers
// =============================================================================

/// Round to 2 decimals, half away from zero
#[inline]
fn round2(v: f64) -> f64 {
    // + 0.0 turns -0.0 into 0.0
    (v * 100.0).round() / 100.0 + 0.0
}

/// Round to the nearest channel value, clamped to [0, 255]
#[inline]
fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Format a percentage with at most 2 decimals and no trailing zeros
///
/// `100.0` -> `"100"`, `45.1` -> `"45.1"`, `33.333` -> `"33.33"`.
pub fn format_percent(v: f64) -> String {
    let s = format!("{:.2}", v + 0.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0).unwrap(), "#FF0000");
        assert_eq!(rgb_to_hex(0, 0, 0).unwrap(), "#000000");
        assert_eq!(rgb_to_hex(1, 10, 171).unwrap(), "#010AAB");
        // Whole-valued reals are accepted
        assert_eq!(rgb_to_hex(255.0, 128, 0u8).unwrap(), "#FF8000");
    }

    #[test]
    fn test_rgb_to_hex_errors() {
        assert!(matches!(
            rgb_to_hex(256, 0, 0),
            Err(ColorError::InvalidRange(_))
        ));
        assert!(matches!(
            rgb_to_hex(0, -1, 0),
            Err(ColorError::InvalidRange(_))
        ));
        assert!(matches!(
            rgb_to_hex(0, 0, 12.5),
            Err(ColorError::InvalidType(_))
        ));
        assert!(matches!(
            rgb_to_hex(f64::NAN, 0, 0),
            Err(ColorError::InvalidType(_))
        ));
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("FF0000").unwrap(), (255, 0, 0));
        assert_eq!(hex_to_rgb("#72c0ff").unwrap(), (0x72, 0xC0, 0xFF));
        assert_eq!(hex_to_rgb("F00").unwrap(), (255, 0, 0));
        assert_eq!(hex_to_rgb("#abc").unwrap(), (0xAA, 0xBB, 0xCC));
        assert_eq!(hex_to_rgb("  #FfFfFf ").unwrap(), (255, 255, 255));
    }

    #[test]
    fn test_hex_to_rgb_errors() {
        for bad in ["", "#", "FF", "FFFF", "FFFFF", "FFFFFFF", "GG0000", "##FF0000", "F 0"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(ColorError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
        // Multi-byte characters must not be sliced
        assert!(hex_to_rgb("ＦＦ0").is_err());
    }

    #[test]
    fn test_rgb_to_cmyk() {
        assert_eq!(rgb_to_cmyk(255, 0, 0).unwrap(), (0.0, 100.0, 100.0, 0.0));
        assert_eq!(rgb_to_cmyk(255, 255, 255).unwrap(), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(rgb_to_cmyk(0, 0, 0).unwrap(), (0.0, 0.0, 0.0, 100.0));
        // 114,166,255 -> 55.29, 34.9, 0, 0
        assert_eq!(rgb_to_cmyk(114, 166, 255).unwrap(), (55.29, 34.9, 0.0, 0.0));
        // 128,128,128 -> k = 1 - 128/255 = 49.8%
        assert_eq!(rgb_to_cmyk(128, 128, 128).unwrap(), (0.0, 0.0, 0.0, 49.8));
    }

    #[test]
    fn test_cmyk_to_rgb() {
        assert_eq!(cmyk_to_rgb(0, 100, 100, 0).unwrap(), (255, 0, 0));
        assert_eq!(cmyk_to_rgb(0, 0, 0, 100).unwrap(), (0, 0, 0));
        assert_eq!(cmyk_to_rgb(0, 0, 0, 0).unwrap(), (255, 255, 255));
        // 55,35,0,0 -> 114.75 -> 115, 165.75 -> 166
        assert_eq!(cmyk_to_rgb(55, 35, 0, 0).unwrap(), (115, 166, 255));
        assert_eq!(cmyk_to_rgb(12.5, 0.0, 100, 50).unwrap(), (112, 128, 0));
    }

    #[test]
    fn test_cmyk_to_rgb_errors() {
        assert!(matches!(
            cmyk_to_rgb(101, 0, 0, 0),
            Err(ColorError::InvalidRange(_))
        ));
        assert!(matches!(
            cmyk_to_rgb(0, 0, -0.5, 0),
            Err(ColorError::InvalidRange(_))
        ));
        assert!(matches!(
            cmyk_to_rgb(0, f64::INFINITY, 0, 0),
            Err(ColorError::InvalidType(_))
        ));
    }

    #[test]
    fn test_two_hop_conversions() {
        assert_eq!(cmyk_to_hex(0, 100, 100, 0).unwrap(), "#FF0000");
        assert_eq!(hex_to_cmyk("F00").unwrap(), (0.0, 100.0, 100.0, 0.0));

        // Errors from either hop surface unchanged
        assert!(matches!(
            cmyk_to_hex(0, 0, 0, 200),
            Err(ColorError::InvalidRange(_))
        ));
        assert!(matches!(
            hex_to_cmyk("XYZ"),
            Err(ColorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_hex_color() {
        let hex = HexColor::parse("#0a0").unwrap();
        assert_eq!(hex.as_str(), "#00AA00");
        assert_eq!(hex.to_rgb(), (0, 170, 0));
        assert_eq!(hex.to_string(), "#00AA00");
        assert!(HexColor::parse("0a").is_err());
    }

    #[test]
    fn test_hex_color_channels_match_text() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (0x12, 0xAB, 0xF0), (1, 2, 3)] {
            let hex = Rgb::new(r, g, b).to_hex();
            assert_eq!(hex.to_rgb(), (r, g, b));
            assert_eq!(hex_to_rgb(hex.as_str()).unwrap(), hex.to_rgb());
            assert_eq!(HexColor::parse(hex.as_str()).unwrap(), hex);
        }
    }

    #[test]
    fn test_cmyk_new_and_rounded() {
        let cmyk = Cmyk::new(12.346, 0.0, 99.999, 50.0).unwrap();
        assert_eq!(cmyk.rounded(), (12.35, 0.0, 100.0, 50.0));
        assert!(Cmyk::new(0.0, 0.0, 0.0, 100.01).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "RGB(255, 0, 0)");
        assert_eq!(
            rgb_to_cmyk(114, 166, 255).unwrap().to_string(),
            "CMYK(55.29%, 34.9%, 0%, 0%)"
        );
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0), "100");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-0.0), "0");
        assert_eq!(format_percent(45.1), "45.1");
        assert_eq!(format_percent(33.333), "33.33");
        assert_eq!(format_percent(10.0), "10");
    }
}
