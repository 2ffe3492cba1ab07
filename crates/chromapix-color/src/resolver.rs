//! Format resolution
//!
//! Decides which color encoding a free-form text token represents and runs
//! it through the codec to produce all three representations.
//!
//! # Classification
//!
//! In priority order:
//!
//! 1. The token is trimmed, full-width commas (`，`) become `,` and one
//!    leading `#` is dropped.
//! 2. Exactly 3 or 6 hex digits: **hex**.
//! 3. Otherwise the token is split on commas (and whitespace, by default)
//!    and every part must parse as a [`Number`].
//! 4. By count and range:
//!    - 3 numbers in [0, 255]: **rgb**, unless all three are also in
//!      [0, 100] and at least one has a decimal point, which reads as a
//!      CMY triple (**cmyk** with K = 0)
//!    - 4 numbers in [0, 100]: **cmyk**
//!    - anything else: unrecognized
//!
//! The RGB-vs-CMY rule for 3 values is a heuristic: `72,100,50` is read as
//! RGB and `72.5,100,50` as CMY. [`ResolverOptions::cmy_for_fractional`]
//! turns it off.

use crate::codec::{self, Cmyk, HexColor, Rgb};
use crate::format::ColorFormat;
use crate::number::Number;
use crate::{ColorError, ColorResult};
use serde::Serialize;

/// Options for format resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Treat runs of whitespace like commas (`255 0 0` == `255,0,0`)
    pub split_on_whitespace: bool,
    /// Read three fractional values that all lie in [0, 100] as CMY (K = 0)
    /// instead of RGB
    pub cmy_for_fractional: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            split_on_whitespace: true,
            cmy_for_fractional: true,
        }
    }
}

/// A classified color token and its payload
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// 3 or 6 hex digits, without `#`, not yet expanded
    Hex(String),
    /// Three channel values, not yet range-checked by the codec
    Rgb([Number; 3]),
    /// Four channel values (K = 0 for a CMY triple)
    Cmyk([Number; 4]),
}

impl ColorInput {
    /// The format this input was classified as
    pub fn format(&self) -> ColorFormat {
        match self {
            ColorInput::Hex(_) => ColorFormat::Hex,
            ColorInput::Rgb(_) => ColorFormat::Rgb,
            ColorInput::Cmyk(_) => ColorFormat::Cmyk,
        }
    }

    /// Run the input through the codec, producing all three representations
    ///
    /// # Errors
    ///
    /// Surfaces the codec's [`ColorError::InvalidType`],
    /// [`ColorError::InvalidRange`] or [`ColorError::InvalidFormat`].
    pub fn resolve(&self, target: ColorFormat) -> ColorResult<ConversionResult> {
        let source = self.format();
        match self {
            ColorInput::Hex(digits) => {
                let rgb = codec::hex_to_rgb(digits)?;
                Ok(ConversionResult::from_rgb(source, target, rgb))
            }
            ColorInput::Rgb([r, g, b]) => {
                let rgb = codec::validate_rgb(*r, *g, *b)?;
                Ok(ConversionResult::from_rgb(source, target, rgb))
            }
            ColorInput::Cmyk([c, m, y, k]) => {
                let cmyk = codec::validate_cmyk(*c, *m, *y, *k)?;
                let rgb = cmyk.to_rgb();
                Ok(ConversionResult {
                    source,
                    target,
                    hex: rgb.to_hex(),
                    rgb,
                    cmyk: cmyk.rounded(),
                })
            }
        }
    }
}

/// The result of a conversion: every representation of one color
///
/// Serializes as
/// `{"source":"hex","target":"rgb","hex":"#FF0000","rgb":[255,0,0],"cmyk":[0.0,100.0,100.0,0.0]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Format the input was recognized as
    pub source: ColorFormat,
    /// Format the caller asked for
    pub target: ColorFormat,
    pub hex: HexColor,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
}

impl ConversionResult {
    /// Build a result from a validated RGB color
    pub fn from_rgb(source: ColorFormat, target: ColorFormat, rgb: Rgb) -> Self {
        Self {
            source,
            target,
            hex: rgb.to_hex(),
            rgb,
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Text of one representation: `#FF0000`, `RGB(255, 0, 0)` or
    /// `CMYK(0%, 100%, 100%, 0%)`
    pub fn value_of(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.to_string(),
            ColorFormat::Rgb => self.rgb.to_string(),
            ColorFormat::Cmyk => self.cmyk.to_string(),
        }
    }

    /// Text of the requested representation
    pub fn requested(&self) -> String {
        self.value_of(self.target)
    }
}

/// Format resolver
///
/// # Examples
///
/// ```
/// use chromapix_color::{ColorFormat, Resolver};
///
/// let resolver = Resolver::default();
/// let result = resolver.convert(ColorFormat::Rgb, "72C0FF").unwrap();
/// assert_eq!(result.source, ColorFormat::Hex);
/// assert_eq!(result.rgb, (0x72, 0xC0, 0xFF));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolverOptions,
}

impl Resolver {
    /// Create a resolver with the given options
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// The options in effect
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Classify a token, returning `None` if it matches no supported shape
    pub fn classify(&self, raw: &str) -> Option<ColorInput> {
        let normalized = raw.trim().replace('，', ",");
        let body = normalized.strip_prefix('#').unwrap_or(&normalized);

        if matches!(body.len(), 3 | 6) && body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Some(ColorInput::Hex(body.to_string()));
        }

        let numbers = self.parse_numbers(body)?;
        let in_range = |max: f64| numbers.iter().all(|n| (0.0..=max).contains(&n.as_f64()));

        match numbers[..] {
            [r, g, b] if in_range(255.0) => {
                let fractional = numbers.iter().any(|n| n.is_real());
                if self.options.cmy_for_fractional && fractional && in_range(100.0) {
                    Some(ColorInput::Cmyk([r, g, b, Number::Integer(0)]))
                } else {
                    Some(ColorInput::Rgb([r, g, b]))
                }
            }
            [c, m, y, k] if in_range(100.0) => Some(ColorInput::Cmyk([c, m, y, k])),
            _ => None,
        }
    }

    /// Split into tokens and parse each one; `None` if any token is not a number
    fn parse_numbers(&self, body: &str) -> Option<Vec<Number>> {
        let split_whitespace = self.options.split_on_whitespace;
        let tokens: Vec<&str> = body
            .split(|c: char| c == ',' || (split_whitespace && c.is_whitespace()))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return None;
        }
        tokens.into_iter().map(|t| Number::parse(t).ok()).collect()
    }

    /// Classify a token
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Unrecognized`] if the token matches no
    /// supported shape.
    pub fn detect(&self, raw: &str) -> ColorResult<ColorInput> {
        match self.classify(raw) {
            Some(input) => {
                log::debug!("classified {:?} as {}", raw, input.format());
                Ok(input)
            }
            None => {
                log::debug!("could not classify {:?}", raw);
                Err(ColorError::Unrecognized {
                    input: raw.trim().to_string(),
                })
            }
        }
    }

    /// Classify a token and convert it, computing all three representations
    pub fn convert(&self, target: ColorFormat, raw: &str) -> ColorResult<ConversionResult> {
        self.detect(raw)?.resolve(target)
    }
}

/// Classify a token with the default resolver
pub fn detect_format(raw: &str) -> ColorResult<ColorInput> {
    Resolver::default().detect(raw)
}

/// Convert a token with the default resolver
///
/// # Examples
///
/// ```
/// use chromapix_color::{convert, ColorFormat};
///
/// let result = convert(ColorFormat::Hex, "114,166,255").unwrap();
/// assert_eq!(result.hex, "#72A6FF");
/// assert_eq!(result.requested(), "#72A6FF");
/// ```
pub fn convert(target: ColorFormat, raw: &str) -> ColorResult<ConversionResult> {
    Resolver::default().convert(target, raw)
}
