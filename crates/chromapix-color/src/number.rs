//! Numeric channel values
//!
//! Color channels arrive either from typed callers (`255`, `42.5`) or from
//! text tokens (`"255"`, `"42.5"`). [`Number`] keeps track of which kind of
//! number was supplied, because RGB channels must be whole numbers while
//! CMYK channels may be fractional, and the format resolver uses the
//! presence of a decimal point as a hint.

use crate::{ColorError, ColorResult};
use std::fmt;
use std::str::FromStr;

/// An integer or real channel value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Whole number (text without a decimal point)
    Integer(i64),
    /// Real number (text with a decimal point, or a float argument)
    Real(f64),
}

impl Number {
    /// Parse a text token.
    ///
    /// Tokens containing `.` are parsed as reals, all others as integers.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidType`] if the token is not a number of
    /// the expected kind (so `"1e3"` is rejected: it has no decimal point
    /// and is not an integer).
    pub fn parse(token: &str) -> ColorResult<Self> {
        let token = token.trim();
        let parsed = if token.contains('.') {
            token.parse::<f64>().ok().map(Number::Real)
        } else {
            token.parse::<i64>().ok().map(Number::Integer)
        };
        parsed.ok_or_else(|| ColorError::InvalidType(format!("'{}' is not a number", token)))
    }

    /// Whether this value was supplied as a real number
    pub fn is_real(self) -> bool {
        matches!(self, Number::Real(_))
    }

    /// The value as `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(v) => v as f64,
            Number::Real(v) => v,
        }
    }

    /// The value as a whole number, if it has no fractional part
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Number::Integer(v) => Some(v),
            Number::Real(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
            Number::Real(_) => None,
        }
    }
}

impl FromStr for Number {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Number::parse(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Real(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Number::Integer(v as i64)
                }
            }
        )*
    };
}

number_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Real(v as f64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Real(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_real() {
        assert_eq!(Number::parse("255").unwrap(), Number::Integer(255));
        assert_eq!(Number::parse(" -3 ").unwrap(), Number::Integer(-3));
        assert_eq!(Number::parse("42.5").unwrap(), Number::Real(42.5));
        assert_eq!(Number::parse("7.").unwrap(), Number::Real(7.0));
        assert_eq!(Number::parse(".5").unwrap(), Number::Real(0.5));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for token in ["abc", "", "1e3", "12px", "1.2.3", "0x10"] {
            assert!(
                matches!(Number::parse(token), Err(ColorError::InvalidType(_))),
                "{token:?} should not parse"
            );
        }
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Number::Integer(7).as_integer(), Some(7));
        assert_eq!(Number::Real(7.0).as_integer(), Some(7));
        assert_eq!(Number::Real(7.5).as_integer(), None);
        assert_eq!(Number::Real(f64::NAN).as_integer(), None);
        assert_eq!(Number::Real(f64::INFINITY).as_integer(), None);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Number::from(255u8), Number::Integer(255));
        assert_eq!(Number::from(-1i32), Number::Integer(-1));
        assert_eq!(Number::from(0.25f64), Number::Real(0.25));
        assert!(Number::from(1.0f32).is_real());
        assert!(!Number::from(1i64).is_real());
    }
}
