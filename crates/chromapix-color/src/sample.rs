//! Pixel color sampling
//!
//! Reads one pixel of a decoded RGB image and reports it in all three
//! encodings.

use crate::codec::{rgb_to_cmyk, rgb_to_hex};
use crate::format::ColorFormat;
use crate::resolver::ConversionResult;
use crate::{ColorError, ColorResult};
use chromapix_core::{Pix, PixelDepth};

/// Sample the color at `(x, y)`
///
/// Coordinates are 0-indexed from the top-left corner. Signed coordinates
/// are accepted so that negative user input reports as out of bounds rather
/// than failing to convert.
///
/// The source and target tags of the result are both [`ColorFormat::Rgb`].
///
/// # Errors
///
/// - [`ColorError::UnsupportedDepth`] if the image is not 32 bpp
/// - [`ColorError::OutOfBounds`] if the coordinate lies outside the image
///
/// # Examples
///
/// ```
/// use chromapix_color::sample_pixel;
/// use chromapix_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
/// let result = sample_pixel(&pix, 1, 2).unwrap();
/// assert_eq!(result.hex, "#000000");
/// assert!(sample_pixel(&pix, 4, 0).is_err());
/// ```
pub fn sample_pixel(pix: &Pix, x: i64, y: i64) -> ColorResult<ConversionResult> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32 bpp",
            actual: pix.depth().bits(),
        });
    }

    let (width, height) = (pix.width(), pix.height());
    let out_of_bounds = || ColorError::OutOfBounds {
        x,
        y,
        width,
        height,
    };

    let px = u32::try_from(x).map_err(|_| out_of_bounds())?;
    let py = u32::try_from(y).map_err(|_| out_of_bounds())?;
    let (r, g, b) = pix.get_rgb(px, py).ok_or_else(out_of_bounds)?;
    log::debug!("sampled ({}, {}) of {}x{} image: ({}, {}, {})", x, y, width, height, r, g, b);

    let hex = rgb_to_hex(r, g, b)?;
    let cmyk = rgb_to_cmyk(r, g, b)?;
    Ok(ConversionResult {
        source: ColorFormat::Rgb,
        target: ColorFormat::Rgb,
        hex,
        rgb: (r, g, b).into(),
        cmyk,
    })
}

/// Parse an `x,y` pixel coordinate
///
/// Surrounding whitespace is ignored and a full-width comma (`，`) is
/// accepted as the separator. Range checking against an image is left to
/// [`sample_pixel`].
///
/// # Errors
///
/// - [`ColorError::InvalidFormat`] unless there are exactly two parts
/// - [`ColorError::InvalidType`] if either part is not an integer
pub fn parse_coordinate(s: &str) -> ColorResult<(i64, i64)> {
    let normalized = s.trim().replace('，', ",");
    let parts: Vec<&str> = normalized.split(',').map(str::trim).collect();

    let [x, y] = parts[..] else {
        return Err(ColorError::InvalidFormat(format!(
            "'{}' is not a coordinate: expected x,y (e.g. 1490,532)",
            s.trim()
        )));
    };

    let parse = |part: &str| {
        part.parse::<i64>().map_err(|_| {
            ColorError::InvalidType(format!("coordinates must be integers (got '{}')", part))
        })
    };
    Ok((parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromapix_test::{coordinate_pix, solid_pix};

    #[test]
    fn test_sample_solid() {
        let pix = solid_pix(10, 10, (255, 0, 0)).unwrap();
        let result = sample_pixel(&pix, 5, 5).unwrap();
        assert_eq!(result.source, ColorFormat::Rgb);
        assert_eq!(result.target, ColorFormat::Rgb);
        assert_eq!(result.rgb, (255, 0, 0));
        assert_eq!(result.hex, "#FF0000");
        assert_eq!(result.cmyk, (0.0, 100.0, 100.0, 0.0));
    }

    #[test]
    fn test_sample_corners() {
        let pix = coordinate_pix(7, 5).unwrap();
        assert_eq!(sample_pixel(&pix, 0, 0).unwrap().rgb, (0, 0, 0));
        assert_eq!(sample_pixel(&pix, 6, 0).unwrap().rgb, (6, 0, 6));
        assert_eq!(sample_pixel(&pix, 0, 4).unwrap().rgb, (0, 4, 4));
        assert_eq!(sample_pixel(&pix, 6, 4).unwrap().rgb, (6, 4, 2));
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let pix = solid_pix(10, 10, (255, 0, 0)).unwrap();
        for (x, y) in [(10, 5), (-1, 0), (0, 10), (0, -1), (i64::MAX, 0), (i64::MIN, 0)] {
            let err = sample_pixel(&pix, x, y).unwrap_err();
            assert!(
                matches!(err, ColorError::OutOfBounds { x: ex, y: ey, width: 10, height: 10 } if ex == x && ey == y),
                "({x}, {y}) should be out of bounds"
            );
        }
    }

    #[test]
    fn test_sample_rejects_grayscale() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            sample_pixel(&pix, 0, 0),
            Err(ColorError::UnsupportedDepth { actual: 8, .. })
        ));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("1490,532").unwrap(), (1490, 532));
        assert_eq!(parse_coordinate(" 3 , 4 ").unwrap(), (3, 4));
        assert_eq!(parse_coordinate("3，4").unwrap(), (3, 4));
        assert_eq!(parse_coordinate("-1,0").unwrap(), (-1, 0));
    }

    #[test]
    fn test_parse_coordinate_errors() {
        for bad in ["", "12", "1,2,3", "1 2"] {
            assert!(
                matches!(parse_coordinate(bad), Err(ColorError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
        for bad in ["a,1", "1,2.5", "1,"] {
            assert!(
                matches!(parse_coordinate(bad), Err(ColorError::InvalidType(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
