//! Plain-text reports for conversion and sampling results

use crate::format::ColorFormat;
use crate::resolver::ConversionResult;

/// One `LABEL: value` line, e.g. `HEX: #FF0000`
fn line(result: &ConversionResult, format: ColorFormat) -> String {
    format!("{}: {}", format.label(), result.value_of(format))
}

/// Render a conversion result
///
/// ```text
/// Conversion: HEX -> RGB
/// RGB: RGB(114, 192, 255)
///
/// Other formats:
/// HEX: #72C0FF
/// CMYK: CMYK(55.29%, 24.71%, 0%, 0%)
/// ```
pub fn format_conversion(result: &ConversionResult) -> String {
    let mut lines = vec![
        format!(
            "Conversion: {} -> {}",
            result.source.label(),
            result.target.label()
        ),
        line(result, result.target),
        String::new(),
        "Other formats:".to_string(),
    ];
    lines.extend(
        ColorFormat::ALL
            .into_iter()
            .filter(|&format| format != result.target)
            .map(|format| line(result, format)),
    );
    lines.join("\n")
}

/// Render a sampled pixel, with the image size and coordinate in the header
pub fn format_sample(result: &ConversionResult, width: u32, height: u32, x: i64, y: i64) -> String {
    let mut lines = vec![
        format!(
            "Sampled color (image size: {}x{}, coordinate: ({},{}))",
            width, height, x, y
        ),
        String::new(),
    ];
    lines.extend(ColorFormat::ALL.into_iter().map(|format| line(result, format)));
    lines.join("\n")
}

/// Usage text for the conversion and pick commands
pub fn help_text() -> &'static str {
    "=== Color conversion help ===\n\
     Usage: color <target> <value>\n\
     \x20 e.g. color rgb 72C0FF\n\
     \x20 e.g. color cmyk 114,166,255\n\
     \x20 e.g. color hex 55,35,0,0\n\
     \n\
     <target>: rgb, hex or cmyk\n\
     <value>: one of\n\
     \x20 - HEX: 3 or 6 hex digits, '#' optional (e.g. F00 or FF0000)\n\
     \x20 - RGB: 3 numbers from 0-255, comma separated (e.g. 255,0,0)\n\
     \x20 - CMYK: 4 numbers from 0-100, comma separated (e.g. 0,100,100,0)\n\
     \n\
     Pick: color pick <x,y> (with an image attached)\n\
     \x20 e.g. color pick 1490,532\n\
     \x20 Reports the color of pixel (x,y), counted from the top-left corner.\n\
     \n\
     Help: colorhelp"
}
