/// CSS color parsing
///
/// Colors arrive from the command line as opaque strings. They are only
/// parsed here, at the point where one has to be painted into pixels, and
/// anything CSS accepts is fine: names, 3/4/6/8-digit hex, `rgb()`, `hsl()`.

use crate::error::{AssetError, Result};
use image::Rgba;

/// Parse a CSS color into a pixel
///
/// # Examples
/// * `"#fff"` → `Rgba([255, 255, 255, 255])`
/// * `"white"` → `Rgba([255, 255, 255, 255])`
/// * `"rgb(17 34 51)"` → `Rgba([0x11, 0x22, 0x33, 255])`
pub fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let color = csscolorparser::parse(value.trim())
        .map_err(|_| AssetError::InvalidColor(value.to_string()))?;
    Ok(Rgba(color.to_rgba8()))
}
