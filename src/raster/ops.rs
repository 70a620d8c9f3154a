/// Pixel operations applied after a contain resize

use crate::error::{AssetError, Result};
use image::{ImageFormat, Pixel, Rgba, RgbaImage};
use std::io::Cursor;

/// Composite every pixel over an opaque background; the result is fully opaque
pub fn flatten(img: &mut RgbaImage, background: Rgba<u8>) {
    let [br, bg, bb, _] = background.0;

    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let mix = |fg: u8, back: u8| -> u8 {
            ((fg as u32 * alpha + back as u32 * (255 - alpha) + 127) / 255) as u8
        };
        *pixel = Rgba([mix(r, br), mix(g, bg), mix(b, bb), 255]);
    }
}

/// Two-tone silhouette: luma >= `cutoff` turns white, anything darker black
///
/// Luma uses the Rec.709 weights of `Pixel::to_luma` (0.2126, 0.7152,
/// 0.0722) on the sRGB values. libvips-based tools weight channels
/// differently, so pixels sitting right at the cutoff may flip side
/// compared to them. Alpha is left alone so transparent padding stays
/// transparent.
pub fn threshold(img: &mut RgbaImage, cutoff: u8) {
    for pixel in img.pixels_mut() {
        let luma = pixel.to_luma().0[0];
        let value = if luma >= cutoff { 255 } else { 0 };
        let alpha = pixel.0[3];
        *pixel = Rgba([value, value, value, alpha]);
    }
}

/// Encode as PNG into memory
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(AssetError::Encode)?;
    Ok(buffer)
}
