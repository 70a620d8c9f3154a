/// Raster capability used by the asset pipeline
///
/// This module handles:
/// - Decoding the source logo once (raster via `image`, vector via `resvg`)
/// - "Contain" resizing onto a transparent square canvas
/// - Background flattening and luminance thresholding
/// - PNG encoding and ICO packing

pub mod color;
pub mod ico;
pub mod ops;
pub mod source;

pub use color::parse_color;
pub use self::ico::pack_ico;
pub use ops::{encode_png, flatten, threshold};
pub use source::{is_svg, SourceImage};
