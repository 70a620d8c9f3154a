/// Source logo loading and "contain" rendering
///
/// The source is decoded once per run. Raster formats go through `image`
/// with content sniffing; `.svg` files are parsed by `usvg` and rendered
/// directly at each target size so small icons stay sharp.

use crate::error::{AssetError, Result};
use image::{imageops::FilterType, DynamicImage, ImageReader, Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Check the file extension (case-insensitive) for `.svg`
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// System font database, so `<text>` in wordmark logos renders instead of
/// vanishing
pub fn system_fonts() -> Arc<usvg::fontdb::Database> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    tracing::debug!("🔤 Loaded {} system font faces", fontdb.len());
    Arc::new(fontdb)
}

/// A decoded logo, ready to be rendered at any size
pub enum SourceImage {
    Raster(DynamicImage),
    Vector { tree: usvg::Tree, path: PathBuf },
}

impl SourceImage {
    /// Load the logo from disk
    pub fn load(path: &Path) -> Result<Self> {
        if is_svg(path) {
            let data = fs::read(path).map_err(|e| AssetError::io(path, e))?;
            let mut opt = usvg::Options::default();
            opt.fontdb = system_fonts();
            let tree = usvg::Tree::from_data(&data, &opt).map_err(|e| {
                AssetError::Svg {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;

            let size = tree.size();
            tracing::debug!("🖋️  Parsed SVG {} ({}x{})", path.display(), size.width(), size.height());
            return Ok(SourceImage::Vector {
                tree,
                path: path.to_path_buf(),
            });
        }

        let decode_err = |source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        };
        let img = ImageReader::open(path)
            .map_err(|e| AssetError::io(path, e))?
            .with_guessed_format()
            .map_err(|e| AssetError::io(path, e))?
            .decode()
            .map_err(decode_err)?;

        tracing::debug!("🖼️  Decoded {} ({}x{})", path.display(), img.width(), img.height());
        Ok(SourceImage::Raster(img))
    }

    /// Fit the whole logo inside a `size`x`size` square, preserving aspect
    /// ratio and padding the remainder with transparent pixels
    pub fn render_contain(&self, size: u32) -> Result<RgbaImage> {
        match self {
            SourceImage::Raster(img) => Ok(contain_raster(img, size)),
            SourceImage::Vector { tree, path } => contain_vector(tree, path, size),
        }
    }
}

fn contain_raster(img: &DynamicImage, size: u32) -> RgbaImage {
    // resize() keeps the aspect ratio and fits within the bounds
    let resized = img.resize(size, size, FilterType::Lanczos3).to_rgba8();

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let x = (size - resized.width()) / 2;
    let y = (size - resized.height()) / 2;
    image::imageops::replace(&mut canvas, &resized, x as i64, y as i64);
    canvas
}

fn contain_vector(tree: &usvg::Tree, path: &Path, size: u32) -> Result<RgbaImage> {
    let empty = || AssetError::EmptySvg {
        path: path.to_path_buf(),
    };

    let (width, height) = (tree.size().width(), tree.size().height());
    if width <= 0.0 || height <= 0.0 {
        return Err(empty());
    }

    let target = size as f32;
    let scale = (target / width).min(target / height);
    let tx = (target - width * scale) / 2.0;
    let ty = (target - height * scale) / 2.0;

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or_else(empty)?;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);
    resvg::render(tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha, `image` expects straight alpha
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect::<Vec<u8>>();

    RgbaImage::from_raw(size, size, pixels).ok_or_else(empty)
}
