/// Asset generation pipeline
///
/// Turns one logo into the full favicon/PWA set inside one output directory.
/// Steps run strictly in order; the first failure aborts the run and
/// whatever was already written stays on disk.

use super::artifacts::{browserconfig_xml, meta_tags_html, pinned_tab_svg, Manifest};
use super::catalog::{
    output_file_names, Background, DerivedAsset, BROWSERCONFIG_XML, FAVICON_ICO, ICO_SIZES,
    MANIFEST_FILES, META_TAGS_HTML, PINNED_TAB_SIZE, PINNED_TAB_SVG, PINNED_TAB_THRESHOLD,
    RASTER_ASSETS,
};
use super::request::GenerationRequest;
use crate::error::{AssetError, Result};
use crate::raster::{self, SourceImage};
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Written files, in write order
    pub files: Vec<PathBuf>,
}

/// Generate every asset for `request`
///
/// Decoding and resizing are CPU-bound, so the whole run is moved onto a
/// blocking task and awaited.
pub async fn generate(request: GenerationRequest) -> Result<GenerationReport> {
    tokio::task::spawn_blocking(move || generate_blocking(&request))
        .await
        .map_err(|e| AssetError::Task(e.to_string()))?
}

/// Blocking implementation of the pipeline
pub fn generate_blocking(request: &GenerationRequest) -> Result<GenerationReport> {
    let out = &request.output_dir;
    fs::create_dir_all(out).map_err(|e| AssetError::io(out, e))?;

    let source = SourceImage::load(&request.source_image)?;
    tracing::debug!("Writing {:?} into {}", output_file_names(), out.display());
    let mut writer = AssetWriter::new(out);

    for asset in &RASTER_ASSETS {
        let png = render_asset(&source, asset, &request.background_color)?;
        writer.write(asset.file_name, &png)?;
    }

    let ico = render_favicon_ico(&source, &request.background_color)?;
    writer.write(FAVICON_ICO, &ico)?;

    write_pinned_tab(&source, &request.source_image, &mut writer)?;

    // One document, two sinks
    let manifest = Manifest::from_request(request).to_json()?;
    for name in MANIFEST_FILES {
        writer.write(name, manifest.as_bytes())?;
    }

    writer.write(BROWSERCONFIG_XML, browserconfig_xml(&request.theme_color).as_bytes())?;
    writer.write(
        META_TAGS_HTML,
        meta_tags_html(&request.app_name, &request.theme_color).as_bytes(),
    )?;

    tracing::info!("✅ Generated {} files in {}", writer.files.len(), out.display());

    Ok(GenerationReport {
        output_dir: out.clone(),
        files: writer.files,
    })
}

/// Contain-resize one catalog entry and encode it
fn render_asset(source: &SourceImage, asset: &DerivedAsset, background: &str) -> Result<Vec<u8>> {
    let mut img = source.render_contain(asset.size)?;
    if asset.background == Background::Flatten {
        raster::flatten(&mut img, raster::parse_color(background)?);
    }
    raster::encode_png(&img)
}

/// Every ICO layer is flattened; nothing is returned unless all layers and
/// the packing succeed
fn render_favicon_ico(source: &SourceImage, background: &str) -> Result<Vec<u8>> {
    let color = raster::parse_color(background)?;

    let layers = ICO_SIZES
        .iter()
        .map(|&size| {
            let mut img = source.render_contain(size)?;
            raster::flatten(&mut img, color);
            raster::encode_png(&img)
        })
        .collect::<Result<Vec<_>>>()?;

    raster::pack_ico(&layers)
}

/// SVG sources are already suitable mask icons and are copied verbatim;
/// raster sources become a thresholded silhouette wrapped in SVG
fn write_pinned_tab(source: &SourceImage, source_path: &Path, writer: &mut AssetWriter) -> Result<()> {
    if raster::is_svg(source_path) {
        return writer.copy(source_path, PINNED_TAB_SVG);
    }

    let mut img = source.render_contain(PINNED_TAB_SIZE)?;
    raster::threshold(&mut img, PINNED_TAB_THRESHOLD);
    let png = raster::encode_png(&img)?;
    writer.write(PINNED_TAB_SVG, pinned_tab_svg(&png).as_bytes())
}

/// Writes into the output directory and records what it wrote
struct AssetWriter<'a> {
    dir: &'a Path,
    files: Vec<PathBuf>,
}

impl<'a> AssetWriter<'a> {
    fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            files: Vec::new(),
        }
    }

    fn write(&mut self, name: &str, contents: &[u8]) -> Result<()> {
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|e| AssetError::io(&path, e))?;
        tracing::info!("📸 Wrote {} ({} bytes)", name, contents.len());
        self.files.push(path);
        Ok(())
    }

    fn copy(&mut self, from: &Path, name: &str) -> Result<()> {
        let path = self.dir.join(name);
        let bytes = fs::copy(from, &path).map_err(|e| AssetError::io(&path, e))?;
        tracing::info!("📋 Copied {} to {} ({} bytes)", from.display(), name, bytes);
        self.files.push(path);
        Ok(())
    }
}
