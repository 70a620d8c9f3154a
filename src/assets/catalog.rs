/// Fixed catalog of generated files
///
/// Adding or removing a standalone PNG is a one-line edit to `RASTER_ASSETS`.
/// The pipeline and the tests both read from these tables.

/// What ends up behind the logo after the contain resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Keep the transparent padding
    Transparent,
    /// Composite onto the request's background color
    Flatten,
}

/// One standalone square PNG derived from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAsset {
    pub file_name: &'static str,
    pub size: u32,
    pub background: Background,
}

const fn asset(file_name: &'static str, size: u32, background: Background) -> DerivedAsset {
    DerivedAsset {
        file_name,
        size,
        background,
    }
}

/// Standalone PNGs, in generation order
pub const RASTER_ASSETS: [DerivedAsset; 6] = [
    asset("apple-touch-icon.png", 180, Background::Flatten),
    asset("android-chrome-192x192.png", 192, Background::Transparent),
    asset("android-chrome-512x512.png", 512, Background::Transparent),
    asset("mstile-150x150.png", 150, Background::Flatten),
    asset("favicon-16x16.png", 16, Background::Transparent),
    asset("favicon-32x32.png", 32, Background::Transparent),
];

pub const FAVICON_ICO: &str = "favicon.ico";
/// Layers packed into `favicon.ico`; each one is flattened
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

pub const PINNED_TAB_SVG: &str = "safari-pinned-tab.svg";
pub const PINNED_TAB_SIZE: u32 = 512;
/// Luma cutoff for raster silhouettes
pub const PINNED_TAB_THRESHOLD: u8 = 200;

/// Both names receive the same manifest document
pub const MANIFEST_FILES: [&str; 2] = ["manifest.json", "site.webmanifest"];
pub const BROWSERCONFIG_XML: &str = "browserconfig.xml";
pub const META_TAGS_HTML: &str = "meta-tags.html";

/// Every file name a successful run writes, in write order
pub fn output_file_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = RASTER_ASSETS.iter().map(|a| a.file_name).collect();
    names.push(FAVICON_ICO);
    names.push(PINNED_TAB_SVG);
    names.extend(MANIFEST_FILES);
    names.push(BROWSERCONFIG_XML);
    names.push(META_TAGS_HTML);
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_twelve_unique_outputs() {
        let names = output_file_names();
        assert_eq!(names.len(), 12);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), 12);
    }

    #[test]
    fn test_flattened_assets() {
        let flattened: Vec<&str> = RASTER_ASSETS
            .iter()
            .filter(|a| a.background == Background::Flatten)
            .map(|a| a.file_name)
            .collect();
        assert_eq!(flattened, vec!["apple-touch-icon.png", "mstile-150x150.png"]);
    }

    #[test]
    fn test_sized_names_match_their_size() {
        for asset in RASTER_ASSETS.iter().filter(|a| a.file_name.contains('x')) {
            let tag = format!("{0}x{0}", asset.size);
            assert!(asset.file_name.contains(&tag), "{} vs {}", asset.file_name, tag);
        }
    }
}
