use std::path::PathBuf;

pub const DEFAULT_APP_NAME: &str = "Website";
pub const DEFAULT_SHORT_NAME: &str = "App";
pub const DEFAULT_THEME_COLOR: &str = "#ffffff";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Everything the pipeline needs for one run
///
/// Colors are kept as the strings the user typed; `background_color` is
/// only parsed when an asset is flattened onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Logo to derive every asset from (PNG, other raster, or SVG)
    pub source_image: PathBuf,
    /// Created recursively if it does not exist
    pub output_dir: PathBuf,
    pub app_name: String,
    pub short_name: String,
    pub theme_color: String,
    pub background_color: String,
}

impl GenerationRequest {
    /// Request with every optional field at its default
    pub fn new(source_image: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_image: source_image.into(),
            output_dir: output_dir.into(),
            app_name: DEFAULT_APP_NAME.to_string(),
            short_name: DEFAULT_SHORT_NAME.to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::new("logo.png", "dist");
        assert_eq!(request.source_image, PathBuf::from("logo.png"));
        assert_eq!(request.output_dir, PathBuf::from("dist"));
        assert_eq!(request.app_name, "Website");
        assert_eq!(request.short_name, "App");
        assert_eq!(request.theme_color, "#ffffff");
        assert_eq!(request.background_color, "#ffffff");
    }
}
