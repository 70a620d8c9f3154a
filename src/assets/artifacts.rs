/// Text artifacts: web app manifest, browserconfig, meta tags, pinned-tab SVG
///
/// Pure formatting only. The pipeline decides where the bytes go.

use super::catalog::{BROWSERCONFIG_XML, FAVICON_ICO, MANIFEST_FILES, PINNED_TAB_SIZE, PINNED_TAB_SVG};
use super::request::GenerationRequest;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

/// One entry of the manifest `icons` array
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Web app manifest; field order is the serialized key order
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Manifest<'a> {
    pub name: &'a str,
    pub short_name: &'a str,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: &'a str,
    pub background_color: &'a str,
    pub display: &'static str,
    pub start_url: &'static str,
    pub scope: &'static str,
}

impl<'a> Manifest<'a> {
    pub fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            name: &request.app_name,
            short_name: &request.short_name,
            icons: vec![
                ManifestIcon {
                    src: "android-chrome-192x192.png",
                    sizes: "192x192",
                    mime_type: "image/png",
                },
                ManifestIcon {
                    src: "android-chrome-512x512.png",
                    sizes: "512x512",
                    mime_type: "image/png",
                },
            ],
            theme_color: &request.theme_color,
            background_color: &request.background_color,
            display: "standalone",
            start_url: "/",
            scope: "/",
        }
    }

    /// Pretty JSON, 2-space indent, no trailing newline
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// `browserconfig.xml` for Windows tiles
pub fn browserconfig_xml(tile_color: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<browserconfig>
  <msapplication>
    <tile>
      <square150x150logo src="mstile-150x150.png"/>
      <TileColor>{tile_color}</TileColor>
    </tile>
  </msapplication>
</browserconfig>
"#
    )
}

/// Snippet to paste into `<head>`; one tag per line
pub fn meta_tags_html(app_name: &str, theme_color: &str) -> String {
    let lines = [
        format!(r#"<link rel="icon" href="{FAVICON_ICO}" sizes="16x16 32x32 48x48">"#),
        r#"<link rel="icon" type="image/png" sizes="16x16" href="favicon-16x16.png">"#.to_string(),
        r#"<link rel="icon" type="image/png" sizes="32x32" href="favicon-32x32.png">"#.to_string(),
        r#"<link rel="apple-touch-icon" sizes="180x180" href="apple-touch-icon.png">"#.to_string(),
        r#"<link rel="icon" type="image/png" sizes="192x192" href="android-chrome-192x192.png">"#
            .to_string(),
        r#"<link rel="icon" type="image/png" sizes="512x512" href="android-chrome-512x512.png">"#
            .to_string(),
        format!(r#"<link rel="manifest" href="{}">"#, MANIFEST_FILES[0]),
        format!(r#"<link rel="manifest" href="{}">"#, MANIFEST_FILES[1]),
        format!(r#"<link rel="mask-icon" href="{PINNED_TAB_SVG}" color="{theme_color}">"#),
        format!(r#"<meta name="application-name" content="{app_name}">"#),
        format!(r#"<meta name="theme-color" content="{theme_color}">"#),
        format!(r#"<meta name="msapplication-TileColor" content="{theme_color}">"#),
        format!(r#"<meta name="msapplication-config" content="{BROWSERCONFIG_XML}">"#),
    ];

    let mut html = lines.join("\n");
    html.push('\n');
    html
}

/// Wrap a PNG silhouette in an SVG document as a base64 data URI
pub fn pinned_tab_svg(png: &[u8]) -> String {
    let size = PINNED_TAB_SIZE;
    let data = STANDARD.encode(png);
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n  \
         <image href=\"data:image/png;base64,{data}\" width=\"{size}\" height=\"{size}\"/>\n\
         </svg>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> GenerationRequest {
        GenerationRequest {
            app_name: "Acme".to_string(),
            short_name: "Ac".to_string(),
            theme_color: "#112233".to_string(),
            ..GenerationRequest::new("logo.png", "dist")
        }
    }

    #[test]
    fn test_manifest_fields() {
        let request = acme();
        let json = Manifest::from_request(&request).to_json().unwrap();

        assert!(json.contains(r#""name": "Acme""#));
        assert!(json.contains(r#""short_name": "Ac""#));
        assert!(json.contains(r##""theme_color": "#112233""##));
        assert!(json.contains(r##""background_color": "#ffffff""##));
        assert!(json.contains(r#""display": "standalone""#));
        assert!(!json.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start_url"], "/");
        assert_eq!(value["scope"], "/");
        assert_eq!(value["icons"][1]["src"], "android-chrome-512x512.png");
        assert_eq!(value["icons"][1]["sizes"], "512x512");
        assert_eq!(value["icons"][0]["type"], "image/png");
    }

    #[test]
    fn test_manifest_key_order_and_indent() {
        let request = acme();
        let json = Manifest::from_request(&request).to_json().unwrap();

        let keys = [
            "\n  \"name\"",
            "\n  \"short_name\"",
            "\n  \"icons\"",
            "\n  \"theme_color\"",
            "\n  \"background_color\"",
            "\n  \"display\"",
            "\n  \"start_url\"",
            "\n  \"scope\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_browserconfig() {
        let xml = browserconfig_xml("#112233");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<browserconfig>"));
        assert!(xml.contains("<TileColor>#112233</TileColor>"));
        assert!(xml.contains(r#"<square150x150logo src="mstile-150x150.png"/>"#));
    }

    #[test]
    fn test_meta_tags() {
        let html = meta_tags_html("Acme", "#112233");
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(lines.len(), 13);
        assert!(html.ends_with('\n'));
        assert_eq!(lines[0], r#"<link rel="icon" href="favicon.ico" sizes="16x16 32x32 48x48">"#);
        assert_eq!(lines[8], r##"<link rel="mask-icon" href="safari-pinned-tab.svg" color="#112233">"##);
        assert_eq!(lines[9], r#"<meta name="application-name" content="Acme">"#);
        assert_eq!(lines[10], r##"<meta name="theme-color" content="#112233">"##);
        assert_eq!(lines[12], r#"<meta name="msapplication-config" content="browserconfig.xml">"#);
    }

    #[test]
    fn test_pinned_tab_wrapper() {
        let svg = pinned_tab_svg(b"\x89PNG");

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
        assert!(svg.contains(r#"width="512" height="512" viewBox="0 0 512 512""#));
        assert!(svg.contains(r#"<image href="data:image/png;base64,iVBORw==" width="512" height="512"/>"#));
        assert!(svg.ends_with("</svg>\n"));
    }
}
