/// Error type shared by the raster helpers and the generation pipeline
///
/// Every variant carries enough context to be printed as-is by the CLI.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    /// Creating, writing or copying a file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source raster could not be read or decoded
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The source SVG could not be parsed
    #[error("failed to parse SVG {}: {source}", path.display())]
    Svg {
        path: PathBuf,
        #[source]
        source: resvg::usvg::Error,
    },

    #[error("SVG {} has an empty viewport", path.display())]
    EmptySvg { path: PathBuf },

    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to pack favicon.ico: {0}")]
    Ico(#[source] std::io::Error),

    /// A colour that has to become pixels is not a CSS color
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The blocking generation task panicked or was cancelled
    #[error("generation task failed: {0}")]
    Task(String),
}

impl AssetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
