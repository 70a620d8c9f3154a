/// Command line surface
///
/// Flag parsing, defaults, the input existence check and exit codes. The
/// pipeline itself never sees an unvalidated request.

use crate::assets::request::{
    DEFAULT_APP_NAME, DEFAULT_BACKGROUND_COLOR, DEFAULT_SHORT_NAME, DEFAULT_THEME_COLOR,
};
use crate::assets::{self, GenerationRequest};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Parser)]
#[command(
    name = "website-assets-generator",
    version,
    about = "Generate favicons, touch icons, tiles and PWA metadata from one logo"
)]
pub struct Args {
    /// Path to the PNG or SVG logo
    #[arg(short, long, value_name = "LOGO")]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "./dist")]
    pub output: PathBuf,

    /// Application name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_APP_NAME)]
    pub name: String,

    /// Short application name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SHORT_NAME)]
    pub short_name: String,

    /// Theme color (CSS color)
    #[arg(long, value_name = "COLOR", default_value = DEFAULT_THEME_COLOR)]
    pub theme_color: String,

    /// Background color used behind flattened icons (CSS color)
    #[arg(long, value_name = "COLOR", default_value = DEFAULT_BACKGROUND_COLOR)]
    pub background_color: String,

    /// Log every generated file
    #[arg(short, long)]
    pub verbose: bool,
}

/// Why the CLI refused to start generating
#[derive(Debug, PartialEq)]
pub enum UsageError {
    MissingInput,
    InputNotFound(PathBuf),
}

impl Args {
    /// Validate and turn the flags into a request with absolute paths
    pub fn into_request(self) -> Result<GenerationRequest, UsageError> {
        let input = self.input.ok_or(UsageError::MissingInput)?;
        if !input.exists() {
            return Err(UsageError::InputNotFound(input));
        }

        Ok(GenerationRequest {
            source_image: absolute(&input),
            output_dir: absolute(&self.output),
            app_name: self.name,
            short_name: self.short_name,
            theme_color: self.theme_color,
            background_color: self.background_color,
        })
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Parse the flags, or print help/version/errors and return the exit code
pub fn parse<I, T>(argv: I) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
            _ => EXIT_FAILURE,
        };
        // clap routes help/version to stdout and errors to stderr
        let _ = err.print();
        code
    })
}

/// Error line followed by the full usage text
pub fn missing_input_message() -> String {
    format!("Error: --input is required\n{}", Args::command().render_help())
}

/// Run one generation from already-parsed flags
pub async fn run(args: Args) -> u8 {
    let request = match args.into_request() {
        Ok(request) => request,
        Err(UsageError::MissingInput) => {
            eprintln!("{}", missing_input_message());
            return EXIT_FAILURE;
        }
        Err(UsageError::InputNotFound(path)) => {
            eprintln!("Error: file not found: {}", path.display());
            return EXIT_FAILURE;
        }
    };

    tracing::debug!("🚀 Generating assets: {:?}", request);

    match assets::generate(request).await {
        Ok(report) => {
            tracing::debug!("{} files written", report.files.len());
            println!("Assets generated in {}", report.output_dir.display());
            EXIT_OK
        }
        Err(e) => {
            tracing::error!("❌ Generation failed: {}", e);
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}
