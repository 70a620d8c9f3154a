use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod assets;
mod cli;
mod error;
mod raster;

/// Initialize logging
///
/// Logs go to stderr; stdout only carries help text and the final
/// "Assets generated in ..." line. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match cli::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(code) => return ExitCode::from(code),
    };

    init_logging(args.verbose);

    ExitCode::from(cli::run(args).await)
}
