//! stillmotion CLI binary.
//!
//! Composes a video prompt from a generated image and its reasoning trace,
//! then hands it to the external video generator.

use std::process::ExitCode;
use stillmotion::{Cli, StillmotionConfig, exit_status, init_tracing};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_with_passthrough(
        std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
    );

    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => StillmotionConfig::from_file(path),
        None => StillmotionConfig::load(),
    };

    let result = match config {
        Ok(config) => stillmotion::run(&cli, &config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => ExitCode::from(exit_status(code)),
        Err(e) => {
            error!(error = %e, "stillmotion failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
