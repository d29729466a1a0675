//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;
use wayfarer_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal CLI errors are reported on stderr before exiting"
)]
fn main() {
    // Logs go to stderr; stdout carries only the JSON payload.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match wayfarer_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wayfarer: {err}");
            std::process::exit(1);
        }
    }
}
