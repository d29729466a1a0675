//! Command-line interface for the Wayfarer destination recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_INPUT: &str = "input";
const ARG_CATALOGUE: &str = "catalogue";
const ARG_OUTPUT: &str = "output";
const ARG_PRETTY: &str = "pretty";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] for argument, configuration and I/O failures.
/// Requests that cannot be scored still succeed: the error envelope is
/// written to the output instead.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Rank travel destinations against a traveller's preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a request and print the top recommendations as JSON.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
