//! Recommend command implementation for the Wayfarer CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use wayfarer_core::{Destination, RecommendationOutcome};
use wayfarer_fs::{create_utf8_file, open_utf8_file};

use crate::{ARG_CATALOGUE, ARG_INPUT, ARG_OUTPUT, ARG_PRETTY, CliError};

/// Path argument meaning "read the request from stdin".
const STDIN_MARKER: &str = "-";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score travel destinations against a traveller's interests, \
                 budget and trip dates, then print the five best matches as \
                 JSON. The request is read from INPUT or stdin. With \
                 --catalogue the request is a bare preferences object and the \
                 destinations come from the catalogue file.",
    about = "Rank destinations for a recommendation request"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RecommendArgs {
    /// Path to the request document; omit or pass `-` to read stdin.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// JSON array of destinations to score preferences against.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Write the recommendations to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Pretty-print the JSON payload.
    #[arg(
        long = ARG_PRETTY,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) pretty: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RecommendConfig::from(merged))
    }
}

/// Where the request document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    Stdin,
    File(Utf8PathBuf),
}

impl InputSource {
    fn describe(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_owned(),
            Self::File(path) => path.to_string(),
        }
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) input: InputSource,
    /// Destination catalogue; when set the input holds bare preferences.
    pub(crate) catalogue: Option<Utf8PathBuf>,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) pretty: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let InputSource::File(path) = &self.input {
            Self::require_existing(path, ARG_INPUT)?;
        }
        if let Some(path) = &self.catalogue {
            Self::require_existing(path, ARG_CATALOGUE)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match wayfarer_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl From<RecommendArgs> for RecommendConfig {
    fn from(args: RecommendArgs) -> Self {
        let input = match args.input {
            Some(path) if path.as_str() != STDIN_MARKER => InputSource::File(path),
            _ => InputSource::Stdin,
        };
        Self {
            input,
            catalogue: args.catalogue,
            output: args.output,
            pretty: args.pretty.unwrap_or(false),
        }
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let mut stdin = std::io::stdin().lock();
    let mut writer = open_output(config.output.as_deref())?;
    run_recommend_with(&config, &mut stdin, &mut *writer)
}

fn open_output(path: Option<&Utf8Path>) -> Result<Box<dyn Write>, CliError> {
    let Some(path) = path else {
        return Ok(Box::new(std::io::stdout().lock()));
    };
    let file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(file))
}

/// Score the configured request and write the outcome to `writer`.
///
/// `stdin` is only consulted when the request comes from standard input.
pub(super) fn run_recommend_with(
    config: &RecommendConfig,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = execute_recommend(config, stdin)?;
    write_outcome(writer, &outcome, config.pretty)
}

fn execute_recommend(
    config: &RecommendConfig,
    stdin: &mut dyn Read,
) -> Result<RecommendationOutcome, CliError> {
    let catalogue = config
        .catalogue
        .as_deref()
        .map(load_catalogue)
        .transpose()?;
    let bytes = read_input(&config.input, stdin)?;
    let Ok(payload) = String::from_utf8(bytes) else {
        log::warn!("request from {} is not valid UTF-8", config.input.describe());
        return Ok(RecommendationOutcome::failed(&"request is not valid UTF-8"));
    };
    let outcome = catalogue.map_or_else(
        || wayfarer_scorer::recommend_json(&payload),
        |destinations| wayfarer_scorer::recommend_preferences_json(&payload, &destinations),
    );
    Ok(outcome)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn read_input(source: &InputSource, stdin: &mut dyn Read) -> Result<Vec<u8>, CliError> {
    let mut bytes = Vec::new();
    let read_error = |source_err| CliError::ReadInput {
        origin: source.describe(),
        source: source_err,
    };
    match source {
        InputSource::Stdin => {
            stdin.read_to_end(&mut bytes).map_err(read_error)?;
        }
        InputSource::File(path) => {
            let mut file = open_utf8_file(path).map_err(read_error)?;
            file.read_to_end(&mut bytes).map_err(read_error)?;
        }
    }
    Ok(bytes)
}

/// Loads a JSON array of [`Destination`] records from disk.
pub(super) fn load_catalogue(path: &Utf8Path) -> Result<Vec<Destination>, CliError> {
    let read_error = |source| CliError::ReadCatalogue {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_utf8_file(path).map_err(read_error)?;
    let mut payload = String::new();
    file.read_to_string(&mut payload).map_err(read_error)?;
    let destinations =
        wayfarer_scorer::decode_catalogue(&payload).map_err(|source| CliError::ParseCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "loaded {} destinations from catalogue {path}",
        destinations.len()
    );
    Ok(destinations)
}

fn write_outcome(
    writer: &mut dyn Write,
    outcome: &RecommendationOutcome,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    }
    .map_err(CliError::SerialiseOutcome)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(RecommendConfig::from(merged))
}
