//! Focused unit tests covering recommend CLI configuration and execution.

use super::helpers::{
    BEACH_PREFERENCES, CATALOGUE, beach_request, parse_output, utf8_tempdir, write_utf8,
};
use crate::recommend::{
    InputSource, RecommendArgs, RecommendConfig, config_from_layers_for_test, load_catalogue,
    run_recommend_with,
};
use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;
use std::io::Cursor;

fn stdin_config() -> RecommendConfig {
    RecommendConfig {
        input: InputSource::Stdin,
        catalogue: None,
        output: None,
        pretty: false,
    }
}

fn run_with_stdin(config: &RecommendConfig, stdin: &[u8]) -> Result<Vec<u8>, CliError> {
    let mut reader = Cursor::new(stdin.to_vec());
    let mut buffer = Vec::new();
    run_recommend_with(config, &mut reader, &mut buffer)?;
    Ok(buffer)
}

#[rstest]
#[case::absent(None, InputSource::Stdin)]
#[case::dash(Some("-"), InputSource::Stdin)]
#[case::path(Some("request.json"), InputSource::File(Utf8PathBuf::from("request.json")))]
fn input_argument_selects_source(#[case] input: Option<&str>, #[case] expected: InputSource) {
    let args = RecommendArgs {
        input: input.map(Utf8PathBuf::from),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::from(args);
    assert_eq!(config.input, expected);
    assert!(!config.pretty);
    assert!(config.catalogue.is_none());
}

#[rstest]
#[case::input(ARG_INPUT)]
#[case::catalogue(ARG_CATALOGUE)]
fn validate_sources_reports_missing_files(#[case] expected_field: &'static str) {
    let (_tmp, root) = utf8_tempdir();
    let request = root.join("request.json");
    let catalogue = root.join("catalogue.json");
    if expected_field != ARG_INPUT {
        write_utf8(&request, b"{}");
    }
    if expected_field != ARG_CATALOGUE {
        write_utf8(&catalogue, b"[]");
    }

    let config = RecommendConfig {
        input: InputSource::File(request),
        catalogue: Some(catalogue),
        ..stdin_config()
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = utf8_tempdir();
    let request = root.join("request.json");
    std::fs::create_dir(&request).expect("request directory");

    let config = RecommendConfig {
        input: InputSource::File(request.clone()),
        ..stdin_config()
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_INPUT);
            assert_eq!(path, request);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn stdin_request_prints_compact_ranking() {
    let stdout = run_with_stdin(&stdin_config(), beach_request().as_bytes()).expect("success");

    let text = std::str::from_utf8(&stdout).expect("utf-8");
    assert_eq!(text.lines().count(), 1, "compact output is a single line");
    let payload = parse_output(&stdout);
    let ranked = payload.as_array().expect("array payload");
    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked.first().and_then(|r| r.get("name")), Some(&"Goa".into()));
}

#[rstest]
fn pretty_flag_indents_payload() {
    let config = RecommendConfig {
        pretty: true,
        ..stdin_config()
    };
    let stdout = run_with_stdin(&config, beach_request().as_bytes()).expect("success");

    let text = std::str::from_utf8(&stdout).expect("utf-8");
    assert!(text.lines().count() > 1, "pretty output spans lines");
    assert!(parse_output(&stdout).is_array());
}

#[rstest]
#[case::empty(b"".as_slice())]
#[case::whitespace(b"  \n\t".as_slice())]
fn blank_stdin_prints_empty_array(#[case] stdin: &[u8]) {
    let stdout = run_with_stdin(&stdin_config(), stdin).expect("success");
    assert_eq!(stdout, b"[]\n");
}

#[rstest]
#[case::malformed(b"{ not json".as_slice(), "invalid request")]
#[case::not_utf8(b"\xff\xfe".as_slice(), "not valid UTF-8")]
fn unusable_request_prints_error_envelope(#[case] stdin: &[u8], #[case] fragment: &str) {
    let stdout = run_with_stdin(&stdin_config(), stdin).expect("envelope is not a CLI failure");

    let payload = parse_output(&stdout);
    let message = payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .expect("error envelope");
    assert!(message.contains(fragment), "unexpected message {message}");
}

#[rstest]
fn request_file_is_read_instead_of_stdin() {
    let (_tmp, root) = utf8_tempdir();
    let request = root.join("nested/request.json");
    write_utf8(&request, beach_request().as_bytes());
    let config = RecommendConfig {
        input: InputSource::File(request),
        ..stdin_config()
    };

    let stdout = run_with_stdin(&config, b"{ ignored").expect("success");
    assert_eq!(parse_output(&stdout).as_array().map(Vec::len), Some(5));
}

#[rstest]
fn catalogue_mode_reads_bare_preferences() {
    let (_tmp, root) = utf8_tempdir();
    let catalogue = root.join("destinations.json");
    write_utf8(&catalogue, CATALOGUE.as_bytes());
    let config = RecommendConfig {
        catalogue: Some(catalogue),
        ..stdin_config()
    };

    let stdout = run_with_stdin(&config, BEACH_PREFERENCES.as_bytes()).expect("success");
    let payload = parse_output(&stdout);
    let first = payload.get(0).expect("at least one recommendation");
    assert_eq!(first.get("name"), Some(&"Goa".into()));
    assert_eq!(first.get("estimatedCost"), Some(&25_000.into()));
}

#[rstest]
fn load_catalogue_rejects_invalid_destinations() {
    let (_tmp, root) = utf8_tempdir();
    let catalogue = root.join("destinations.json");
    write_utf8(&catalogue, br#"[{"name": "Nowhere"}]"#);

    let err = load_catalogue(&catalogue).expect_err("invalid catalogue should error");
    match err {
        CliError::ParseCatalogue { path, source } => {
            assert_eq!(path, catalogue);
            assert!(source.to_string().contains("[0]"), "unexpected {source}");
        }
        other => panic!("expected ParseCatalogue, found {other:?}"),
    }
}

#[rstest]
fn load_catalogue_io_error_returns_read_error() {
    let (_tmp, root) = utf8_tempdir();
    let catalogue = root.join("missing.json");

    let err = load_catalogue(&catalogue).expect_err("missing catalogue should error");
    match err {
        CliError::ReadCatalogue { path, .. } => assert_eq!(path, catalogue),
        other => panic!("expected ReadCatalogue, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "pretty": "sometimes" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = utf8_tempdir();
    let env_catalogue = root.join("from-env.json");
    let cli_output = root.join("from-cli.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalogue": root.join("from-file.json").as_str(),
            "output": root.join("from-file-output.json").as_str(),
            "pretty": true,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalogue": env_catalogue.as_str(),
    }));
    composer.push_cli(json!({
        "output": cli_output.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.input, InputSource::Stdin);
    assert_eq!(config.catalogue, Some(env_catalogue));
    assert_eq!(config.output, Some(cli_output));
    assert!(config.pretty);
}
