//! Configuration loading and validation tests.

use std::io::Write;

use sprintrisk::config::Config;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn full_config_round_trips() {
    let file = write_config(
        r#"
[simulation]
risks_per_sprint = 10
seed = 42

[export]
directory = "/tmp/exports"

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.simulation.risks_per_sprint, 10);
    assert_eq!(config.simulation.seed, Some(42));
    assert_eq!(config.export.directory.to_str(), Some("/tmp/exports"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load_or_default("/nonexistent/sprintrisk.toml").unwrap();

    assert_eq!(config.simulation.risks_per_sprint, 5);
    assert_eq!(config.simulation.seed, None);
}

#[test]
fn load_fails_on_a_missing_file() {
    assert!(Config::load("/nonexistent/sprintrisk.toml").is_err());
}

#[test]
fn load_fails_on_invalid_toml() {
    let file = write_config("not = [valid");

    assert!(Config::load(file.path()).is_err());
}

#[test]
fn load_fails_on_out_of_range_sprint_size() {
    let file = write_config("[simulation]\nrisks_per_sprint = 21\n");

    let error = Config::load(file.path()).unwrap_err();

    assert!(error.to_string().contains("risks_per_sprint"));
}

#[test]
fn load_fails_on_unknown_logging_format() {
    let file = write_config("[logging]\nformat = \"xml\"\n");

    assert!(Config::load(file.path()).is_err());
}
