use sheetwise_kernel::config::{ConfigError, load_config};
use sheetwise_kernel::domain::config::ApiConfig;
use std::io::Write;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config: ApiConfig = load_config(Some(dir.path().join("absent"))).unwrap();

    assert_eq!(config.server.port, 8000);
    assert_eq!(config.summarize.model, "gpt-4o-mini");
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9100
body_limit = 1024

[summarize]
model = "gpt-4.1"
max_rows = 5
"#
    )
    .unwrap();

    let config: ApiConfig = load_config(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.body_limit, 1024);
    assert_eq!(config.summarize.model, "gpt-4.1");
    assert_eq!(config.summarize.max_rows, 5);
    assert_eq!(config.summarize.base_url, "https://api.openai.com/v1");
}

#[test]
fn malformed_values_are_reported() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[server]\nport = \"not a port\"").unwrap();

    let err = load_config::<ApiConfig>(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}
