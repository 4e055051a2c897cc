// tests/config_test.rs
use relver::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.output_dir, "_rel");
    assert!(config.behavior.warn_unsemantic);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
output_dir = "target/rel"

[behavior]
warn_unsemantic = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.output_dir, "target/rel");
    assert!(config.behavior.warn_unsemantic);
}

#[test]
#[serial]
fn test_behavior_config_from_fixture() {
    let config = load_config(Some("tests/fixtures/config_with_behavior.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.output_dir, "_build/default/rel/myapp");
    assert!(!config.behavior.warn_unsemantic);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_invalid_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"output_dir = [").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Configuration parse error"));
}

#[test]
fn test_empty_output_dir_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"output_dir = \"  \"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: output_dir must not be empty"
    );
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "output_dir = \"from-cwd\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(config.unwrap().output_dir, "from-cwd");
}
