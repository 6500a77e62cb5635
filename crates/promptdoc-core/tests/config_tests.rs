use promptdoc_core::config::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_MODE, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE,
};
use promptdoc_core::{Audience, Config, Depth, Mode};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.defaults.mode, DEFAULT_MODE);
    assert_eq!(config.source.max_file_size, DEFAULT_MAX_FILE_SIZE);
    assert_eq!(config.output.directory, DEFAULT_OUTPUT_DIR);
    assert_eq!(config.log_level.as_str(), "warn");
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
log_level = "debug"

[defaults]
mode = "readme"
audience = "ops"
depth = "deep"
include_commands = false

[render]
blank_is_empty = true

[output]
directory = "prompts"
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert_eq!(config.log_level.as_str(), "debug");
    assert_eq!(config.defaults.mode, Mode::Readme);
    assert_eq!(config.defaults.audience, Audience::Ops);
    assert_eq!(config.defaults.depth, Depth::Deep);
    assert!(!config.defaults.include_commands);
    assert!(config.defaults.include_env_details);
    assert!(config.render_options().blank_is_empty);
    assert_eq!(
        config.output.prompt_path(),
        std::path::Path::new("prompts").join(DEFAULT_OUTPUT_FILE)
    );
}

#[test]
fn test_unknown_enum_value_is_parse_error() {
    let toml_str = r#"
[defaults]
tone = "sarcastic"
"#;
    assert!(Config::from_toml_str(toml_str).is_err());
}

#[test]
fn test_default_string_round_trips() {
    let text = Config::default_config_string();
    let parsed = Config::from_toml_str(&text).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("promptdoc.toml");
    std::fs::write(&path, "[source]\nmax_total_size = 2048\nmax_file_size = 1024\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.source.max_total_size, 2048);
}
