//! Configuration management for PromptDoc.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `promptdoc.toml` file
//! 3. User config `~/.config/promptdoc/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::constraints::{Audience, Constraints, Depth, Tone};
use crate::input::InputRecord;
use crate::mode::Mode;
use crate::prompt::RenderOptions;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when none is set in the environment.
    pub log_level: LogLevel,

    /// Values the form starts with.
    pub defaults: FormDefaults,

    /// Rendering policy.
    pub render: RenderOptions,

    /// Source gathering limits.
    pub source: SourceConfig,

    /// Where saved prompts go.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./promptdoc.toml` (project local)
    /// 2. `~/.config/promptdoc/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(CONFIG_FILE_NAME).exists() {
            return Self::from_file(CONFIG_FILE_NAME);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Self::default().with_overrides(env_lookup)
    }

    /// Location of the per-user config file, if a config dir exists.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("promptdoc").join("config.toml"))
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.with_overrides(env_lookup)
    }

    /// Parse and validate a TOML document, without environment overrides.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.max_file_size > self.source.max_total_size {
            return Err(ConfigError::Invalid(format!(
                "source.max_file_size ({}) exceeds source.max_total_size ({})",
                self.source.max_file_size, self.source.max_total_size
            )));
        }
        if self.output.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "output.file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies overrides from `lookup` (the environment, outside tests),
    /// then validates the merged result.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        override_from(&lookup, "PROMPTDOC_MODE", &mut self.defaults.mode);
        override_from(&lookup, "PROMPTDOC_AUDIENCE", &mut self.defaults.audience);
        override_from(&lookup, "PROMPTDOC_TONE", &mut self.defaults.tone);
        override_from(&lookup, "PROMPTDOC_DEPTH", &mut self.defaults.depth);
        override_from(&lookup, "PROMPTDOC_BLANK_IS_EMPTY", &mut self.render.blank_is_empty);
        override_from(&lookup, "PROMPTDOC_MAX_FILE_SIZE", &mut self.source.max_file_size);

        if let Some(dir) = lookup("PROMPTDOC_OUTPUT_DIR") {
            self.output.directory = dir;
        }

        self.validate()?;
        Ok(self)
    }

    /// The record the form starts from.
    pub fn initial_record(&self) -> InputRecord {
        InputRecord {
            constraints: self.defaults.constraints(),
            ..InputRecord::for_mode(self.defaults.mode)
        }
    }

    /// Rendering options from the `[render]` table.
    pub fn render_options(&self) -> RenderOptions {
        self.render
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn override_from<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => tracing::debug!(key, value = %raw, "ignoring unparsable environment override"),
    }
}

/// Initial form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub mode: Mode,
    pub audience: Audience,
    pub tone: Tone,
    pub depth: Depth,
    pub include_commands: bool,
    pub include_env_details: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            audience: DEFAULT_AUDIENCE,
            tone: DEFAULT_TONE,
            depth: DEFAULT_DEPTH,
            include_commands: DEFAULT_INCLUDE_COMMANDS,
            include_env_details: DEFAULT_INCLUDE_ENV_DETAILS,
        }
    }
}

impl FormDefaults {
    /// The constraints these defaults describe.
    pub fn constraints(&self) -> Constraints {
        Constraints {
            audience: self.audience,
            tone: self.tone,
            length: self.depth,
            include_commands: self.include_commands,
            include_env_details: self.include_env_details,
        }
    }
}

/// Source gathering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Maximum size of a single file to include (in bytes).
    pub max_file_size: u64,

    /// Maximum total size of gathered files (in bytes).
    pub max_total_size: u64,

    /// File extensions to include (without leading dot).
    pub include_extensions: Vec<String>,

    /// Directories to exclude from scanning.
    pub exclude_dirs: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
            include_extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory saved prompts are written to.
    pub directory: String,

    /// File name of a saved prompt.
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path of the saved prompt.
    pub fn prompt_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.file_name)
    }
}

/// Log filter directive, e.g. `warn` or `promptdoc_core=debug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL.to_string())
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.mode, DEFAULT_MODE);
        assert_eq!(config.source.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.output.directory, DEFAULT_OUTPUT_DIR);
        assert!(!config.render.blank_is_empty);
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[defaults]"));
        assert!(toml_str.contains("[render]"));
        assert!(toml_str.contains("[source]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("mode = \"domain\""));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let toml_str = r#"
[source]
max_file_size = 2000
max_total_size = 1000
"#;
        let err = Config::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_overrides_are_validated() {
        let lookup = |key: &str| {
            (key == "PROMPTDOC_MAX_FILE_SIZE").then(|| (10 * DEFAULT_MAX_TOTAL_SIZE).to_string())
        };
        let err = Config::default().with_overrides(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_overrides_applied() {
        let lookup = |key: &str| match key {
            "PROMPTDOC_MODE" => Some("README".to_string()),
            "PROMPTDOC_TONE" => Some("not-a-tone".to_string()),
            "PROMPTDOC_OUTPUT_DIR" => Some("out/prompts".to_string()),
            _ => None,
        };
        let config = Config::default().with_overrides(lookup).unwrap();

        assert_eq!(config.defaults.mode, Mode::Readme);
        assert_eq!(config.defaults.tone, DEFAULT_TONE);
        assert_eq!(config.output.directory, "out/prompts");
    }

    #[test]
    fn test_initial_record_uses_defaults() {
        let mut config = Config::default();
        config.defaults.mode = Mode::Readme;
        config.defaults.tone = Tone::Strict;

        let record = config.initial_record();
        assert_eq!(record.mode, Mode::Readme);
        assert_eq!(record.constraints.tone, Tone::Strict);
        assert!(record.is_enabled("intro"));
        assert!(!record.is_enabled("overview"));
    }
}
