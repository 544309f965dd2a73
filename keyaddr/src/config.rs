//! keyaddr configuration with TOML file support.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How command results are printed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one result per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Settings shared by every subcommand.
///
/// Loaded from a TOML file via [`KeyaddrConfig::from_toml_file`]; command-line
/// flags and environment variables override whatever the file sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyaddrConfig {
    /// Wordlist language tag.
    #[serde(default = "default_language")]
    pub language: String,

    /// Log level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for KeyaddrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl KeyaddrConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = KeyaddrConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config, KeyaddrConfig::default());
        assert_eq!(config.language, "en");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            output = "json"
            log_level = "debug"
        "#;
        let config = KeyaddrConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.language, "en"); // default
    }

    #[test]
    fn unknown_output_rejected() {
        let result = KeyaddrConfig::from_toml_str(r#"output = "yaml""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = KeyaddrConfig::from_toml_file(Path::new("/nonexistent/keyaddr.toml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/keyaddr.toml"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"en\"\noutput = \"json\"").unwrap();
        let config = KeyaddrConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }
}
