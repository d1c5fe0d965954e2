//! Configuration for charpick
//!
//! Settings are read from the user's config directory
//! (`~/.config/charpick/config.toml` on Linux), then overridden by
//! `CHARPICK_*` environment variables. A missing file means defaults; the
//! program never writes the file itself.

use crate::api::DEFAULT_ENDPOINT;
use crate::search::StalePolicy;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the selection is printed when the picker exits
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per character
    #[default]
    Text,
    /// A JSON array of character records
    Json,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CharpickConfig {
    /// Base URL of the character-search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// What to do with answers to superseded lookups
    #[serde(default)]
    pub stale_responses: StalePolicy,

    /// Capture the mouse so rows can be clicked
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Format for printing the selection on exit
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_mouse() -> bool {
    true
}

impl Default for CharpickConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            stale_responses: StalePolicy::default(),
            mouse: default_mouse(),
            output_format: OutputFormat::default(),
        }
    }
}

impl CharpickConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("charpick").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment overrides cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, Self::environment())
    }

    /// `CHARPICK_*` environment overrides
    fn environment() -> Environment {
        Environment::with_prefix("CHARPICK")
    }

    /// File first, then `env` on top
    fn load_layered(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = CharpickConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.stale_responses, StalePolicy::Discard);
        assert!(config.mouse);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CharpickConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CharpickConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "stale_responses = \"apply\"\nmouse = false\noutput_format = \"json\"\n",
        )
        .unwrap();

        let config = CharpickConfig::load_from(&path).unwrap();
        assert_eq!(config.stale_responses, StalePolicy::Apply);
        assert!(!config.mouse);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CharpickConfig::environment().source(Some(map))
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "stale_responses = \"discard\"\nmouse = true\noutput_format = \"json\"\n",
        )
        .unwrap();

        let env = fake_env(&[
            ("CHARPICK_STALE_RESPONSES", "apply"),
            ("CHARPICK_MOUSE", "false"),
            ("CHARPICK_ENDPOINT", "http://localhost:9000/character/"),
        ]);
        let config = CharpickConfig::load_layered(&path, env).unwrap();

        assert_eq!(config.stale_responses, StalePolicy::Apply);
        assert!(!config.mouse);
        assert_eq!(config.endpoint, "http://localhost:9000/character/");
        // Keys the environment leaves alone keep the file's value.
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_environment_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let env = fake_env(&[("CHARPICK_OUTPUT_FORMAT", "json")]);

        let config = CharpickConfig::load_layered(&dir.path().join("absent.toml"), env).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.stale_responses, StalePolicy::Discard);
    }

    #[test]
    fn test_unprefixed_variables_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let env = fake_env(&[("MOUSE", "false"), ("OTHER_STALE_RESPONSES", "apply")]);

        let config = CharpickConfig::load_layered(&dir.path().join("absent.toml"), env).unwrap();
        assert_eq!(config, CharpickConfig::default());
    }

    #[test]
    fn test_invalid_environment_value_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let env = fake_env(&[("CHARPICK_STALE_RESPONSES", "sometimes")]);

        assert!(CharpickConfig::load_layered(&dir.path().join("absent.toml"), env).is_err());
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "stale_responses = \"sometimes\"\n").unwrap();

        assert!(CharpickConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_toml_contains_all_keys() {
        let rendered = CharpickConfig::default().to_toml().unwrap();
        assert!(rendered.contains("endpoint"));
        assert!(rendered.contains("stale_responses = \"discard\""));
        assert!(rendered.contains("mouse = true"));
        assert!(rendered.contains("output_format = \"text\""));
    }
}
