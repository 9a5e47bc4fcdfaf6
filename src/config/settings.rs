//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub plugin: PluginConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Plugin data layout
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Root folder owned by the plugin
    pub data_dir: String,
    /// Language files directory, relative to `data_dir`
    pub languages_dir: String,
    /// Plugin options file (`default-language`), relative to `data_dir`
    pub config_file: String,
    /// Per-player preferences file, relative to `data_dir`
    pub player_languages_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("langmanager").required(false))
            .add_source(
                config::Environment::with_prefix("LANGMANAGER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Settings rooted at the given data folder, everything else default
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.plugin.data_dir = data_dir.into();
        settings
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LangError> {
        super::validation::validate_settings(self)
    }
}

impl PluginConfig {
    pub fn languages_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.languages_dir)
    }

    pub fn config_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.config_file)
    }

    pub fn player_languages_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.player_languages_file)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plugin: PluginConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_dir: "plugin_data/LanguageManager".to_string(),
            languages_dir: "languages".to_string(),
            config_file: "config.yml".to_string(),
            player_languages_file: "player_languages.yml".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}
