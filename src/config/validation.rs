//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LangError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_plugin_config(&settings.plugin)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate plugin data layout
fn validate_plugin_config(config: &super::PluginConfig) -> Result<()> {
    if config.data_dir.is_empty() {
        return Err(LangError::Config(
            "Plugin data directory is required".to_string()
        ));
    }

    let files = [
        ("languages_dir", &config.languages_dir),
        ("config_file", &config.config_file),
        ("player_languages_file", &config.player_languages_file),
    ];
    for (name, value) in files {
        if value.is_empty() {
            return Err(LangError::Config(
                format!("Plugin setting '{}' must not be empty", name)
            ));
        }
    }

    if config.config_file == config.player_languages_file {
        return Err(LangError::Config(
            "Plugin config and player languages must be stored in different files".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LangError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LangError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
