//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the LanguageManager plugin.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{LangError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop, so the caller has to
/// keep it alive for as long as logs should reach the file.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LangError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) if !dir.is_empty() => {
            let file_appender = tracing_appender::rolling::daily(dir, "langmanager.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| LangError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log player actions with structured data
pub fn log_player_action(player: &str, action: &str, details: Option<&str>) {
    info!(
        player = player,
        action = action,
        details = details,
        "Player action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin: &str, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}
