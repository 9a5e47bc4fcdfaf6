//! Error handling for LanguageManager
//!
//! This module defines the main error type used throughout the crate
//! and classifies errors by recoverability and severity.

use thiserror::Error;

/// Main error type for LanguageManager
#[derive(Error, Debug)]
pub enum LangError {
    #[error("Invalid locale identifier: {0}")]
    InvalidLocale(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("No languages available")]
    NoLanguagesAvailable,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for LanguageManager operations
pub type Result<T> = std::result::Result<T, LangError>;

impl LangError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LangError::InvalidLocale(_) => true,
            LangError::UnknownLocale(_) => true,
            LangError::NoLanguagesAvailable => false,
            LangError::PlayerNotFound(_) => true,
            LangError::PermissionDenied(_) => true,
            LangError::InvalidInput(_) => true,
            LangError::Config(_) => false,
            LangError::Settings(_) => false,
            LangError::Io(_) => true,
            LangError::Json(_) => true,
            LangError::Yaml(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LangError::NoLanguagesAvailable => ErrorSeverity::Critical,
            LangError::Config(_) => ErrorSeverity::Critical,
            LangError::Settings(_) => ErrorSeverity::Critical,
            LangError::InvalidLocale(_) => ErrorSeverity::Warning,
            LangError::PermissionDenied(_) => ErrorSeverity::Warning,
            LangError::UnknownLocale(_) => ErrorSeverity::Info,
            LangError::PlayerNotFound(_) => ErrorSeverity::Info,
            LangError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_languages_is_fatal() {
        let err = LangError::NoLanguagesAvailable;
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_command_time_errors_are_recoverable() {
        assert!(LangError::UnknownLocale("fr_FR".to_string()).is_recoverable());
        assert!(LangError::PlayerNotFound("Steve".to_string()).is_recoverable());
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
