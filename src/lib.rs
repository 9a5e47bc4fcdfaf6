//! LanguageManager
//!
//! Localization for game server plugins: per-player language preferences,
//! locale translation tables loaded from files, and resolution of the right
//! message for a player, the console, or no one in particular.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LangError, Result};

// Re-export main components for easy access
pub use handlers::{dispatch, Host};
pub use i18n::{LanguageTable, Registry, Resolver, Translator};
pub use models::{Audience, Player};
pub use services::LanguageManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
