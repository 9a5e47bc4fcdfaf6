//! Services module
//!
//! This module contains the plugin's business logic services

pub mod language;

pub use language::{LanguageManager, DEFAULT_LANGUAGE_OPTION};
