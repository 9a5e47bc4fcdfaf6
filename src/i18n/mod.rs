//! Internationalization module
//!
//! This module handles multi-language support: locale identifiers, language
//! tables, the registry that holds them, locale resolution for an audience,
//! placeholder formatting and the translator that ties them together.

pub mod format;
pub mod loader;
pub mod locale;
pub mod registry;
pub mod resolver;
pub mod table;
pub mod translator;

// Re-export commonly used i18n components
pub use format::{params, substitute, TranslationParams};
pub use locale::{is_valid_locale, LocaleId, DEFAULT_LOCALE};
pub use registry::Registry;
pub use resolver::{ClientLocale, LocaleSource, Resolver, StoredPreference};
pub use table::LanguageTable;
pub use translator::Translator;
