//! Locale resolution
//!
//! A [`Resolver`] asks its [`LocaleSource`]s in order and takes the first
//! answer that names a registered locale. An unregistered answer from a
//! binding source (a stored preference) stops the chain. Otherwise it falls
//! back to the registry default, then to the first registered locale.

use tracing::debug;
use crate::models::Audience;
use crate::storage::{self, KeyValueStore, SharedStore};
use crate::utils::errors::{LangError, Result};
use super::registry::Registry;

/// One step of the resolution chain
pub trait LocaleSource: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &'static str;

    /// Locale this source picks for `audience`, if it has an opinion
    fn locale_for(&self, audience: &Audience) -> Option<String>;

    /// Whether an answer from this source ends the chain even when the
    /// locale it names is not registered
    fn is_binding(&self) -> bool {
        false
    }
}

/// Persisted per-player preference, keyed by player name
pub struct StoredPreference {
    store: SharedStore,
}

impl StoredPreference {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl LocaleSource for StoredPreference {
    fn name(&self) -> &'static str {
        "stored-preference"
    }

    fn locale_for(&self, audience: &Audience) -> Option<String> {
        let identity = audience.identity()?;
        storage::read(&self.store).get(identity)
    }

    fn is_binding(&self) -> bool {
        true
    }
}

/// Locale reported by the recipient's client
pub struct ClientLocale;

impl LocaleSource for ClientLocale {
    fn name(&self) -> &'static str {
        "client-locale"
    }

    fn locale_for(&self, audience: &Audience) -> Option<String> {
        audience.reported_locale().map(str::to_string)
    }
}

/// Ordered chain of locale sources
#[derive(Default)]
pub struct Resolver {
    sources: Vec<Box<dyn LocaleSource>>,
}

impl Resolver {
    /// Resolver with no sources: everyone gets the registry default
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored preference first, then the client's own locale
    pub fn managed(preferences: SharedStore) -> Self {
        Self::new()
            .with_source(StoredPreference::new(preferences))
            .with_source(ClientLocale)
    }

    pub fn with_source(mut self, source: impl LocaleSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Pick the locale to use for `audience`
    ///
    /// Locales named by a source but absent from the registry are passed
    /// over. A stale stored preference goes straight to the default; it
    /// never lets the client locale win.
    pub fn resolve<'r>(&self, audience: &Audience, registry: &'r Registry) -> Result<&'r str> {
        if registry.is_empty() {
            return Err(LangError::NoLanguagesAvailable);
        }

        for source in &self.sources {
            let Some(locale) = source.locale_for(audience) else {
                continue;
            };
            if let Some(table) = registry.lookup(&locale) {
                return Ok(table.locale().as_str());
            }
            debug!(
                source = source.name(),
                audience = audience.display_name(),
                locale = %locale,
                "Ignoring unregistered locale"
            );
            if source.is_binding() {
                break;
            }
        }

        resolve_default(registry)
    }
}

/// Registry default, else the first registered locale
pub fn resolve_default(registry: &Registry) -> Result<&str> {
    registry
        .default_locale()
        .or_else(|| registry.first_locale())
        .ok_or(LangError::NoLanguagesAvailable)
}
