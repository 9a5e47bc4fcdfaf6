//! Language registry
//!
//! Holds every loaded [`LanguageTable`] keyed by locale plus the designated
//! default. A registry is owned explicitly by whoever builds it; reload
//! builds a fresh one and swaps it in rather than patching this one.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use crate::utils::errors::{LangError, Result};
use super::locale::LocaleId;
use super::table::LanguageTable;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: HashMap<LocaleId, Arc<LanguageTable>>,
    /// Registration order; replacing a table keeps its original slot
    order: Vec<LocaleId>,
    default_locale: Option<LocaleId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table, replacing any table already registered for its locale
    pub fn register(&mut self, table: LanguageTable) {
        let locale = table.locale().clone();
        debug!(locale = %locale, keys = table.len(), "Registering language");

        if !self.tables.contains_key(&locale) {
            self.order.push(locale.clone());
        }
        self.tables.insert(locale, Arc::new(table));
    }

    /// Build a table from raw parts and register it
    ///
    /// Fails with `InvalidLocale` without touching the registry.
    pub fn register_entries<I, K, V>(&mut self, locale: &str, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = LanguageTable::new(locale, entries)?;
        self.register(table);
        Ok(())
    }

    pub fn lookup(&self, locale: &str) -> Option<&Arc<LanguageTable>> {
        self.tables.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Known locales in registration order
    pub fn known_locales(&self) -> Vec<&str> {
        self.order.iter().map(LocaleId::as_str).collect()
    }

    pub fn first_locale(&self) -> Option<&str> {
        self.order.first().map(LocaleId::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Designate the default locale; it must already be registered
    pub fn set_default(&mut self, locale: &str) -> Result<()> {
        let Some(table) = self.tables.get(locale) else {
            return Err(LangError::UnknownLocale(locale.to_string()));
        };
        self.default_locale = Some(table.locale().clone());
        Ok(())
    }

    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_ref().map(LocaleId::as_str)
    }

    pub fn default_table(&self) -> Option<&Arc<LanguageTable>> {
        self.default_locale.as_ref().and_then(|l| self.tables.get(l))
    }
}
