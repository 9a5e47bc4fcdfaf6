//! Language tables
//!
//! One table per locale, mapping dotted keys to templates. Tables are built
//! once and never mutated; reload replaces them wholesale.

use std::collections::HashMap;
use crate::utils::errors::Result;
use super::locale::LocaleId;

/// Key under which a table may carry its own display name
pub const LANGUAGE_NAME_KEY: &str = "language.name";

/// Immutable key → template mapping for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    locale: LocaleId,
    entries: HashMap<String, String>,
}

impl LanguageTable {
    /// Build a table, rejecting malformed locale identifiers
    ///
    /// Duplicate keys in `entries` resolve to the last value.
    pub fn new<I, K, V>(locale: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let locale = LocaleId::parse(locale)?;
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Human-readable language name, when the table defines one
    pub fn display_name(&self) -> Option<&str> {
        self.get(LANGUAGE_NAME_KEY)
    }
}
