//! Translation façade
//!
//! Combines a registry snapshot with a resolver: pick the locale for the
//! audience, find the template (falling back to the default locale, then to
//! the raw key) and substitute arguments.

use std::sync::Arc;
use tracing::{debug, warn};
use crate::models::Audience;
use crate::utils::errors::Result;
use super::format::{substitute, TranslationParams};
use super::registry::Registry;
use super::resolver::{resolve_default, Resolver};

/// Resolves and formats messages against one registry snapshot
#[derive(Clone)]
pub struct Translator {
    registry: Arc<Registry>,
    resolver: Arc<Resolver>,
}

impl Translator {
    pub fn new(registry: Arc<Registry>, resolver: Arc<Resolver>) -> Self {
        Self { registry, resolver }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    /// Same resolver over another registry, used when swapping snapshots
    pub fn with_registry(&self, registry: Arc<Registry>) -> Self {
        Self::new(registry, self.resolver.clone())
    }

    /// Locale that messages for `audience` are rendered in
    ///
    /// `None` skips per-audience resolution and yields the default locale.
    pub fn locale_for(&self, audience: Option<&Audience>) -> Result<&str> {
        match audience {
            Some(audience) => self.resolver.resolve(audience, &self.registry),
            None => resolve_default(&self.registry),
        }
    }

    /// Translate `key` for `audience`
    ///
    /// Missing keys never fail: the default locale's template is used, and
    /// failing that the key itself. Only an empty registry is an error.
    pub fn translate_for(
        &self,
        audience: Option<&Audience>,
        key: &str,
        params: &TranslationParams,
    ) -> Result<String> {
        let locale = self.locale_for(audience)?;
        let template = self.template(locale, key);
        Ok(substitute(template, params))
    }

    /// Translate without arguments
    pub fn t(&self, audience: Option<&Audience>, key: &str) -> Result<String> {
        self.translate_for(audience, key, &TranslationParams::new())
    }

    fn template<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        if let Some(template) = self.registry.lookup(locale).and_then(|t| t.get(key)) {
            return template;
        }

        if let Some(default) = self.registry.default_table() {
            if default.locale().as_str() != locale {
                if let Some(template) = default.get(key) {
                    debug!(key = key, locale = locale, fallback = %default.locale(), "Using default locale translation");
                    return template;
                }
            }
        }

        warn!(key = key, locale = locale, "Translation key not found in any language");
        key
    }
}
