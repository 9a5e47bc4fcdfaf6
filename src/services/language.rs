//! Language manager service
//!
//! Owns the plugin's language state: the option and preference stores, the
//! resolver, and the current [`Translator`] snapshot. Reload and default
//! changes build a new registry and swap the snapshot once it is complete,
//! so readers always see either the old or the new registry in full.

use std::path::Path;
use std::sync::{Arc, RwLock};
use tokio::fs;
use tracing::{info, warn};
use crate::config::Settings;
use crate::i18n::{loader, params, Registry, Resolver, TranslationParams, Translator, DEFAULT_LOCALE};
use crate::models::Audience;
use crate::storage::{self, KeyValueStore, SharedStore, YamlStore};
use crate::utils::errors::{LangError, Result};

/// Plugin option naming the default locale
pub const DEFAULT_LANGUAGE_OPTION: &str = "default-language";

const BUNDLED_CONFIG: &str = include_str!("../../resources/config.yml");

pub struct LanguageManager {
    settings: Settings,
    plugin_config: SharedStore,
    preferences: SharedStore,
    translator: RwLock<Arc<Translator>>,
}

impl std::fmt::Debug for LanguageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageManager")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl LanguageManager {
    /// Activate the plugin from its data folder
    ///
    /// Writes bundled resources that are missing, opens the stores and loads
    /// every language file. Fails with `NoLanguagesAvailable` when no
    /// language could be loaded.
    pub async fn enable(settings: Settings) -> Result<Self> {
        save_default_config(&settings.plugin.config_path()).await?;
        loader::save_default_languages(&settings.plugin.languages_path()).await?;

        let plugin_config = storage::shared(YamlStore::open(settings.plugin.config_path())?);
        let preferences = storage::shared(YamlStore::open(settings.plugin.player_languages_path())?);
        let registry = loader::load_languages(&settings.plugin.languages_path()).await?;

        let manager = Self::from_parts(settings, plugin_config, preferences, registry)?;
        manager.announce()?;
        Ok(manager)
    }

    /// Assemble a manager around already loaded state
    pub fn from_parts(
        settings: Settings,
        plugin_config: SharedStore,
        preferences: SharedStore,
        mut registry: Registry,
    ) -> Result<Self> {
        let configured = configured_default(&plugin_config);
        apply_default(&mut registry, &configured)?;

        let resolver = Arc::new(Resolver::managed(preferences.clone()));
        let translator = Translator::new(Arc::new(registry), resolver);

        Ok(Self {
            settings,
            plugin_config,
            preferences,
            translator: RwLock::new(Arc::new(translator)),
        })
    }

    fn announce(&self) -> Result<()> {
        let translator = self.translator();
        let count = translator.registry().len();
        let message = translator.translate_for(
            Some(&Audience::Console),
            "plugin_enabled",
            &params([("count", count)]),
        )?;
        info!("{}", message);
        Ok(())
    }

    /// Current translator snapshot
    pub fn translator(&self) -> Arc<Translator> {
        self.translator
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn swap(&self, translator: Translator) {
        *self
            .translator
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(translator);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn preferences(&self) -> &SharedStore {
        &self.preferences
    }

    pub fn plugin_config(&self) -> &SharedStore {
        &self.plugin_config
    }

    /// Translate against the current snapshot
    pub fn translate(
        &self,
        audience: Option<&Audience>,
        key: &str,
        params: &TranslationParams,
    ) -> Result<String> {
        self.translator().translate_for(audience, key, params)
    }

    pub fn known_locales(&self) -> Vec<String> {
        self.translator()
            .registry()
            .known_locales()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn is_known_locale(&self, locale: &str) -> bool {
        self.translator().registry().contains(locale)
    }

    /// Locale messages for `audience` are currently rendered in
    pub fn locale_of(&self, audience: &Audience) -> Result<String> {
        self.translator().locale_for(Some(audience)).map(str::to_string)
    }

    /// Re-read plugin options, player preferences and language files
    ///
    /// Languages are loaded before either store is touched, so a directory
    /// with no usable language leaves the stores and the previous snapshot
    /// as they were.
    pub async fn reload(&self) -> Result<()> {
        let mut registry = loader::load_languages(&self.settings.plugin.languages_path()).await?;
        if registry.is_empty() {
            return Err(LangError::NoLanguagesAvailable);
        }

        storage::write(&self.plugin_config).reload()?;
        storage::write(&self.preferences).reload()?;
        apply_default(&mut registry, &configured_default(&self.plugin_config))?;

        let translator = self.translator().with_registry(Arc::new(registry));
        info!(languages = translator.registry().len(), "Languages reloaded");
        self.swap(translator);
        Ok(())
    }

    /// Make `locale` the default and persist it as the plugin option
    pub fn set_default_locale(&self, locale: &str) -> Result<()> {
        let current = self.translator();
        let mut registry = Registry::clone(current.registry());
        registry.set_default(locale)?;

        storage::set_and_save(&self.plugin_config, DEFAULT_LANGUAGE_OPTION, locale)?;
        self.swap(current.with_registry(Arc::new(registry)));
        info!(locale = locale, "Default language changed");
        Ok(())
    }

    /// Persist `locale` as the preference of `player_name`
    pub fn set_player_locale(&self, player_name: &str, locale: &str) -> Result<()> {
        if !self.is_known_locale(locale) {
            return Err(LangError::UnknownLocale(locale.to_string()));
        }
        storage::set_and_save(&self.preferences, player_name, locale)
    }

    /// Stored preference of `player_name`, unvalidated
    pub fn stored_locale(&self, player_name: &str) -> Option<String> {
        storage::read(&self.preferences).get(player_name)
    }
}

fn configured_default(plugin_config: &SharedStore) -> String {
    storage::read(plugin_config).get_or(DEFAULT_LANGUAGE_OPTION, DEFAULT_LOCALE)
}

/// Set the configured default, or the first registered locale when the
/// configured one is not loaded
fn apply_default(registry: &mut Registry, configured: &str) -> Result<()> {
    let Some(first) = registry.first_locale().map(str::to_string) else {
        return Err(LangError::NoLanguagesAvailable);
    };

    if registry.set_default(configured).is_err() {
        warn!(
            configured = configured,
            fallback = %first,
            "Default language not found, using first registered language"
        );
        registry.set_default(&first)?;
    }
    Ok(())
}

async fn save_default_config(path: &Path) -> Result<()> {
    if fs::try_exists(path).await? {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, BUNDLED_CONFIG).await?;
    info!(path = %path.display(), "Saved default config");
    Ok(())
}
