//! Plugin lifecycle tests
//!
//! Activation from a data folder, language file loading, reload and the
//! fatal empty-registry condition.

mod helpers;

use std::fs;
use std::sync::Arc;
use assert_matches::assert_matches;
use helpers::*;
use langmanager::config::Settings;
use langmanager::i18n::{loader, Registry};
use langmanager::models::Audience;
use langmanager::services::{LanguageManager, DEFAULT_LANGUAGE_OPTION};
use langmanager::storage::{self, KeyValueStore, MemoryStore};
use langmanager::LangError;

#[tokio::test]
async fn test_enable_writes_bundled_resources() {
    let ctx = TestContext::new().await;

    assert!(ctx.settings.plugin.config_path().exists());
    assert!(ctx.languages_dir().join("en_US.yml").exists());
    assert!(ctx.languages_dir().join("uk_UA.yml").exists());

    assert_eq!(ctx.manager.known_locales(), vec!["en_US", "uk_UA"]);
    assert_eq!(ctx.manager.translator().registry().default_locale(), Some("en_US"));
}

#[tokio::test]
async fn test_enable_keeps_operator_edits() {
    let ctx = TestContext::with_setup(|data_dir| {
        fs::write(
            data_dir.join("languages").join("en_US.yml"),
            "command:\n  mylang:\n    current: \"Locale: %locale%\"\n",
        )
        .unwrap();
        fs::write(data_dir.join("config.yml"), "default-language: uk_UA\n").unwrap();
    })
    .await;

    let translator = ctx.manager.translator();
    assert_eq!(translator.registry().default_locale(), Some("uk_UA"));
    assert_eq!(
        translator.registry().lookup("en_US").unwrap().get("command.mylang.current"),
        Some("Locale: %locale%")
    );
}

#[tokio::test]
async fn test_bad_language_files_are_skipped() {
    let ctx = TestContext::with_setup(|data_dir| {
        let languages = data_dir.join("languages");
        fs::write(languages.join("bogus.yml"), "greeting: nope\n").unwrap();
        fs::write(languages.join("english.json"), "{\"greeting\": \"nope\"}").unwrap();
        fs::write(languages.join("fr_FR.yml"), "greeting: [unclosed\n").unwrap();
        fs::write(languages.join("es_ES.yml"), "- not\n- a mapping\n").unwrap();
        fs::write(languages.join("de_DE.json"), "{\"greeting\": \"Hallo\"}").unwrap();
        fs::write(languages.join("notes.txt"), "ignored").unwrap();
    })
    .await;

    assert_eq!(ctx.manager.known_locales(), vec!["de_DE", "en_US", "uk_UA"]);
    assert_eq!(ctx.manager.translator().registry().default_locale(), Some("en_US"));
}

#[tokio::test]
async fn test_unknown_configured_default_uses_first_registered() {
    let ctx = TestContext::with_setup(|data_dir| {
        fs::write(data_dir.join("config.yml"), "default-language: pt_BR\n").unwrap();
        fs::write(
            data_dir.join("languages").join("de_DE.yml"),
            "greeting: Hallo\n",
        )
        .unwrap();
    })
    .await;

    assert_eq!(ctx.manager.translator().registry().default_locale(), Some("de_DE"));
    assert_eq!(
        ctx.manager.translate(None, "greeting", &Default::default()).unwrap(),
        "Hallo"
    );
}

#[tokio::test]
async fn test_preferences_survive_restart() {
    let ctx = TestContext::new().await;
    ctx.manager.set_player_locale("Steve", "uk_UA").unwrap();
    assert_matches!(
        ctx.manager.set_player_locale("Steve", "fr_FR"),
        Err(LangError::UnknownLocale(_))
    );

    let restarted = LanguageManager::enable(ctx.settings.clone()).await.unwrap();
    assert_eq!(restarted.stored_locale("Steve").as_deref(), Some("uk_UA"));
}

#[tokio::test]
async fn test_reload_swaps_complete_registry() {
    let ctx = TestContext::new().await;
    let before = ctx.manager.translator();

    fs::write(ctx.languages_dir().join("de_DE.yml"), "greeting: Hallo\n").unwrap();
    ctx.manager.reload().await.unwrap();

    let after = ctx.manager.translator();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.registry().known_locales(), vec!["en_US", "uk_UA"]);
    assert_eq!(after.registry().known_locales(), vec!["de_DE", "en_US", "uk_UA"]);
    assert_eq!(after.registry().default_locale(), Some("en_US"));
}

#[tokio::test]
async fn test_reload_rereads_default_language() {
    let ctx = TestContext::new().await;
    fs::write(ctx.settings.plugin.config_path(), "default-language: uk_UA\n").unwrap();

    ctx.manager.reload().await.unwrap();

    assert_eq!(ctx.manager.locale_of(&Audience::Console).unwrap(), "uk_UA");
    assert_eq!(
        storage::read(ctx.manager.plugin_config()).get(DEFAULT_LANGUAGE_OPTION).as_deref(),
        Some("uk_UA")
    );
}

#[tokio::test]
async fn test_reload_without_languages_keeps_previous_snapshot() {
    let ctx = TestContext::new().await;
    let before = ctx.manager.translator();

    for entry in fs::read_dir(ctx.languages_dir()).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    assert_matches!(ctx.manager.reload().await, Err(LangError::NoLanguagesAvailable));
    assert!(Arc::ptr_eq(&before, &ctx.manager.translator()));
    assert_eq!(
        ctx.manager.translate(Some(&Audience::Console), "command.reload.success", &Default::default()).unwrap(),
        "LanguageManager has been reloaded."
    );
}

#[tokio::test]
async fn test_failed_reload_leaves_stores_untouched() {
    let ctx = TestContext::new().await;
    ctx.manager.set_player_locale("Steve", "uk_UA").unwrap();

    fs::write(ctx.settings.plugin.player_languages_path(), "Steve: en_US\n").unwrap();
    fs::write(ctx.settings.plugin.config_path(), "default-language: uk_UA\n").unwrap();
    for entry in fs::read_dir(ctx.languages_dir()).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    assert_matches!(ctx.manager.reload().await, Err(LangError::NoLanguagesAvailable));
    assert_eq!(ctx.manager.stored_locale("Steve").as_deref(), Some("uk_UA"));
    assert_eq!(
        storage::read(ctx.manager.plugin_config()).get(DEFAULT_LANGUAGE_OPTION).as_deref(),
        Some("en_US")
    );
    assert_eq!(ctx.manager.locale_of(&Audience::Console).unwrap(), "en_US");
}

#[tokio::test]
async fn test_reload_failure_is_reported_to_sender() {
    let ctx = TestContext::new().await;
    for entry in fs::read_dir(ctx.languages_dir()).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    assert!(ctx.run(&Audience::Console, "langmanager reload").await);
    assert_eq!(
        ctx.host.last_message_for("CONSOLE").as_deref(),
        Some("§cReload failed: No languages available")
    );
}

#[test]
fn test_empty_registry_refuses_to_start() {
    let result = LanguageManager::from_parts(
        Settings::default(),
        storage::shared(MemoryStore::new()),
        storage::shared(MemoryStore::new()),
        Registry::new(),
    );
    assert_matches!(result, Err(LangError::NoLanguagesAvailable));
}

#[tokio::test]
async fn test_loader_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let languages = dir.path().join("missing").join("languages");

    let registry = loader::load_languages(&languages).await.unwrap();

    assert!(languages.is_dir());
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_loader_flattens_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en_US.yaml"),
        "command:\n  setlang:\n    usage: \"Usage: /setlang <locale>\"\nmax_players: 20\n",
    )
    .unwrap();

    let table = loader::load_language_file(&dir.path().join("en_US.yaml")).await.unwrap();

    assert_eq!(table.get("command.setlang.usage"), Some("Usage: /setlang <locale>"));
    assert_eq!(table.get("max_players"), Some("20"));
    assert_eq!(table.get("command"), None);
}

#[test]
fn test_bundled_languages_define_the_same_keys() {
    let load = |content: &str| {
        let document: serde_yaml::Value = serde_yaml::from_str(content).unwrap();
        let mut keys: Vec<String> = loader::flatten_document(&document, "test")
            .unwrap()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        keys.sort();
        keys
    };

    assert_eq!(
        load(include_str!("../resources/languages/en_US.yml")),
        load(include_str!("../resources/languages/uk_UA.yml"))
    );
}
