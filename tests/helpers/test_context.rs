//! Test context for plugin-level tests
//!
//! Enables the plugin against a data folder inside a temp directory, so the
//! bundled resources, config and preference files are real files.

use std::path::{Path, PathBuf};
use std::sync::Once;
use langmanager::config::Settings;
use langmanager::handlers::dispatch;
use langmanager::models::Audience;
use langmanager::services::LanguageManager;
use tempfile::TempDir;

use super::mock_host::MockHost;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("langmanager=debug")
            .with_test_writer()
            .try_init();
    });
}

pub struct TestContext {
    pub temp_dir: TempDir,
    pub settings: Settings,
    pub manager: LanguageManager,
    pub host: MockHost,
}

impl TestContext {
    /// Enable the plugin in a fresh data folder
    pub async fn new() -> Self {
        Self::with_setup(|_| {}).await
    }

    /// Enable the plugin after `setup` has prepared the data folder
    pub async fn with_setup(setup: impl FnOnce(&Path)) -> Self {
        init_test_env();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("LanguageManager");
        std::fs::create_dir_all(data_dir.join("languages")).expect("Failed to create data dir");
        setup(&data_dir);

        let settings = Settings::with_data_dir(data_dir.to_string_lossy());
        let manager = LanguageManager::enable(settings.clone())
            .await
            .expect("Failed to enable LanguageManager");

        Self {
            temp_dir,
            settings,
            manager,
            host: MockHost::new(),
        }
    }

    pub fn languages_dir(&self) -> PathBuf {
        self.settings.plugin.languages_path()
    }

    /// Run a command line as `sender`
    pub async fn run(&self, sender: &Audience, line: &str) -> bool {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = words.split_first().expect("Empty command line");
        dispatch(&self.manager, &self.host, sender, name, args).await
    }
}
