//! Language file loading
//!
//! Every `*.yml`, `*.yaml` or `*.json` file in the languages directory is one
//! locale; the file stem is the locale identifier. Nested mappings are
//! flattened into dotted keys. A bad file is logged and skipped, it never
//! aborts the rest of the batch.

use std::path::{Path, PathBuf};
use serde_yaml::Value;
use tokio::fs;
use tracing::{debug, info, warn};
use crate::utils::errors::{LangError, Result};
use super::locale::is_valid_locale;
use super::registry::Registry;
use super::table::LanguageTable;

const LANGUAGE_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Language files shipped with the plugin
const BUNDLED_LANGUAGES: [(&str, &str); 2] = [
    ("en_US.yml", include_str!("../../resources/languages/en_US.yml")),
    ("uk_UA.yml", include_str!("../../resources/languages/uk_UA.yml")),
];

/// Write bundled language files that are not present yet
///
/// Existing files are left alone so operator edits survive restarts.
pub async fn save_default_languages(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).await?;

    for (file_name, content) in BUNDLED_LANGUAGES {
        let path = dir.join(file_name);
        if fs::try_exists(&path).await? {
            continue;
        }
        fs::write(&path, content).await?;
        info!(path = %path.display(), "Saved bundled language file");
    }

    Ok(())
}

/// Load all language files from `dir` into a fresh registry
///
/// The returned registry has no default locale; choosing one is up to the
/// caller. The directory is created when missing.
pub async fn load_languages(dir: &Path) -> Result<Registry> {
    if !fs::try_exists(dir).await? {
        warn!(path = %dir.display(), "Languages directory not found, creating it");
        fs::create_dir_all(dir).await?;
    }

    let mut registry = Registry::new();
    for path in language_files(dir).await? {
        match load_language_file(&path).await {
            Ok(table) => {
                info!(locale = %table.locale(), keys = table.len(), "Loaded translations");
                registry.register(table);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping language file");
            }
        }
    }

    Ok(registry)
}

/// Language files in `dir`, sorted by file name
async fn language_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| LANGUAGE_EXTENSIONS.contains(&e));
        if supported {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Ignoring non-language file");
        }
    }

    files.sort();
    Ok(files)
}

/// Parse one language file into a table
pub async fn load_language_file(path: &Path) -> Result<LanguageTable> {
    let locale = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LangError::InvalidLocale(path.display().to_string()))?;

    // Reject before reading so a stray file costs nothing
    if !is_valid_locale(locale) {
        return Err(LangError::InvalidLocale(locale.to_string()));
    }

    let content = fs::read_to_string(path).await?;
    let document: Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };

    let entries = flatten_document(&document, locale)?;
    LanguageTable::new(locale, entries)
}

/// Flatten a parsed document into `(dotted.key, template)` pairs
pub fn flatten_document(document: &Value, locale: &str) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();
    match document {
        Value::Null => {}
        Value::Mapping(_) => flatten_into("", document, locale, &mut entries),
        _ => {
            return Err(LangError::Config(format!(
                "Invalid translation file format for {}",
                locale
            )))
        }
    }
    Ok(entries)
}

fn flatten_into(prefix: &str, value: &Value, locale: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Mapping(mapping) => {
            for (key, nested) in mapping {
                let Some(key) = scalar_text(key) else {
                    debug!(locale = locale, prefix = prefix, "Skipping non-scalar key");
                    continue;
                };
                let full_key = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(&full_key, nested, locale, out);
            }
        }
        Value::Tagged(tagged) => flatten_into(prefix, &tagged.value, locale, out),
        Value::Null | Value::Sequence(_) => {
            debug!(locale = locale, key = prefix, "Skipping non-text translation value");
        }
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                out.push((prefix.to_string(), text));
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
