//! YAML file store
//!
//! Backs `config.yml` and `player_languages.yml`. The file holds one flat
//! mapping; scalar values are coerced to strings on load.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde_yaml::Value;
use tracing::{debug, warn};
use crate::utils::errors::{LangError, Result};
use super::KeyValueStore;

/// Flat key-value store persisted as a YAML mapping
#[derive(Debug, Clone)]
pub struct YamlStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl YamlStore {
    /// Open the store at `path`; a missing or empty file yields an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = read_values(&path)?;
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        debug!(path = %path.display(), "Store file not found, starting empty");
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    parse_mapping(&content, path)
}

fn parse_mapping(content: &str, path: &Path) -> Result<BTreeMap<String, String>> {
    let document: Value = serde_yaml::from_str(content)?;

    let mapping = match document {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(LangError::Config(format!(
                "Expected a mapping at the top of {}",
                path.display()
            )))
        }
    };

    let mut values = BTreeMap::new();
    for (key, value) in mapping {
        let (Some(key), Some(value)) = (scalar_to_string(&key), scalar_to_string(&value)) else {
            warn!(path = %path.display(), "Skipping non-scalar store entry");
            continue;
        };
        values.insert(key, value);
    }

    Ok(values)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl KeyValueStore for YamlStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(&self.values)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), entries = self.values.len(), "Store saved");
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.values = read_values(&self.path)?;
        Ok(())
    }
}
