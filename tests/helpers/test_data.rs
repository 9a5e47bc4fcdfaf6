//! In-memory fixtures

use std::sync::Arc;
use langmanager::i18n::{Registry, Resolver, Translator};
use langmanager::storage::{self, MemoryStore, SharedStore};

pub const EN_US: [(&str, &str); 3] = [
    ("greeting", "Hello, %name%!"),
    ("farewell", "Goodbye, {name}."),
    ("only.en", "English only"),
];

pub const DE_DE: [(&str, &str); 2] = [
    ("greeting", "Hallo, %name%!"),
    ("only.de", "Nur Deutsch"),
];

/// `en_US` (default) with templates, `uk_UA` empty, `de_DE` partial
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register_entries("en_US", EN_US).unwrap();
    registry
        .register_entries("uk_UA", Vec::<(String, String)>::new())
        .unwrap();
    registry.register_entries("de_DE", DE_DE).unwrap();
    registry.set_default("en_US").unwrap();
    registry
}

/// Translator over `registry` using stored preferences from `store`
pub fn translator_with(registry: Registry, store: SharedStore) -> Translator {
    Translator::new(Arc::new(registry), Arc::new(Resolver::managed(store)))
}

pub fn preferences<const N: usize>(values: [(&str, &str); N]) -> SharedStore {
    storage::shared(MemoryStore::with_values(values))
}
