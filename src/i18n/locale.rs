//! Locale identifiers
//!
//! Locales use the client's `xx_YY` form: a lowercase language code, an
//! underscore, then an uppercase region code. Matching is case-sensitive.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;
use regex::Regex;
use crate::utils::errors::{LangError, Result};

static LOCALE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}_[A-Z]{2}$").expect("valid locale pattern"));

/// Locale used when the plugin config does not name one
pub const DEFAULT_LOCALE: &str = "en_US";

/// Check a raw identifier against the accepted pattern
pub fn is_valid_locale(raw: &str) -> bool {
    LOCALE_PATTERN.is_match(raw)
}

/// A validated locale identifier such as `en_US`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn parse(raw: &str) -> Result<Self> {
        if is_valid_locale(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(LangError::InvalidLocale(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for LocaleId {
    type Error = LangError;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}
