//! Placeholder substitution
//!
//! Templates name their arguments either as `%name%` or as `{name}`. The
//! template is scanned once; substituted values are never re-scanned.

use std::collections::HashMap;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Build parameters from `(name, value)` pairs
///
/// Names may be given bare (`locale`) or already wrapped (`%locale%`,
/// `{locale}`); both refer to the same placeholder.
pub fn params<I, K, V>(pairs: I) -> TranslationParams
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(name, value)| (bare_name(name.as_ref()).to_string(), value.to_string()))
        .collect()
}

fn bare_name(name: &str) -> &str {
    name.strip_prefix('%')
        .and_then(|n| n.strip_suffix('%'))
        .or_else(|| name.strip_prefix('{').and_then(|n| n.strip_suffix('}')))
        .unwrap_or(name)
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Replace placeholders in `template` with values from `params`
///
/// Placeholders without a matching parameter are kept verbatim, as are
/// stray delimiters such as the one in `50% off`.
pub fn substitute(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(['%', '{']) {
        let open = if rest.as_bytes()[start] == b'%' { '%' } else { '{' };
        let close = if open == '%' { '%' } else { '}' };

        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let known = after
            .find(close)
            .filter(|&end| is_placeholder_name(&after[..end]))
            .and_then(|end| params.get(&after[..end]).map(|value| (end, value)));

        match known {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            // Keep the opener and rescan, the closer may open the next placeholder
            None => {
                out.push(open);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
