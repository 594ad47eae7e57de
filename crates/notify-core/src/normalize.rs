//! Key normalization for loosely-cased event payloads.
//!
//! Upstream producers mix `detailType`, `detail-type` and `DetailType`. Only
//! top-level keys are rewritten; nested values are left untouched.

use serde_json::{Map, Value};
use tracing::warn;

/// Rewrite a single key into snake_case.
///
/// - camelCase / PascalCase: `_` is inserted before every uppercase letter
///   after the first character, then the key is lowercased.
/// - kebab-case: every `-` becomes `_`.
/// - anything else is only lowercased.
pub fn normalize_key(key: &str) -> String {
    let has_inner_upper = key.chars().skip(1).any(|c| c.is_ascii_uppercase());

    if has_inner_upper {
        let mut out = String::with_capacity(key.len() + 4);
        for (i, c) in key.chars().enumerate() {
            if i > 0 && c.is_ascii_uppercase() {
                out.push('_');
            }
            out.push(c);
        }
        out.to_lowercase()
    } else if key.contains('-') {
        key.replace('-', "_").to_lowercase()
    } else {
        key.to_lowercase()
    }
}

/// Normalize every top-level key of a mapping, in document order.
///
/// When two keys collapse to the same name the later one wins.
pub fn normalize_keys(data: Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::with_capacity(data.len());
    let mut origins: Vec<(String, String)> = Vec::new();

    for (key, value) in data {
        let new_key = normalize_key(&key);

        if let Some((_, previous)) = origins.iter().find(|(k, _)| *k == new_key) {
            warn!(
                key = %key,
                previous = %previous,
                normalized = %new_key,
                "Event keys collide after normalization, keeping the later value"
            );
        } else {
            origins.push((new_key.clone(), key));
        }

        normalized.insert(new_key, value);
    }

    normalized
}
