//! Key-set extraction and comparison for message files.
//!
//! A message file is a nested JSON object. Every dotted path reachable by
//! descending through nested objects counts as a key: `Bookings.form` and
//! `Bookings.form.title` are both keys, so a namespace that exists in a
//! translation but lost one of its children still shows up precisely.
//! Arrays and scalars are leaves and are never descended into.

use serde_json::Value;
use std::collections::BTreeSet;

/// Result of comparing a reference key set against a translation key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Keys present in the reference but absent from the translation
    pub missing: Vec<String>,

    /// Keys present in the translation but absent from the reference
    pub extra: Vec<String>,
}

impl KeyDiff {
    /// Check if the two key sets were identical
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Collect every dotted key path in `document`.
///
/// Non-object documents yield the empty set. For objects, each key is
/// recorded under `prefix` (joined with `.`), whether its value is a
/// nested object or a leaf, and nested objects are flattened recursively.
///
/// # Arguments
/// * `document` - The parsed message document
/// * `prefix` - Path accumulated so far; pass `""` at the top level
pub fn flatten(document: &Value, prefix: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_keys(document, prefix, &mut keys);
    keys
}

fn collect_keys(document: &Value, prefix: &str, keys: &mut BTreeSet<String>) {
    if let Value::Object(map) = document {
        for (key, value) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            keys.insert(path.clone());
            collect_keys(value, &path, keys);
        }
    }
}

/// Diff two key sets.
///
/// Both result sequences come out sorted ascending (the sets iterate in
/// order), so the report is deterministic run to run.
pub fn diff(reference: &BTreeSet<String>, translation: &BTreeSet<String>) -> KeyDiff {
    KeyDiff {
        missing: reference.difference(translation).cloned().collect(),
        extra: translation.difference(reference).cloned().collect(),
    }
}
