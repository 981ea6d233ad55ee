//! Built-in knowledge stores compiled into the library.
//!
//! Each store module exposes its name, its closed category set and a
//! `store()` constructor that validates the table before publishing it.

pub mod electrolytes;
pub mod hematology;
pub mod public_health;

use crate::entry::FieldValue;
use std::collections::BTreeMap;

/// Owned list from string literals
pub(crate) fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

pub(crate) fn texts(items: &[&str]) -> FieldValue {
    FieldValue::List(list(items))
}

/// Store-specific fields keyed by their camelCase names
pub(crate) fn open_fields(pairs: Vec<(&str, FieldValue)>) -> BTreeMap<String, FieldValue> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
