//! Entry schemas shared by every store.
//!
//! This module defines:
//! - The `Entry` trait the retrieval engine is written against
//! - The flat clinical entry used by condition and glossary stores
//! - ICD-11 code shape checking

use crate::crossref::CrossReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Behaviour every stored entry provides to the retrieval engine
pub trait Entry {
    /// Unique, stable key within the owning store
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Tag from the owning store's taxonomy
    fn category(&self) -> &str;

    /// Text fields searched by `Store::search`, in a fixed order
    fn search_fields(&self) -> Vec<&str>;

    fn cross_references(&self) -> &[CrossReference];

    /// Structural checks specific to this entry flavor
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

// ============================================================================
// Flat Clinical Entry
// ============================================================================

/// Value of a store-specific field on a flat entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    fn texts(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(text) => vec![text.as_str()],
            FieldValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// A flat clinical or glossary entry
///
/// The named fields cover condition-style stores. Anything else a store
/// carries (key pearls, worked calculations, references) lands in `fields`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_es: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd11: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathophysiology: Option<String>,
    #[serde(default)]
    pub clinical_features: Vec<String>,
    #[serde(default)]
    pub diagnostics: Vec<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub complications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_explanation: Option<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub cross_references: Vec<CrossReference>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Entry for ClinicalEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.name_es.as_deref());
        fields.push(&self.description);
        fields.extend(self.pathophysiology.as_deref());

        for list in [
            &self.clinical_features,
            &self.diagnostics,
            &self.treatments,
            &self.complications,
        ] {
            fields.extend(list.iter().map(String::as_str));
        }

        fields.extend(self.patient_explanation.as_deref());
        fields.extend(self.red_flags.iter().map(String::as_str));

        for value in self.fields.values() {
            fields.extend(value.texts());
        }

        fields
    }

    fn cross_references(&self) -> &[CrossReference] {
        &self.cross_references
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("has empty name".to_string());
        }
        if self.description.trim().is_empty() {
            errors.push("has empty description".to_string());
        }
        if let Some(ref code) = self.icd11 {
            if !is_valid_icd11(code) {
                errors.push(format!("has malformed ICD-11 code '{}'", code));
            }
        }
        for reference in &self.cross_references {
            if reference.target_id.trim().is_empty() {
                errors.push("has a cross-reference with empty targetId".to_string());
            }
        }

        errors
    }
}

/// Check the shape of an ICD-11 code such as `3A51` or `3B64.10`
///
/// A stem of four uppercase alphanumerics whose second character is a letter,
/// optionally followed by `.` and one to four more.
pub fn is_valid_icd11(code: &str) -> bool {
    let is_code_char = |c: char| c.is_ascii_digit() || c.is_ascii_uppercase();

    let (stem, extension) = match code.split_once('.') {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (code, None),
    };

    let stem_ok = stem.len() == 4
        && stem.chars().all(is_code_char)
        && stem.chars().nth(1).is_some_and(|c| c.is_ascii_uppercase());

    let extension_ok = extension
        .map_or(true, |ext| (1..=4).contains(&ext.len()) && ext.chars().all(is_code_char));

    stem_ok && extension_ok
}
