//! Tiered educational entries.
//!
//! A tiered entry wraps one to five explanation levels together with
//! media, citations, cross-references, tags and provenance metadata.

use crate::crossref::CrossReference;
use crate::entry::Entry;
use crate::level::{Level, LevelNumber};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Supporting Types
// ============================================================================

/// Illustration attached to an entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Source an entry draws on
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalRelevance {
    Low,
    Medium,
    High,
    Critical,
}

/// Structured categorical metadata
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_relevance: Option<ClinicalRelevance>,
}

/// Editorial lifecycle of an entry
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Review,
    Published,
}

// ============================================================================
// Tiered Entry
// ============================================================================

/// An educational entry with progressive-disclosure levels
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TieredEntry {
    pub id: String,
    /// Entry kind; doubles as the entry's category within its store
    #[serde(rename = "type")]
    pub entry_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_es: Option<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub levels: BTreeMap<LevelNumber, Level>,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub cross_references: Vec<CrossReference>,
    #[serde(default)]
    pub tags: ContentTags,
    pub created_at: String,
    pub updated_at: String,
    pub version: u32,
    pub status: ContentStatus,
    #[serde(default)]
    pub contributors: Vec<String>,
}

impl TieredEntry {
    /// The level at exactly this depth, if the entry has one
    ///
    /// There is no substitution: asking for level 3 of an entry that only
    /// has levels 2 and 4 yields `None`.
    pub fn level(&self, number: LevelNumber) -> Option<&Level> {
        self.levels.get(&number)
    }

    pub fn has_level(&self, number: LevelNumber) -> bool {
        self.levels.contains_key(&number)
    }

    /// Depths this entry is available at, shallowest first
    pub fn available_levels(&self) -> impl Iterator<Item = LevelNumber> + '_ {
        self.levels.keys().copied()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

impl Entry for TieredEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.entry_type
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.name_es.as_deref());
        fields.extend(self.alternate_names.iter().map(String::as_str));

        for level in self.levels.values() {
            fields.push(&level.summary);
            fields.push(&level.explanation);
            for term in &level.key_terms {
                fields.push(&term.term);
                fields.push(&term.definition);
            }
            fields.extend(level.analogies.iter().map(String::as_str));
            fields.extend(level.examples.iter().map(String::as_str));
            fields.extend(level.clinical_notes.as_deref());
            fields.extend(level.patient_counseling_points.iter().map(String::as_str));
        }

        fields.extend(self.tags.topics.iter().map(String::as_str));
        fields.extend(self.tags.keywords.iter().map(String::as_str));
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
        if self.levels.is_empty() {
            errors.push("has no explanation levels".to_string());
        }
        for (number, level) in &self.levels {
            if *number != level.level {
                errors.push(format!(
                    "level key {} holds content marked as level {}",
                    number, level.level
                ));
            }
            errors.extend(level.validate());
        }

        if self.version < 1 {
            errors.push(format!("has invalid version {}", self.version));
        }

        let created = self.created();
        let updated = self.updated();
        if created.is_none() {
            errors.push(format!("has invalid createdAt '{}'", self.created_at));
        }
        if updated.is_none() {
            errors.push(format!("has invalid updatedAt '{}'", self.updated_at));
        }
        if let (Some(created), Some(updated)) = (created, updated) {
            if updated < created {
                errors.push(format!(
                    "updatedAt '{}' precedes createdAt '{}'",
                    self.updated_at, self.created_at
                ));
            }
        }

        for reference in &self.cross_references {
            if reference.target_id.trim().is_empty() {
                errors.push("has a cross-reference with empty targetId".to_string());
            } else if reference.target_id == self.id {
                errors.push("has a cross-reference to itself".to_string());
            }
        }

        errors
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
