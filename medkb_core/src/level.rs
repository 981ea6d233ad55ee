//! Progressive-disclosure explanation levels.
//!
//! Level 1 is written for a child, level 5 for a practising physician. A
//! tiered entry may carry any non-empty subset of the five; an absent level
//! means the topic is not available at that depth.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explanation depth, always within 1..=5
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LevelNumber(u8);

impl LevelNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const ALL: [LevelNumber; 5] = [
        LevelNumber(1),
        LevelNumber(2),
        LevelNumber(3),
        LevelNumber(4),
        LevelNumber(5),
    ];

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidLevel(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn audience(self) -> Audience {
        match self.0 {
            1 => Audience::Child,
            2 => Audience::Patient,
            3 => Audience::AlliedHealth,
            4 => Audience::MedicalStudent,
            _ => Audience::Physician,
        }
    }
}

impl TryFrom<u8> for LevelNumber {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LevelNumber> for u8 {
    fn from(level: LevelNumber) -> u8 {
        level.0
    }
}

impl fmt::Display for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reader each level is written for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Child,
    Patient,
    AlliedHealth,
    MedicalStudent,
    Physician,
}

impl Audience {
    /// Short label for badges and headings
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Child => "Kids",
            Audience::Patient => "Patient",
            Audience::AlliedHealth => "Nursing",
            Audience::MedicalStudent => "Med Student",
            Audience::Physician => "Physician",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Audience::Child => "Children ages 5-12",
            Audience::Patient => "General adult patients and caregivers",
            Audience::AlliedHealth => "Nurses, PAs and allied health professionals",
            Audience::MedicalStudent => "Medical students and advanced learners",
            Audience::Physician => "Attending physicians, specialists, researchers",
        }
    }
}

/// A term defined at a given level
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl KeyTerm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            pronunciation: None,
        }
    }
}

/// One depth of explanation for a tiered entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level: LevelNumber,
    pub summary: String,
    pub explanation: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub analogies: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
    #[serde(default)]
    pub patient_counseling_points: Vec<String>,
}

impl Level {
    pub fn new(level: LevelNumber, summary: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            level,
            summary: summary.into(),
            explanation: explanation.into(),
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            clinical_notes: None,
            patient_counseling_points: Vec::new(),
        }
    }

    pub fn audience(&self) -> Audience {
        self.level.audience()
    }

    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.summary.trim().is_empty() {
            errors.push(format!("level {} has empty summary", self.level));
        }
        if self.explanation.trim().is_empty() {
            errors.push(format!("level {} has empty explanation", self.level));
        }
        for term in &self.key_terms {
            if term.term.trim().is_empty() || term.definition.trim().is_empty() {
                errors.push(format!(
                    "level {} has a key term with empty term or definition",
                    self.level
                ));
            }
        }

        errors
    }
}
