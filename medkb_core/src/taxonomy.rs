//! Closed category sets.
//!
//! Every store declares the complete list of category tags its entries may
//! carry. Membership is plain string equality; the set never changes after
//! the store is built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The closed set of category tags for one knowledge domain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    domain: String,
    categories: Vec<String>,
}

impl Taxonomy {
    /// Create a taxonomy from any list of tags
    pub fn new<I, S>(domain: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a taxonomy from a compiled-in tag table
    pub fn from_static(domain: &str, categories: &[&str]) -> Self {
        Self::new(domain, categories.iter().copied())
    }

    /// Report whether `candidate` belongs to this closed set
    pub fn contains(&self, candidate: &str) -> bool {
        self.categories.iter().any(|c| c == candidate)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// All tags, in declaration order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Validate the set itself
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.categories.is_empty() {
            errors.push(format!("Taxonomy '{}' declares no categories", self.domain));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.trim().is_empty() {
                errors.push(format!("Taxonomy '{}' has a blank category", self.domain));
            } else if !seen.insert(category.as_str()) {
                errors.push(format!(
                    "Taxonomy '{}' repeats category '{}'",
                    self.domain, category
                ));
            }
        }

        errors
    }
}
