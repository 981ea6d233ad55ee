//! Immutable, uniquely keyed content stores.
//!
//! A store is built once from a literal table or a loaded file. Building
//! validates the whole table and either publishes the store or fails with
//! every violation found; there is no partially loaded store.

use crate::entry::Entry;
use crate::taxonomy::Taxonomy;
use crate::{Error, Result};
use std::collections::HashMap;

/// An ordered collection of entries of one flavor
///
/// Insertion order is the order unfiltered queries return entries in.
#[derive(Clone, Debug)]
pub struct Store<E> {
    pub(crate) name: String,
    pub(crate) taxonomy: Taxonomy,
    pub(crate) entries: Vec<E>,
    pub(crate) index: HashMap<String, usize>,
}

impl<E: Entry> Store<E> {
    /// Validate and publish a store from entries in natural order
    pub fn build(name: impl Into<String>, taxonomy: Taxonomy, entries: Vec<E>) -> Result<Self> {
        Self::build_with(name.into(), taxonomy, entries, Vec::new())
    }

    /// Validate and publish a store from an id-keyed table
    ///
    /// Every key must equal the id of the entry stored under it.
    pub fn from_keyed<K: Into<String>>(
        name: impl Into<String>,
        taxonomy: Taxonomy,
        table: Vec<(K, E)>,
    ) -> Result<Self> {
        let mut violations = Vec::new();
        let entries = table
            .into_iter()
            .map(|(key, entry)| {
                let key = key.into();
                if key != entry.id() {
                    violations.push(format!(
                        "Key '{}' doesn't match entry.id '{}'",
                        key,
                        entry.id()
                    ));
                }
                entry
            })
            .collect();

        Self::build_with(name.into(), taxonomy, entries, violations)
    }

    fn build_with(
        name: String,
        taxonomy: Taxonomy,
        entries: Vec<E>,
        mut violations: Vec<String>,
    ) -> Result<Self> {
        violations.extend(taxonomy.validate());

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let id = entry.id();
            if id.trim().is_empty() {
                violations.push(format!("Entry #{} has empty ID", position));
            } else if index.insert(id.to_string(), position).is_some() {
                violations.push(format!("Duplicate entry ID '{}'", id));
            }

            if !taxonomy.contains(entry.category()) {
                violations.push(format!(
                    "Entry '{}' has category '{}' outside taxonomy '{}'",
                    id,
                    entry.category(),
                    taxonomy.domain()
                ));
            }

            for error in entry.validate() {
                violations.push(format!("Entry '{}' {}", id, error));
            }
        }

        if !violations.is_empty() {
            for violation in &violations {
                tracing::error!("Store '{}': {}", name, violation);
            }
            return Err(Error::StoreValidation {
                store: name,
                violations,
            });
        }

        tracing::info!("Published store '{}' with {} entries", name, entries.len());

        Ok(Self {
            name,
            taxonomy,
            entries,
            index,
        })
    }
}

impl<E> Store<E> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The closed category set entries were validated against
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// All entries in natural order
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, E> IntoIterator for &'a Store<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
