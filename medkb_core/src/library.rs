//! The set of published stores an application reads from.
//!
//! A `Library` is assembled once at startup and then shared immutably,
//! typically by reference or behind an `Arc`. Stores of both entry flavors
//! live side by side as `AnyStore` values.

use crate::crossref::CrossReference;
use crate::entry::{ClinicalEntry, Entry};
use crate::store::Store;
use crate::taxonomy::Taxonomy;
use crate::tiered::TieredEntry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry flavor a store holds
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    Clinical,
    Tiered,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Clinical => f.pad("clinical"),
            Schema::Tiered => f.pad("tiered"),
        }
    }
}

/// A borrowed entry of either flavor
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryRef<'a> {
    Clinical(&'a ClinicalEntry),
    Tiered(&'a TieredEntry),
}

impl<'a> EntryRef<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            EntryRef::Clinical(entry) => &entry.id,
            EntryRef::Tiered(entry) => &entry.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            EntryRef::Clinical(entry) => &entry.name,
            EntryRef::Tiered(entry) => &entry.name,
        }
    }

    pub fn category(&self) -> &'a str {
        match *self {
            EntryRef::Clinical(entry) => &entry.category,
            EntryRef::Tiered(entry) => &entry.entry_type,
        }
    }

    pub fn cross_references(&self) -> &'a [CrossReference] {
        match *self {
            EntryRef::Clinical(entry) => &entry.cross_references,
            EntryRef::Tiered(entry) => &entry.cross_references,
        }
    }

    pub fn as_clinical(&self) -> Option<&'a ClinicalEntry> {
        match *self {
            EntryRef::Clinical(entry) => Some(entry),
            EntryRef::Tiered(_) => None,
        }
    }

    pub fn as_tiered(&self) -> Option<&'a TieredEntry> {
        match *self {
            EntryRef::Clinical(_) => None,
            EntryRef::Tiered(entry) => Some(entry),
        }
    }

    pub fn search_fields(&self) -> Vec<&'a str> {
        match *self {
            EntryRef::Clinical(entry) => entry.search_fields(),
            EntryRef::Tiered(entry) => entry.search_fields(),
        }
    }
}

/// A published store of either flavor
#[derive(Clone, Debug)]
pub enum AnyStore {
    Clinical(Store<ClinicalEntry>),
    Tiered(Store<TieredEntry>),
}

impl From<Store<ClinicalEntry>> for AnyStore {
    fn from(store: Store<ClinicalEntry>) -> Self {
        AnyStore::Clinical(store)
    }
}

impl From<Store<TieredEntry>> for AnyStore {
    fn from(store: Store<TieredEntry>) -> Self {
        AnyStore::Tiered(store)
    }
}

fn wrap_clinical(entries: Vec<&ClinicalEntry>) -> Vec<EntryRef<'_>> {
    entries.into_iter().map(EntryRef::Clinical).collect()
}

fn wrap_tiered(entries: Vec<&TieredEntry>) -> Vec<EntryRef<'_>> {
    entries.into_iter().map(EntryRef::Tiered).collect()
}

impl AnyStore {
    pub fn name(&self) -> &str {
        match self {
            AnyStore::Clinical(store) => store.name(),
            AnyStore::Tiered(store) => store.name(),
        }
    }

    pub fn schema(&self) -> Schema {
        match self {
            AnyStore::Clinical(_) => Schema::Clinical,
            AnyStore::Tiered(_) => Schema::Tiered,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        match self {
            AnyStore::Clinical(store) => store.taxonomy(),
            AnyStore::Tiered(store) => store.taxonomy(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnyStore::Clinical(store) => store.len(),
            AnyStore::Tiered(store) => store.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries in natural order
    pub fn entries(&self) -> Vec<EntryRef<'_>> {
        match self {
            AnyStore::Clinical(store) => store.iter().map(EntryRef::Clinical).collect(),
            AnyStore::Tiered(store) => store.iter().map(EntryRef::Tiered).collect(),
        }
    }

    pub fn search(&self, query: &str) -> Vec<EntryRef<'_>> {
        match self {
            AnyStore::Clinical(store) => wrap_clinical(store.search(query)),
            AnyStore::Tiered(store) => wrap_tiered(store.search(query)),
        }
    }

    pub fn filter_by_category(&self, categories: &[&str]) -> Vec<EntryRef<'_>> {
        match self {
            AnyStore::Clinical(store) => wrap_clinical(store.filter_by_category(categories)),
            AnyStore::Tiered(store) => wrap_tiered(store.filter_by_category(categories)),
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<EntryRef<'_>> {
        match self {
            AnyStore::Clinical(store) => store.get_by_id(id).map(EntryRef::Clinical),
            AnyStore::Tiered(store) => store.get_by_id(id).map(EntryRef::Tiered),
        }
    }

    pub fn count(&self, category: Option<&str>) -> usize {
        match self {
            AnyStore::Clinical(store) => store.count(category),
            AnyStore::Tiered(store) => store.count(category),
        }
    }

    pub fn categories(&self) -> Vec<&str> {
        match self {
            AnyStore::Clinical(store) => store.categories(),
            AnyStore::Tiered(store) => store.categories(),
        }
    }
}

/// Published stores, in registration order
#[derive(Clone, Debug, Default)]
pub struct Library {
    stores: Vec<AnyStore>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a store during assembly
    pub fn add(&mut self, store: impl Into<AnyStore>) -> Result<()> {
        let store = store.into();
        if self.store(store.name()).is_some() {
            return Err(Error::DuplicateStore(store.name().to_string()));
        }
        tracing::debug!(
            "Registered {} store '{}' ({} entries)",
            store.schema(),
            store.name(),
            store.len()
        );
        self.stores.push(store);
        Ok(())
    }

    /// Builder-style `add`
    pub fn with_store(mut self, store: impl Into<AnyStore>) -> Result<Self> {
        self.add(store)?;
        Ok(self)
    }

    pub fn stores(&self) -> &[AnyStore] {
        &self.stores
    }

    pub fn store(&self, name: &str) -> Option<&AnyStore> {
        self.stores.iter().find(|s| s.name() == name)
    }

    /// Like `store`, but an unknown name is an error
    pub fn require_store(&self, name: &str) -> Result<&AnyStore> {
        self.store(name)
            .ok_or_else(|| Error::UnknownStore(name.to_string()))
    }

    /// Every store holding `id`, with the entry found there
    pub fn find_entry(&self, id: &str) -> Vec<(&AnyStore, EntryRef<'_>)> {
        self.stores
            .iter()
            .filter_map(|store| store.get_by_id(id).map(|entry| (store, entry)))
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.stores.iter().map(AnyStore::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_builtin_library;
    use crate::content::hematology;

    #[test]
    fn test_duplicate_store_rejected() {
        let mut library = Library::new();
        library.add(hematology::store().unwrap()).unwrap();
        let err = library.add(hematology::store().unwrap()).unwrap_err();
        assert!(matches!(err, Error::DuplicateStore(name) if name == "hematology"));
    }

    #[test]
    fn test_unknown_store() {
        let library = build_builtin_library().unwrap();
        assert!(library.store("cardiology").is_none());
        assert!(matches!(
            library.require_store("cardiology"),
            Err(Error::UnknownStore(_))
        ));
    }

    #[test]
    fn test_any_store_matches_typed_store() {
        let typed = hematology::store().unwrap();
        let any = AnyStore::from(typed.clone());

        assert_eq!(any.schema(), Schema::Clinical);
        assert_eq!(any.len(), typed.len());
        assert_eq!(any.search("hemolytic").len(), typed.search("hemolytic").len());
        assert_eq!(any.count(Some("bleeding")), typed.count(Some("bleeding")));
        assert_eq!(any.categories(), typed.categories());
        assert_eq!(
            any.get_by_id("sickle-cell-disease")
                .and_then(|e| e.as_clinical())
                .and_then(|e| e.icd11.as_deref()),
            Some("3A51")
        );
        assert!(any.get_by_id("sickle-cell-disease").unwrap().as_tiered().is_none());
    }

    #[test]
    fn test_find_entry_across_stores() {
        let library = build_builtin_library().unwrap();
        let hits = library.find_entry("glomerulus");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.name(), "electrolytes");
        assert_eq!(hits[0].1.category(), "nephron-segment");
        assert!(library.find_entry("nowhere").is_empty());
    }

    #[test]
    fn test_concurrent_readers_share_one_library() {
        let library = build_builtin_library().unwrap();
        let expected = library
            .require_store("hematology")
            .unwrap()
            .search("anemia")
            .iter()
            .map(|e| e.id().to_string())
            .collect::<Vec<_>>();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let store = library.require_store("hematology").unwrap();
                        let ids: Vec<_> = store
                            .search("anemia")
                            .iter()
                            .map(|e| e.id().to_string())
                            .collect();
                        assert_eq!(ids, expected);
                        assert!(store.get_by_id("hemophilia-a").is_some());
                        assert_eq!(store.filter_by_category(&[]).len(), store.len());
                    }
                });
            }
        });
    }

    #[test]
    fn test_library_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Library>();
    }
}
