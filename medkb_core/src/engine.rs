//! Retrieval engine: search, category filter, id lookup, counts.
//!
//! These operations are written once against the `Entry` trait and serve
//! every store. They only read the store and allocate fresh result vectors,
//! so any number of threads may call them on a shared store.
//!
//! ## Search
//!
//! - The query is trimmed and lower-cased.
//! - An empty or whitespace-only query matches nothing.
//! - Each entry's search fields are joined and lower-cased; the entry matches
//!   when that text contains the query as a substring.
//! - Matches come back in store order. There is no ranking.
//!
//! ## Category filter
//!
//! - No categories means no filter: every entry, in store order.
//! - Otherwise entries whose category equals any requested tag. Tags outside
//!   the taxonomy simply match nothing.

use crate::entry::Entry;
use crate::store::Store;

/// Separator placed between fields in the searchable text
pub const FIELD_SEPARATOR: &str = "\n";

/// Trim and lower-case a query; `None` when nothing is left
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// The lower-cased text an entry is searched by
pub fn searchable_text<E: Entry + ?Sized>(entry: &E) -> String {
    entry.search_fields().join(FIELD_SEPARATOR).to_lowercase()
}

/// Whether an entry matches an already normalized query
pub fn matches<E: Entry + ?Sized>(entry: &E, normalized_query: &str) -> bool {
    searchable_text(entry).contains(normalized_query)
}

impl<E: Entry> Store<E> {
    /// Entries whose searchable text contains `query`, in store order
    pub fn search(&self, query: &str) -> Vec<&E> {
        let Some(needle) = normalize_query(query) else {
            tracing::debug!("Blank query against '{}' matches nothing", self.name);
            return Vec::new();
        };

        let results: Vec<&E> = self
            .entries
            .iter()
            .filter(|entry| matches(*entry, &needle))
            .collect();

        tracing::debug!(
            "Search '{}' in '{}' matched {} of {} entries",
            needle,
            self.name,
            results.len(),
            self.entries.len()
        );
        results
    }

    /// Entries in any of `categories`, or every entry when none are given
    pub fn filter_by_category(&self, categories: &[&str]) -> Vec<&E> {
        if categories.is_empty() {
            return self.entries.iter().collect();
        }

        self.entries
            .iter()
            .filter(|entry| categories.iter().any(|c| *c == entry.category()))
            .collect()
    }

    /// Direct keyed lookup; absence is an ordinary outcome
    pub fn get_by_id(&self, id: &str) -> Option<&E> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Number of entries, optionally restricted to one category
    pub fn count(&self, category: Option<&str>) -> usize {
        match category {
            None => self.entries.len(),
            Some(category) => self
                .entries
                .iter()
                .filter(|entry| entry.category() == category)
                .count(),
        }
    }

    /// Distinct categories actually present, in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            let category = entry.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{electrolytes, hematology, public_health};
    use crate::entry::ClinicalEntry;

    const QUERIES: &[&str] = &[
        "hemolytic",
        "HEMOLYTIC",
        "  platelet ",
        "factor viii",
        "anemia",
        "iron",
        "β",
        "thrombo",
        "zzz-not-present",
        "a",
    ];

    fn hematology_store() -> Store<ClinicalEntry> {
        hematology::store().unwrap()
    }

    #[test]
    fn test_get_by_id_roundtrip_for_every_entry() {
        let store = hematology_store();
        for entry in store.iter() {
            assert_eq!(store.get_by_id(&entry.id), Some(entry));
        }

        let glossary = public_health::store().unwrap();
        for entry in glossary.iter() {
            assert_eq!(glossary.get_by_id(&entry.id), Some(entry));
        }

        let tiered = electrolytes::store().unwrap();
        for entry in tiered.iter() {
            assert_eq!(tiered.get_by_id(&entry.id), Some(entry));
        }
    }

    #[test]
    fn test_get_by_id_absent() {
        let store = hematology_store();
        assert!(store.get_by_id("no-such-condition").is_none());
        assert!(store.get_by_id("").is_none());
        assert!(store.get_by_id("Sickle-Cell-Disease").is_none());
    }

    #[test]
    fn test_search_partitions_store() {
        let store = hematology_store();
        for query in QUERIES {
            let results = store.search(query);
            let needle = normalize_query(query).unwrap();
            for entry in store.iter() {
                let included = results.iter().any(|r| r.id == entry.id);
                assert_eq!(
                    included,
                    searchable_text(entry).contains(&needle),
                    "query {:?} entry {}",
                    query,
                    entry.id
                );
            }
        }
    }

    #[test]
    fn test_search_results_in_store_order() {
        let store = hematology_store();
        let results = store.search("anemia");
        let positions: Vec<_> = results
            .iter()
            .map(|r| store.iter().position(|e| e.id == r.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let store = hematology_store();
        assert!(store.search("").is_empty());
        assert!(store.search("   ").is_empty());
        assert!(store.search("\t\n").is_empty());

        let tiered = electrolytes::store().unwrap();
        assert!(tiered.search("").is_empty());
    }

    #[test]
    fn test_search_hemolytic() {
        let store = hematology_store();
        let ids: Vec<_> = store
            .search("hemolytic")
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert!(ids.contains(&"hemolytic-anemia-autoimmune"));
        assert!(ids.contains(&"thrombotic-thrombocytopenic-purpura"));
        assert!(!ids.contains(&"hemophilia-a"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = hematology_store();
        assert_eq!(store.search("Hemolytic"), store.search("hemolytic"));
        assert_eq!(store.search("  SICKLE "), store.search("sickle"));
        assert!(!store.search("sickle").is_empty());
    }

    #[test]
    fn test_search_matches_localized_name() {
        let store = hematology_store();
        let ids: Vec<_> = store
            .search("drepanocítica")
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["sickle-cell-disease"]);
    }

    #[test]
    fn test_sickle_cell_lookup() {
        let store = hematology_store();
        let entry = store.get_by_id("sickle-cell-disease").unwrap();
        assert_eq!(entry.category, "hemoglobinopathy");
        assert_eq!(entry.icd11.as_deref(), Some("3A51"));
    }

    #[test]
    fn test_public_health_sensitivity_lookup() {
        let store = public_health::store().unwrap();
        let entry = store.get_by_id("sensitivity").unwrap();
        assert_eq!(entry.category, "biostatistics");
    }

    #[test]
    fn test_filter_without_categories_returns_everything() {
        let store = hematology_store();
        let all = store.filter_by_category(&[]);
        assert_eq!(all.len(), store.len());
        for (filtered, entry) in all.iter().zip(store.iter()) {
            assert_eq!(*filtered, entry);
        }
    }

    #[test]
    fn test_filter_single_category_is_subset() {
        let store = hematology_store();
        for category in store.taxonomy().categories() {
            let filtered = store.filter_by_category(&[category.as_str()]);
            assert!(filtered.iter().all(|e| &e.category == category));
            assert_eq!(filtered.len(), store.count(Some(category.as_str())));
        }
    }

    #[test]
    fn test_filter_platelet_and_thrombotic() {
        let store = hematology_store();
        let filtered = store.filter_by_category(&["platelet", "thrombotic"]);
        assert_eq!(
            filtered.len(),
            store.count(Some("platelet")) + store.count(Some("thrombotic"))
        );
        assert!(store.count(Some("platelet")) > 0);
        assert!(store.count(Some("thrombotic")) > 0);

        let mut ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), filtered.len());
    }

    #[test]
    fn test_filter_unknown_category_matches_nothing() {
        let store = hematology_store();
        assert!(store.filter_by_category(&["cardiology"]).is_empty());
        assert!(store.filter_by_category(&["Platelet"]).is_empty());
    }

    #[test]
    fn test_filter_repeated_category_has_no_duplicates() {
        let store = hematology_store();
        assert_eq!(
            store.filter_by_category(&["anemia", "anemia"]),
            store.filter_by_category(&["anemia"])
        );
    }

    #[test]
    fn test_count_matches_filter() {
        let store = hematology_store();
        assert_eq!(store.count(None), store.filter_by_category(&[]).len());
        assert_eq!(store.count(Some("not-a-category")), 0);
    }

    #[test]
    fn test_categories_are_distinct_and_present() {
        let store = hematology_store();
        let categories = store.categories();
        let mut deduped = categories.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), categories.len());
        for category in &categories {
            assert!(store.taxonomy().contains(category));
            assert!(store.count(Some(*category)) > 0);
        }
        assert_eq!(categories[0], store.iter().next().unwrap().category);
    }

    #[test]
    fn test_operations_are_idempotent() {
        let store = hematology_store();
        assert_eq!(store.search("anemia"), store.search("anemia"));
        assert_eq!(
            store.filter_by_category(&["bleeding"]),
            store.filter_by_category(&["bleeding"])
        );
        assert_eq!(
            store.get_by_id("hemophilia-a"),
            store.get_by_id("hemophilia-a")
        );
    }

    #[test]
    fn test_tiered_store_filters_by_entry_type() {
        let store = electrolytes::store().unwrap();
        let disorders = store.filter_by_category(&["electrolyte-disorder"]);
        assert!(!disorders.is_empty());
        assert!(disorders
            .iter()
            .all(|e| e.entry_type == "electrolyte-disorder"));
        assert!(!store.search("potassium").is_empty());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Iron "), Some("iron".to_string()));
        assert_eq!(normalize_query(" \t "), None);
    }
}
