//! Typed, directed links between entries.
//!
//! Entries carry their cross-references verbatim. Nothing here mutates an
//! entry or invents edges: a `parent` edge from A to B does not imply a
//! `child` edge from B to A. The graph and lint below are read-only views for
//! callers that render "related topics" navigation.

use crate::library::{AnyStore, EntryRef, Library};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How the source entry relates to the target entry
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::Parent,
        Relationship::Child,
        Relationship::Sibling,
        Relationship::Related,
        Relationship::SeeAlso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Parent => "parent",
            Relationship::Child => "child",
            Relationship::Sibling => "sibling",
            Relationship::Related => "related",
            Relationship::SeeAlso => "see-also",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relationship::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown relationship '{}'", s))
    }
}

/// A directed edge to another entry, possibly in another store
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", from = "CrossReferenceRepr")]
pub struct CrossReference {
    pub target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    pub relationship: Relationship,
    pub label: String,
}

impl CrossReference {
    pub fn new(
        target_id: impl Into<String>,
        target_type: impl Into<String>,
        relationship: Relationship,
        label: impl Into<String>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            target_type: Some(target_type.into()),
            relationship,
            label: label.into(),
        }
    }
}

/// Older content lists cross-references as bare ids
#[derive(Deserialize)]
#[serde(untagged)]
enum CrossReferenceRepr {
    Bare(String),
    Full(FullCrossReference),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullCrossReference {
    target_id: String,
    #[serde(default)]
    target_type: Option<String>,
    relationship: Relationship,
    #[serde(default)]
    label: String,
}

impl From<CrossReferenceRepr> for CrossReference {
    fn from(repr: CrossReferenceRepr) -> Self {
        match repr {
            CrossReferenceRepr::Bare(target_id) => CrossReference {
                label: target_id.clone(),
                target_id,
                target_type: None,
                relationship: Relationship::Related,
            },
            CrossReferenceRepr::Full(full) => CrossReference {
                target_id: full.target_id,
                target_type: full.target_type,
                relationship: full.relationship,
                label: full.label,
            },
        }
    }
}

/// One carried edge, with the store and entry it was found on
#[derive(Clone, Copy, Debug)]
pub struct Edge<'a> {
    pub store: &'a str,
    pub source_id: &'a str,
    pub reference: &'a CrossReference,
}

/// A cross-reference target located in the library
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    pub store: &'a AnyStore,
    pub entry: EntryRef<'a>,
}

/// Locate the entry a cross-reference points at
///
/// When several stores hold the target id, a store whose name or an entry
/// whose category equals `target_type` wins; otherwise the first store in
/// library order does.
pub fn resolve<'a>(library: &'a Library, reference: &CrossReference) -> Option<Resolved<'a>> {
    let candidates = library.find_entry(&reference.target_id);

    if let Some(kind) = reference.target_type.as_deref() {
        if let Some((store, entry)) = candidates
            .iter()
            .find(|(store, entry)| store.name() == kind || entry.category() == kind)
        {
            return Some(Resolved {
                store: *store,
                entry: *entry,
            });
        }
    }

    candidates
        .into_iter()
        .next()
        .map(|(store, entry)| Resolved { store, entry })
}

/// What the lint found wrong with an edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LintKind {
    /// No loaded store holds the target id
    UnresolvedTarget,
    /// The edge does not say which kind of entry it points at
    MissingTargetType,
}

/// A lint finding for one edge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintFinding {
    pub store: String,
    pub source_id: String,
    pub target_id: String,
    pub kind: LintKind,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LintKind::UnresolvedTarget => write!(
                f,
                "{}/{} -> '{}': target not found in any store",
                self.store, self.source_id, self.target_id
            ),
            LintKind::MissingTargetType => write!(
                f,
                "{}/{} -> '{}': missing targetType",
                self.store, self.source_id, self.target_id
            ),
        }
    }
}

/// `(store, id)` address of an entry in a library
type EntryKey<'a> = (&'a str, &'a str);

/// Index of every cross-reference carried by a library
///
/// Entries are addressed by store and id, since different stores may reuse
/// an id. Incoming edges are indexed by the entry `resolve` picks, so an
/// edge that cannot be resolved has no incoming side.
pub struct CrossReferenceGraph<'a> {
    edges: Vec<Edge<'a>>,
    outgoing: HashMap<EntryKey<'a>, Vec<usize>>,
    incoming: HashMap<EntryKey<'a>, Vec<usize>>,
}

impl<'a> CrossReferenceGraph<'a> {
    pub fn from_library(library: &'a Library) -> Self {
        let mut edges = Vec::new();
        let mut outgoing: HashMap<EntryKey<'a>, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<EntryKey<'a>, Vec<usize>> = HashMap::new();

        for store in library.stores() {
            for entry in store.entries() {
                for reference in entry.cross_references() {
                    let index = edges.len();
                    edges.push(Edge {
                        store: store.name(),
                        source_id: entry.id(),
                        reference,
                    });
                    outgoing
                        .entry((store.name(), entry.id()))
                        .or_default()
                        .push(index);
                    if let Some(target) = resolve(library, reference) {
                        incoming
                            .entry((target.store.name(), target.entry.id()))
                            .or_default()
                            .push(index);
                    }
                }
            }
        }

        tracing::debug!("Indexed {} cross-references", edges.len());

        Self {
            edges,
            outgoing,
            incoming,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge<'a>] {
        &self.edges
    }

    /// Edges carried by the entry `id` in `store`
    pub fn outgoing(&self, store: &str, id: &str) -> Vec<Edge<'a>> {
        self.collect(self.outgoing.get(&(store, id)))
    }

    /// Edges that resolve to the entry `id` in `store`
    pub fn incoming(&self, store: &str, id: &str) -> Vec<Edge<'a>> {
        self.collect(self.incoming.get(&(store, id)))
    }

    fn collect(&self, indices: Option<&Vec<usize>>) -> Vec<Edge<'a>> {
        indices
            .map(|indices| indices.iter().map(|&i| self.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Lint every edge against the library
    ///
    /// Findings are advisory; cross-store targets may legitimately live in
    /// stores that are not loaded.
    pub fn dangling(&self, library: &Library) -> Vec<LintFinding> {
        let mut findings = Vec::new();

        for edge in &self.edges {
            let reference = edge.reference;
            if reference.target_type.is_none() {
                findings.push(LintFinding {
                    store: edge.store.to_string(),
                    source_id: edge.source_id.to_string(),
                    target_id: reference.target_id.clone(),
                    kind: LintKind::MissingTargetType,
                });
            }
            if library.find_entry(&reference.target_id).is_empty() {
                findings.push(LintFinding {
                    store: edge.store.to_string(),
                    source_id: edge.source_id.to_string(),
                    target_id: reference.target_id.clone(),
                    kind: LintKind::UnresolvedTarget,
                });
            }
        }

        for finding in &findings {
            tracing::warn!("Cross-reference lint: {}", finding);
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_builtin_library;

    #[test]
    fn test_relationship_names() {
        for relationship in Relationship::ALL {
            assert_eq!(relationship.as_str().parse(), Ok(relationship));
        }
        assert_eq!(
            serde_json::to_string(&Relationship::SeeAlso).unwrap(),
            "\"see-also\""
        );
        assert!("cousin".parse::<Relationship>().is_err());
    }

    #[test]
    fn test_full_and_bare_references_deserialize() {
        let json = r#"[
            {"targetId": "hyperkalemia", "targetType": "electrolyte-disorder",
             "relationship": "see-also", "label": "Hyperkalemia"},
            "hemophilia-a"
        ]"#;
        let refs: Vec<CrossReference> = serde_json::from_str(json).unwrap();

        assert_eq!(refs[0].target_type.as_deref(), Some("electrolyte-disorder"));
        assert_eq!(refs[0].relationship, Relationship::SeeAlso);

        assert_eq!(refs[1].target_id, "hemophilia-a");
        assert_eq!(refs[1].target_type, None);
        assert_eq!(refs[1].relationship, Relationship::Related);
        assert_eq!(refs[1].label, "hemophilia-a");
    }

    #[test]
    fn test_unknown_relationship_rejected() {
        let json = r#"{"targetId": "x", "relationship": "cousin", "label": "X"}"#;
        assert!(serde_json::from_str::<CrossReference>(json).is_err());
    }

    #[test]
    fn test_incoming_edges_are_not_mirrored() {
        let library = build_builtin_library().unwrap();
        let graph = CrossReferenceGraph::from_library(&library);

        // TTP points at autoimmune hemolytic anemia; nothing is added the other way.
        let incoming = graph.incoming("hematology", "hemolytic-anemia-autoimmune");
        assert!(incoming
            .iter()
            .any(|e| e.source_id == "thrombotic-thrombocytopenic-purpura"));

        let outgoing = graph.outgoing("hematology", "hemolytic-anemia-autoimmune");
        assert!(outgoing
            .iter()
            .all(|e| e.reference.target_id != "thrombotic-thrombocytopenic-purpura"));

        let total: usize = library
            .stores()
            .iter()
            .flat_map(|s| s.entries())
            .map(|e| e.cross_references().len())
            .sum();
        assert_eq!(graph.len(), total);
    }

    #[test]
    fn test_graph_keeps_same_id_in_different_stores_apart() {
        let renal = r#"{
            "name": "renal",
            "schema": "clinical",
            "categories": ["disorder"],
            "entries": [
                {"id": "acidosis", "name": "Renal Tubular Acidosis", "category": "disorder",
                 "description": "Impaired renal acid handling.",
                 "crossReferences": [{"targetId": "anion-gap", "targetType": "renal",
                                      "relationship": "related", "label": "Anion Gap"}]},
                {"id": "anion-gap", "name": "Anion Gap", "category": "disorder",
                 "description": "Unmeasured anions."}
            ]
        }"#;
        let respiratory = r#"{
            "name": "respiratory",
            "schema": "clinical",
            "categories": ["disorder"],
            "entries": [
                {"id": "acidosis", "name": "Respiratory Acidosis", "category": "disorder",
                 "description": "CO2 retention.",
                 "crossReferences": [{"targetId": "acidosis", "targetType": "renal",
                                      "relationship": "see-also", "label": "Renal Tubular Acidosis"}]}
            ]
        }"#;
        let path = std::path::Path::new("fixture.json");
        let library = Library::new()
            .with_store(crate::loader::parse_store(renal, path).unwrap())
            .unwrap()
            .with_store(crate::loader::parse_store(respiratory, path).unwrap())
            .unwrap();
        let graph = CrossReferenceGraph::from_library(&library);

        let renal_out = graph.outgoing("renal", "acidosis");
        assert_eq!(renal_out.len(), 1);
        assert_eq!(renal_out[0].reference.target_id, "anion-gap");

        let respiratory_out = graph.outgoing("respiratory", "acidosis");
        assert_eq!(respiratory_out.len(), 1);
        assert_eq!(respiratory_out[0].store, "respiratory");

        // The see-also edge resolves to the renal entry only
        let renal_in = graph.incoming("renal", "acidosis");
        assert_eq!(renal_in.len(), 1);
        assert_eq!(renal_in[0].store, "respiratory");
        assert!(graph.incoming("respiratory", "acidosis").is_empty());
    }

    #[test]
    fn test_builtin_library_has_no_dangling_references() {
        let library = build_builtin_library().unwrap();
        let graph = CrossReferenceGraph::from_library(&library);
        let findings = graph.dangling(&library);
        assert!(findings.is_empty(), "{:?}", findings);
    }

    #[test]
    fn test_resolve_across_stores() {
        let library = build_builtin_library().unwrap();
        let reference = CrossReference::new(
            "hyperkalemia",
            "electrolyte-disorder",
            Relationship::SeeAlso,
            "Hyperkalemia",
        );
        let resolved = resolve(&library, &reference).expect("target should resolve");
        assert_eq!(resolved.store.name(), "electrolytes");
        assert_eq!(resolved.entry.id(), "hyperkalemia");

        let missing = CrossReference::new("no-such-entry", "condition", Relationship::Related, "?");
        assert!(resolve(&library, &missing).is_none());
    }

    #[test]
    fn test_lint_reports_unresolved_and_untyped_edges() {
        crate::logging::init_test();
        let json = r#"{
            "name": "fixture",
            "schema": "clinical",
            "categories": ["general"],
            "entries": [
                {"id": "a", "name": "A", "category": "general", "description": "A entry",
                 "crossReferences": ["b", "missing-entry"]},
                {"id": "b", "name": "B", "category": "general", "description": "B entry"}
            ]
        }"#;
        let store = crate::loader::parse_store(json, std::path::Path::new("fixture.json")).unwrap();
        let mut library = Library::new();
        library.add(store).unwrap();

        let graph = CrossReferenceGraph::from_library(&library);
        let findings = graph.dangling(&library);

        let unresolved: Vec<_> = findings
            .iter()
            .filter(|f| f.kind == LintKind::UnresolvedTarget)
            .collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].target_id, "missing-entry");
        assert_eq!(
            findings
                .iter()
                .filter(|f| f.kind == LintKind::MissingTargetType)
                .count(),
            2
        );
    }
}
