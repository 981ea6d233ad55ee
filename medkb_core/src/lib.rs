#![forbid(unsafe_code)]

//! Core domain model and retrieval engine for medkb, a read-only medical
//! knowledge base.
//!
//! This crate provides:
//! - Entry schemas (flat clinical entries, tiered educational entries)
//! - Closed category taxonomies and validated, immutable stores
//! - Search, category filter, id lookup and counts over any store
//! - Cross-reference graph and lint
//! - Built-in content, JSON store files and export
//! - Configuration and logging setup

pub mod error;
pub mod taxonomy;
pub mod entry;
pub mod level;
pub mod tiered;
pub mod crossref;
pub mod store;
pub mod engine;
pub mod library;
pub mod content;
pub mod catalog;
pub mod loader;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use taxonomy::Taxonomy;
pub use entry::{ClinicalEntry, Entry, FieldValue};
pub use level::{Audience, KeyTerm, Level, LevelNumber};
pub use tiered::{Citation, ClinicalRelevance, ContentStatus, ContentTags, Media, TieredEntry};
pub use crossref::{CrossReference, CrossReferenceGraph, LintFinding, LintKind, Relationship};
pub use store::Store;
pub use library::{AnyStore, EntryRef, Library, Schema};
pub use catalog::{build_builtin_library, builtin_library};
pub use loader::{load_store, load_store_dir, parse_store};
pub use export::ExportFormat;
pub use config::Config;
