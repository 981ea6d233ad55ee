//! Export stores to CSV indexes and JSON store files.
//!
//! Exports only read the store. File exports are written atomically:
//! a temp file in the target directory is filled, synced and renamed over
//! the destination, so readers never see a half-written file.

use crate::library::{AnyStore, EntryRef, Schema};
use crate::{Error, Result};
use fs2::FileExt;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Output format for `export`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::Other(format!("unknown export format '{}'", other))),
        }
    }
}

/// A row in the CSV index
#[derive(Debug, Serialize)]
struct IndexRow<'a> {
    store: &'a str,
    id: &'a str,
    name: &'a str,
    category: &'a str,
    cross_references: usize,
    levels: String,
}

impl<'a> IndexRow<'a> {
    fn new(store: &'a str, entry: EntryRef<'a>) -> Self {
        let levels = entry
            .as_tiered()
            .map(|tiered| {
                tiered
                    .available_levels()
                    .map(|level| level.to_string())
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();

        IndexRow {
            store,
            id: entry.id(),
            name: entry.name(),
            category: entry.category(),
            cross_references: entry.cross_references().len(),
            levels,
        }
    }
}

/// Write one CSV row per entry, in store order, with a header row
pub fn write_csv_index<W: Write>(store: &AnyStore, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for entry in store.entries() {
        writer.serialize(IndexRow::new(store.name(), entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Store file document, readable by `loader::parse_store`
#[derive(Serialize)]
struct StoreDocument<'a, E: Serialize> {
    name: &'a str,
    schema: Schema,
    domain: &'a str,
    categories: &'a [String],
    entries: &'a [E],
}

/// Serialize a store as a pretty-printed store file
pub fn write_json<W: Write>(store: &AnyStore, writer: W) -> Result<()> {
    let taxonomy = store.taxonomy();
    match store {
        AnyStore::Clinical(inner) => serde_json::to_writer_pretty(
            writer,
            &StoreDocument {
                name: inner.name(),
                schema: Schema::Clinical,
                domain: taxonomy.domain(),
                categories: taxonomy.categories(),
                entries: inner.entries(),
            },
        )?,
        AnyStore::Tiered(inner) => serde_json::to_writer_pretty(
            writer,
            &StoreDocument {
                name: inner.name(),
                schema: Schema::Tiered,
                domain: taxonomy.domain(),
                categories: taxonomy.categories(),
                entries: inner.entries(),
            },
        )?,
    }
    Ok(())
}

/// Atomically replace `path` with whatever `write` produces
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&std::fs::File>) -> Result<()>,
{
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Create unique temp file in the same directory for atomic rename
    let temp = NamedTempFile::new_in(parent)?;

    // Acquire exclusive lock on the temp file to serialize concurrent writers
    FileExt::lock_exclusive(temp.as_file())?;

    {
        let mut writer = BufWriter::new(temp.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    FileExt::unlock(temp.as_file())?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Export the CSV index of a store to `path`
pub fn export_csv(store: &AnyStore, path: &Path) -> Result<()> {
    write_atomically(path, |writer| write_csv_index(store, writer))?;
    tracing::info!("Exported {} rows from '{}' to {:?}", store.len(), store.name(), path);
    Ok(())
}

/// Export a store as a JSON store file to `path`
pub fn export_json(store: &AnyStore, path: &Path) -> Result<()> {
    write_atomically(path, |writer| {
        write_json(store, &mut *writer)?;
        writer.write_all(b"\n")?;
        Ok(())
    })?;
    tracing::info!("Exported store '{}' to {:?}", store.name(), path);
    Ok(())
}

/// Export in the requested format
pub fn export(store: &AnyStore, path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => export_csv(store, path),
        ExportFormat::Json => export_json(store, path),
    }
}
