//! JSON store files.
//!
//! A store file carries one store: its name, entry flavor, closed category
//! set and entry table. The table is either a list in natural order or an
//! object keyed by entry id. Keyed tables keep file order and every key must
//! equal its entry's id.
//!
//! Loading is all-or-nothing. A file that cannot be parsed, or whose store
//! fails validation, is an error; nothing from it is published.

use crate::entry::{ClinicalEntry, Entry};
use crate::library::{AnyStore, Schema};
use crate::store::Store;
use crate::taxonomy::Taxonomy;
use crate::tiered::TieredEntry;
use crate::{Error, Result};
use fs2::FileExt;
use serde::de::{DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// On-disk shape of a store file
#[derive(Debug, Deserialize)]
struct StoreFile {
    name: String,
    schema: Schema,
    /// Taxonomy domain; defaults to the store name
    #[serde(default)]
    domain: Option<String>,
    categories: Vec<String>,
    entries: EntryTable,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryTable {
    List(Vec<Value>),
    Keyed(KeyedEntries),
}

/// Id-keyed entry table in file order, repeated keys included
#[derive(Debug)]
struct KeyedEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for KeyedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyedVisitor;

        impl<'de> Visitor<'de> for KeyedVisitor {
            type Value = KeyedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of entries keyed by id")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<KeyedEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    pairs.push((key, value));
                }
                Ok(KeyedEntries(pairs))
            }
        }

        deserializer.deserialize_map(KeyedVisitor)
    }
}

fn invalid(path: &Path, reason: impl Into<String>) -> Error {
    Error::InvalidStoreFile {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Parse and validate a store from JSON text
///
/// `path` is only used to label errors.
pub fn parse_store(json: &str, path: &Path) -> Result<AnyStore> {
    let file: StoreFile = serde_json::from_str(json).map_err(|e| invalid(path, e.to_string()))?;

    let store = match file.schema {
        Schema::Clinical => AnyStore::from(build::<ClinicalEntry>(file, path)?),
        Schema::Tiered => AnyStore::from(build::<TieredEntry>(file, path)?),
    };

    tracing::debug!(
        "Parsed {} store '{}' from {:?}",
        store.schema(),
        store.name(),
        path
    );
    Ok(store)
}

fn build<E>(file: StoreFile, path: &Path) -> Result<Store<E>>
where
    E: Entry + DeserializeOwned,
{
    let domain = file.domain.unwrap_or_else(|| file.name.clone());
    let taxonomy = Taxonomy::new(domain, file.categories);
    let mut errors = Vec::new();

    match file.entries {
        EntryTable::List(values) => {
            let mut entries = Vec::with_capacity(values.len());
            for (position, value) in values.into_iter().enumerate() {
                match serde_json::from_value::<E>(value) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => errors.push(format!("entry #{}: {}", position, e)),
                }
            }
            if !errors.is_empty() {
                return Err(invalid(path, errors.join("; ")));
            }
            Store::build(file.name, taxonomy, entries)
        }
        EntryTable::Keyed(KeyedEntries(pairs)) => {
            let mut table = Vec::with_capacity(pairs.len());
            for (key, value) in pairs {
                match serde_json::from_value::<E>(value) {
                    Ok(entry) => table.push((key, entry)),
                    Err(e) => errors.push(format!("entry '{}': {}", key, e)),
                }
            }
            if !errors.is_empty() {
                return Err(invalid(path, errors.join("; ")));
            }
            Store::from_keyed(file.name, taxonomy, table)
        }
    }
}

/// Load a store file under a shared lock
pub fn load_store(path: &Path) -> Result<AnyStore> {
    let file = File::open(path)?;

    // Acquire shared lock for reading
    FileExt::lock_shared(&file)?;

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = FileExt::unlock(&file);
        return Err(e.into());
    }

    FileExt::unlock(&file)?;

    let store = parse_store(&contents, path)?;
    tracing::info!("Loaded store '{}' from {:?}", store.name(), path);
    Ok(store)
}

/// Every `*.json` file in `dir`, sorted by file name
pub fn store_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Load every store file in a directory, in file-name order
///
/// A missing directory holds no stores. The first bad file aborts the load.
pub fn load_store_dir(dir: &Path) -> Result<Vec<AnyStore>> {
    let paths = store_files(dir)?;
    if paths.is_empty() {
        tracing::debug!("No store files in {:?}", dir);
        return Ok(Vec::new());
    }

    let stores = paths
        .iter()
        .map(|path| load_store(path))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("Loaded {} store file(s) from {:?}", stores.len(), dir);
    Ok(stores)
}
