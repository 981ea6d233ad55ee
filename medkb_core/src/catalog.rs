//! Built-in library of compiled-in stores.
//!
//! The library is validated the first time it is requested and then shared
//! for the life of the process. A store that fails validation is never
//! published; the error is returned instead.

use crate::content::{electrolytes, hematology, public_health};
use crate::library::Library;
use crate::Result;
use once_cell::sync::OnceCell;

/// Cached built-in library - built once and reused across all operations
static BUILTIN_LIBRARY: OnceCell<Library> = OnceCell::new();

/// Get a reference to the validated built-in library
///
/// The first caller pays for validation. If validation fails nothing is
/// cached, so every caller sees the same error.
pub fn builtin_library() -> Result<&'static Library> {
    BUILTIN_LIBRARY.get_or_try_init(build_builtin_library)
}

/// Builds the built-in library from scratch
///
/// **Note**: For production use, prefer `builtin_library()` which returns a
/// cached reference. This function is retained for testing and for callers
/// that extend the library with stores loaded from disk.
pub fn build_builtin_library() -> Result<Library> {
    Library::new()
        .with_store(hematology::store()?)?
        .with_store(public_health::store()?)?
        .with_store(electrolytes::store()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Schema;

    #[test]
    fn test_builtin_library_builds() {
        let library = build_builtin_library().unwrap();
        let names: Vec<_> = library.stores().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["hematology", "public-health", "electrolytes"]);
        assert_eq!(
            library.require_store("electrolytes").unwrap().schema(),
            Schema::Tiered
        );
    }

    #[test]
    fn test_cached_library_is_shared() {
        let first = builtin_library().unwrap();
        let second = builtin_library().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.entry_count(), build_builtin_library().unwrap().entry_count());
    }

    #[test]
    fn test_ids_unique_within_each_store() {
        let library = build_builtin_library().unwrap();
        for store in library.stores() {
            let mut ids: Vec<_> = store.entries().iter().map(|e| e.id()).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate id in {}", store.name());
        }
    }
}
