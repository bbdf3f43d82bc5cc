//! Record stores - append-only JSON ledgers.
//!
//! Each store is a single file holding a pretty-printed JSON array. Writes
//! load the whole array, push, and overwrite the file. There is no locking:
//! two processes appending to the same file at once can lose a record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Indentation used for store files.
const STORE_INDENT: &[u8] = b"    ";

/// Storage for one record type.
pub trait Repository<T> {
    /// All stored records, in insertion order.
    fn load(&self) -> StoreResult<Vec<T>>;

    /// Replace the stored records.
    fn save(&self, records: &[T]) -> StoreResult<()>;

    /// Add one record at the end.
    fn append(&self, record: T) -> StoreResult<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// A [`Repository`] backed by a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Repository<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> StoreResult<Vec<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, records: &[T]) -> StoreResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(STORE_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;

        fs::write(&self.path, buf).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "Store saved");
        Ok(())
    }
}

/// Append `record` to the JSON store at `path`.
pub fn create<T>(record: T, path: impl Into<PathBuf>) -> StoreResult<()>
where
    T: Serialize + DeserializeOwned,
{
    JsonStore::new(path).append(record)
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// A [`Repository`] kept in process memory.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: RefCell<Vec<T>>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RefCell::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Repository<T> for MemoryStore<T> {
    fn load(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[T]) -> StoreResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Hotel};
    use tempfile::tempdir;

    fn hotel(id: &str) -> Hotel {
        Hotel {
            id: id.into(),
            name: "Inn".into(),
            address: "Main 1".into(),
            total_rooms: 10,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store: JsonStore<Hotel> = JsonStore::new(dir.path().join("hotels.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hotels.json");
        create(hotel("H1"), &path).unwrap();
        create(hotel("H2"), &path).unwrap();
        create(hotel("H1"), &path).unwrap();

        let store: JsonStore<Hotel> = JsonStore::new(&path);
        let ids: Vec<String> = store.load().unwrap().into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["H1", "H2", "H1"]);
    }

    #[test]
    fn test_store_file_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("customers.json");
        let customer = Customer {
            id: "C1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };
        create(customer, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"id\": \"C1\""));
    }

    #[test]
    fn test_malformed_store_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, "not json").unwrap();

        let store: JsonStore<Hotel> = JsonStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
        assert!(matches!(store.append(hotel("H1")), Err(StoreError::Malformed { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_memory_store_append() {
        let store: MemoryStore<Hotel> = MemoryStore::new();
        store.append(hotel("H1")).unwrap();
        store.append(hotel("H2")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.load().unwrap()[1].id, "H2");
    }

    #[test]
    fn test_memory_store_default_without_default_records() {
        let store = MemoryStore::<Hotel>::default();
        assert!(store.is_empty());
        store.append(hotel("H1")).unwrap();
        assert_eq!(store.len(), 1);
    }
}
