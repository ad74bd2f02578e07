//! Pluggable blob storage behind the progress store.
//!
//! The store persists exactly one named blob (the serialized progress
//! collection), so the backend contract is deliberately small: read, write,
//! remove. [`RedbStorage`] is the production backend; [`MemoryStorage`]
//! backs tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use log::info;
use redb::{Database, ReadableTable, TableDefinition, TableError};

use crate::error::StoreError;

const BLOB_TABLE: TableDefinition<&str, &str> = TableDefinition::new("blobs");

/// Storage backend contract: get/set/remove a named blob.
///
/// A `write` must be atomic from the caller's point of view: a `read` of
/// the same key issued afterwards by the same session observes the full
/// written value, never a partial state.
pub trait ProgressStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// File-backed storage on redb. One database file, one table, one blob per
/// key; every write is a single committed transaction.
pub struct RedbStorage {
    db: Database,
}

impl RedbStorage {
    /// Creates or opens the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let db = Database::create(path)?;
        info!("Opened progress database at {}", path.display());
        Ok(Self { db })
    }
}

impl ProgressStorage for RedbStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(BLOB_TABLE) {
            Ok(table) => table,
            // Nothing was ever written; same as a missing key.
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(BLOB_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(BLOB_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}

/// In-memory backend. State dies with the instance.
#[derive(Default)]
pub struct MemoryStorage {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
