//! The progress store: CRUD over the per-module progress collection.
//!
//! The entire collection is persisted as one JSON blob under a fixed key.
//! Every mutating operation is a full read-modify-write: load the
//! collection, change one record, write the whole collection back in a
//! single storage write. With one session owning the blob that gives
//! causal consistency (a `load` right after a `persist` sees the written
//! value) and no locking is needed.

use chrono::Utc;
use log::warn;

use crate::catalog;
use crate::catalog::Category;
use crate::error::StoreError;
use crate::progress_model::{CompletionStatus, ProgressPatch, ProgressRecord};
use crate::storage::ProgressStorage;

/// Storage key for the serialized collection.
pub const PROGRESS_KEY: &str = "learningProgress";

/// The full set of progress records, one per touched module, keyed by
/// `module_id`. Insertion order is preserved across persist/load.
pub type ProgressCollection = Vec<ProgressRecord>;

/// Owns the persisted progress collection through an injected storage
/// backend. Construct one per session and pass it to consumers; callers
/// only ever hold transient copies of the records.
pub struct ProgressStore {
    storage: Box<dyn ProgressStorage>,
}

impl ProgressStore {
    pub fn new(storage: Box<dyn ProgressStorage>) -> Self {
        Self { storage }
    }

    /// Reads the persisted collection. A missing blob yields the empty
    /// collection; so does an unreadable one: corruption is logged and
    /// swallowed, never surfaced to the caller.
    pub fn load(&self) -> ProgressCollection {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!("Could not load stored progress, starting from empty: {e}");
                Vec::new()
            }
        }
    }

    /// Strict variant of [`load`](Self::load): surfaces `Corrupt` for an
    /// unparseable blob and `Storage` for engine failures instead of
    /// recovering.
    pub fn try_load(&self) -> Result<ProgressCollection, StoreError> {
        match self.storage.read(PROGRESS_KEY)? {
            Some(blob) => {
                serde_json::from_str(&blob).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    /// Serializes the full collection and overwrites the stored blob in a
    /// single write.
    pub fn persist(&self, records: &[ProgressRecord]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(records)?;
        self.storage.write(PROGRESS_KEY, &blob)
    }

    /// Returns the record for `module_id`, if the module has been touched.
    pub fn record(&self, module_id: &str) -> Option<ProgressRecord> {
        self.load().into_iter().find(|r| r.module_id == module_id)
    }

    /// Creates an untouched record for a module: `not_started`, 0%, no
    /// time logged. Fails with `DuplicateRecord` if the module already has
    /// one.
    pub fn create(
        &self,
        module_id: &str,
        module_title: &str,
        category: Category,
    ) -> Result<ProgressRecord, StoreError> {
        let mut records = self.load();
        if records.iter().any(|r| r.module_id == module_id) {
            return Err(StoreError::DuplicateRecord(format!(
                "progress for module '{module_id}' already exists"
            )));
        }
        let record = ProgressRecord::new(module_id, module_title, category);
        records.push(record.clone());
        self.persist(&records)?;
        Ok(record)
    }

    /// The "start module" user action. Resolves title and category from
    /// the catalog (`NotFound` for an unknown id) and creates the record
    /// as `in_progress`. If the module was already started the existing
    /// record is returned unchanged, so repeated starts are harmless.
    pub fn start(&self, module_id: &str) -> Result<ProgressRecord, StoreError> {
        let module = catalog::module_by_id(module_id).ok_or_else(|| {
            StoreError::NotFound(format!("no catalog module with id '{module_id}'"))
        })?;
        let mut records = self.load();
        if let Some(existing) = records.iter().find(|r| r.module_id == module_id) {
            return Ok(existing.clone());
        }
        let record = ProgressRecord::started(module.id, module.title, module.category, Utc::now());
        records.push(record.clone());
        self.persist(&records)?;
        Ok(record)
    }

    /// Merges a patch into an existing record and persists. Only fields
    /// present in the patch overwrite; `last_accessed` is refreshed on
    /// every call.
    ///
    /// Note: a patch that sets `progress_percentage` to 100 does not
    /// promote `completion_status`; use [`mark_completed`](Self::mark_completed)
    /// to move both together.
    pub fn update(
        &self,
        module_id: &str,
        patch: &ProgressPatch,
    ) -> Result<ProgressRecord, StoreError> {
        if let Some(percentage) = patch.progress_percentage {
            if percentage > 100 {
                return Err(StoreError::InvalidArgument(format!(
                    "progress_percentage {percentage} is out of range (0-100)"
                )));
            }
        }
        let mut records = self.load();
        let record = records
            .iter_mut()
            .find(|r| r.module_id == module_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("no progress record for module '{module_id}'"))
            })?;
        record.apply(patch, Utc::now());
        let updated = record.clone();
        self.persist(&records)?;
        Ok(updated)
    }

    /// Marks a module completed: status `completed` and percentage 100,
    /// regardless of where the record was before. Idempotent apart from
    /// `last_accessed`.
    pub fn mark_completed(&self, module_id: &str) -> Result<ProgressRecord, StoreError> {
        let patch = ProgressPatch {
            completion_status: Some(CompletionStatus::Completed),
            progress_percentage: Some(100),
            ..ProgressPatch::default()
        };
        self.update(module_id, &patch)
    }

    /// Adds study time to an existing record. `minutes` must be
    /// non-negative; time only ever accumulates.
    pub fn add_time(&self, module_id: &str, minutes: i64) -> Result<ProgressRecord, StoreError> {
        if minutes < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "time delta must be non-negative, got {minutes}"
            )));
        }
        let mut records = self.load();
        let record = records
            .iter_mut()
            .find(|r| r.module_id == module_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("no progress record for module '{module_id}'"))
            })?;
        record.add_time(minutes as u64, Utc::now());
        let updated = record.clone();
        self.persist(&records)?;
        Ok(updated)
    }

    /// Drops every record. Maintenance operation, outside the normal flow;
    /// returns how many records were removed.
    pub fn clear(&self) -> Result<usize, StoreError> {
        let count = self.load().len();
        self.storage.remove(PROGRESS_KEY)?;
        Ok(count)
    }
}
