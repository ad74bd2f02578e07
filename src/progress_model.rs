//! Data model for per-module learning progress.
//!
//! [`ProgressRecord`] is the unit of persisted state: one record per module
//! the user has touched, keyed by `module_id`. The whole collection is
//! serialized to a single JSON array, so every field here is part of the
//! stored format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Completion state of a single module.
///
/// Transitions are `not_started` → `in_progress` → `completed`; jumping
/// straight from `not_started` to `completed` is also allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Per-module, per-user mutable progress state.
///
/// `module_title` and `category` are denormalized snapshots taken from the
/// catalog when the record is created, so the stored blob stays renderable
/// even without a catalog lookup.
///
/// # Examples
///
/// ```rust
/// use learning_progress_core::catalog::Category;
/// use learning_progress_core::progress_model::{CompletionStatus, ProgressRecord};
///
/// let record = ProgressRecord::new("caching-strategies", "Caching Systems", Category::Components);
/// assert_eq!(record.completion_status, CompletionStatus::NotStarted);
/// assert_eq!(record.progress_percentage, 0);
/// assert!(record.last_accessed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Catalog module this record tracks. Unique within the collection.
    pub module_id: String,
    /// Title snapshot taken at creation time.
    pub module_title: String,
    /// Category snapshot taken at creation time.
    pub category: Category,
    pub completion_status: CompletionStatus,
    /// Integer percentage, 0-100.
    pub progress_percentage: u8,
    /// Accumulated study time. Never decreases in the normal flow.
    pub time_spent_minutes: u64,
    /// Set on every mutation; `null` until the first one.
    pub last_accessed: Option<DateTime<Utc>>,
    /// Free-text study notes.
    pub notes: String,
}

impl ProgressRecord {
    /// A fresh, untouched record: `not_started`, 0%, no time logged.
    pub fn new(module_id: &str, module_title: &str, category: Category) -> Self {
        Self {
            module_id: module_id.to_string(),
            module_title: module_title.to_string(),
            category,
            completion_status: CompletionStatus::NotStarted,
            progress_percentage: 0,
            time_spent_minutes: 0,
            last_accessed: None,
            notes: String::new(),
        }
    }

    /// A record created by the "start module" action: `in_progress` from
    /// the first interaction, with `last_accessed` already set.
    pub fn started(
        module_id: &str,
        module_title: &str,
        category: Category,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            completion_status: CompletionStatus::InProgress,
            last_accessed: Some(now),
            ..Self::new(module_id, module_title, category)
        }
    }

    /// Merges a patch into this record. Only fields present in the patch
    /// overwrite; `last_accessed` is always refreshed.
    pub fn apply(&mut self, patch: &ProgressPatch, now: DateTime<Utc>) {
        if let Some(percentage) = patch.progress_percentage {
            self.progress_percentage = percentage;
        }
        if let Some(status) = patch.completion_status {
            self.completion_status = status;
        }
        if let Some(minutes) = patch.time_spent_minutes {
            self.time_spent_minutes = minutes;
        }
        if let Some(ref notes) = patch.notes {
            self.notes = notes.clone();
        }
        self.last_accessed = Some(now);
    }

    /// Marks the module completed: status and percentage move together so
    /// the completed ⇔ 100% invariant holds after this call.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.completion_status = CompletionStatus::Completed;
        self.progress_percentage = 100;
        self.last_accessed = Some(now);
    }

    /// Adds study time on top of what is already logged.
    pub fn add_time(&mut self, minutes: u64, now: DateTime<Utc>) {
        self.time_spent_minutes = self.time_spent_minutes.saturating_add(minutes);
        self.last_accessed = Some(now);
    }
}

/// Partial update for a [`ProgressRecord`]. Absent fields leave the record
/// untouched; see [`ProgressRecord::apply`] for the merge semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<CompletionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_minutes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
