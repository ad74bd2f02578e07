//! # Learning Progress Core
//!
//! An embeddable learning-progress tracker designed for FFI (Foreign
//! Function Interface) integration with Flutter and other cross-platform
//! client UIs. The crate bundles a static module catalog, a local progress
//! store backed by redb (a pure-Rust embedded database), and pure
//! evaluators for dashboard statistics and achievement badges.
//!
//! ## Features
//!
//! - **Static catalog**: 24 system-design learning modules and 4 curated
//!   learning paths, fixed at build time
//! - **Local-first storage**: the whole progress collection persists as a
//!   single JSON blob in one redb file; no server, no accounts
//! - **Corruption-safe loads**: unreadable stored data degrades to an
//!   empty collection instead of failing the client
//! - **Pure evaluators**: statistics and achievement predicates are
//!   side-effect-free functions over a collection snapshot
//! - **Safe error handling**: no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::ffi::CString;
//! use learning_progress_core::{create_store, start_module, get_learning_stats};
//!
//! // Open (or create) the local progress database
//! let name = CString::new("learning_hub").unwrap();
//! let store = create_store(name.as_ptr());
//!
//! // Start a module and read the dashboard counters
//! let module_id = CString::new("scalability-basics").unwrap();
//! let record = start_module(store, module_id.as_ptr());
//! let stats = get_learning_stats(store);
//! ```
//!
//! ## FFI Functions
//!
//! This library exposes C-compatible functions for cross-language
//! integration:
//!
//! - [`create_store`] / [`close_store`] - store lifecycle
//! - [`list_modules`] / [`list_paths`] - static catalog data
//! - [`load_progress`] / [`get_progress`] - read progress records
//! - [`start_module`] - create a record for a first interaction
//! - [`update_progress`] - merge a partial update into a record
//! - [`mark_module_completed`] - complete a module (status + 100%)
//! - [`add_time_spent`] - accumulate study time
//! - [`get_learning_stats`] / [`get_achievements`] - derived views
//! - [`clear_progress`] - maintenance: drop every record

pub mod catalog;
pub mod error;
pub mod progress_model;
pub mod progress_store;
pub mod stats;
pub mod storage;
mod app_response;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use chrono::Utc;
use log::{info, warn};
use serde::Serialize;

use crate::app_response::AppResponse;
use crate::error::StoreError;
use crate::progress_model::ProgressPatch;
use crate::progress_store::ProgressStore;
use crate::storage::RedbStorage;

/// Creates a new progress store backed by a local database file.
///
/// The database is created (or reopened) as `<name>.redb` next to the
/// process working directory; pass an absolute path to control placement.
///
/// # Parameters
///
/// * `name` - A null-terminated C string with the database name
///
/// # Returns
///
/// Returns a pointer to the [`ProgressStore`] instance on success, or a
/// null pointer on failure. The caller owns the pointer and must release
/// it with [`close_store`].
///
/// # Safety
///
/// The input must be a valid null-terminated UTF-8 string.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use learning_progress_core::create_store;
///
/// let name = CString::new("learning_hub").unwrap();
/// let store = create_store(name.as_ptr());
///
/// if !store.is_null() {
///     // Store opened successfully
/// }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_store(name: *const c_char) -> *mut ProgressStore {
    if name.is_null() {
        warn!("Null name pointer passed to create_store");
        return std::ptr::null_mut();
    }

    let name_str = match unsafe { CStr::from_ptr(name).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in name parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    let db_path = format!("{name_str}.redb");
    info!("Attempting to create/open progress database at: {db_path}");

    match RedbStorage::open(&db_path) {
        Ok(storage) => {
            info!("✅ Progress store initialized successfully");
            Box::into_raw(Box::new(ProgressStore::new(Box::new(storage))))
        }
        Err(e) => {
            warn!("❌ Failed to initialize progress store: {e}");
            warn!("Attempted path: {db_path}");
            std::ptr::null_mut()
        }
    }
}

/// Releases a store created with [`create_store`].
///
/// # Safety
///
/// The pointer must come from [`create_store`] and must not be used after
/// this call.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_store(store: *mut ProgressStore) -> *const c_char {
    if store.is_null() {
        let error = AppResponse::BadRequest("Null store pointer passed to close_store".to_string());
        return response_to_c_string(&error);
    }

    drop(unsafe { Box::from_raw(store) });

    let success = AppResponse::success("Store closed successfully");
    response_to_c_string(&success)
}

/// Returns the full module catalog as a JSON array.
///
/// Static data; no store handle is needed.
#[no_mangle]
pub extern "C" fn list_modules() -> *const c_char {
    json_response(Ok(catalog::modules()))
}

/// Returns the learning paths as a JSON array, easiest first.
#[no_mangle]
pub extern "C" fn list_paths() -> *const c_char {
    json_response(Ok(catalog::paths()))
}

/// Returns every progress record as a JSON array.
///
/// A missing or unreadable stored blob yields an empty array; load never
/// fails the caller.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn load_progress(store: *mut ProgressStore) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    json_response(Ok(store.load()))
}

/// Returns the progress record for one module, or `NotFound` if the
/// module has never been touched.
///
/// # Parameters
///
/// * `store` - Pointer to the store instance
/// * `module_id` - Null-terminated C string with the module id
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_progress(
    store: *mut ProgressStore,
    module_id: *const c_char,
) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id = match c_ptr_to_string(module_id, "module_id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match store.record(&id) {
        Some(record) => json_response(Ok(record)),
        None => {
            let error = AppResponse::NotFound(format!("No progress record for module: {id}"));
            response_to_c_string(&error)
        }
    }
}

/// Starts a module: creates its progress record as `in_progress` with the
/// title and category resolved from the catalog.
///
/// Starting an already-started module is harmless: the existing record is
/// returned unchanged. An id with no catalog entry yields `NotFound`.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use learning_progress_core::{create_store, start_module};
///
/// let name = CString::new("learning_hub").unwrap();
/// let store = create_store(name.as_ptr());
///
/// let module_id = CString::new("caching-strategies").unwrap();
/// let result = start_module(store, module_id.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn start_module(
    store: *mut ProgressStore,
    module_id: *const c_char,
) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id = match c_ptr_to_string(module_id, "module_id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    json_response(store.start(&id))
}

/// Merges a partial update into an existing progress record.
///
/// The patch is a JSON object with any subset of `progress_percentage`,
/// `completion_status`, `time_spent_minutes` and `notes`; absent fields
/// leave the record untouched. `last_accessed` is refreshed on every
/// update. Setting `progress_percentage` to 100 does not flip the status;
/// use [`mark_module_completed`] for that.
///
/// # Parameters
///
/// * `store` - Pointer to the store instance
/// * `module_id` - Null-terminated C string with the module id
/// * `patch_json` - Null-terminated C string with the patch object
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use learning_progress_core::{create_store, update_progress};
///
/// let name = CString::new("learning_hub").unwrap();
/// let store = create_store(name.as_ptr());
///
/// let module_id = CString::new("caching-strategies").unwrap();
/// let patch = CString::new(r#"{"progress_percentage":60,"notes":"eviction policies"}"#).unwrap();
/// let result = update_progress(store, module_id.as_ptr(), patch.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_progress(
    store: *mut ProgressStore,
    module_id: *const c_char,
    patch_json: *const c_char,
) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id = match c_ptr_to_string(module_id, "module_id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    let patch_str = match c_ptr_to_string(patch_json, "patch") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let patch: ProgressPatch = match serde_json::from_str(&patch_str) {
        Ok(p) => p,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid patch JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    json_response(store.update(&id, &patch))
}

/// Marks a module completed: status `completed` and percentage 100 in one
/// step, regardless of prior progress. Idempotent apart from
/// `last_accessed`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn mark_module_completed(
    store: *mut ProgressStore,
    module_id: *const c_char,
) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id = match c_ptr_to_string(module_id, "module_id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    json_response(store.mark_completed(&id))
}

/// Adds study minutes to a module's record. Negative values are rejected
/// with a validation error; time only ever accumulates.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn add_time_spent(
    store: *mut ProgressStore,
    module_id: *const c_char,
    minutes: i64,
) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id = match c_ptr_to_string(module_id, "module_id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    json_response(store.add_time(&id, minutes))
}

/// Returns the dashboard counters (totals, completions, time spent,
/// overall percentage) as a JSON object.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_learning_stats(store: *mut ProgressStore) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let records = store.load();
    json_response(Ok(stats::learning_stats(&records)))
}

/// Returns every achievement with its unlock state as a JSON array,
/// evaluated against the current wall clock.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_achievements(store: *mut ProgressStore) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let records = store.load();
    json_response(Ok(stats::achievement_report(&records, Utc::now())))
}

/// Drops every progress record. Maintenance operation; the catalog and the
/// store itself stay usable afterwards.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn clear_progress(store: *mut ProgressStore) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    match store.clear() {
        Ok(count) => {
            let success = AppResponse::success(format!("Cleared {count} progress records"));
            response_to_c_string(&success)
        }
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Serializes an operation result into an [`AppResponse`] C string:
/// `Ok` wraps the value's JSON, errors map onto their envelope variant.
fn json_response<T: Serialize>(result: Result<T, StoreError>) -> *const c_char {
    let response = match result {
        Ok(value) => match serde_json::to_string(&value) {
            Ok(json) => AppResponse::Ok(json),
            Err(e) => AppResponse::SerializationError(format!("Failed to serialize result: {e}")),
        },
        Err(e) => AppResponse::from(e),
    };
    response_to_c_string(&response)
}

/// Converts an [`AppResponse`] to a C-compatible string.
///
/// The returned string is owned by the caller, who is responsible for
/// freeing it. Returns a null pointer if serialization or C-string
/// creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust `String`, handling null pointers
/// and invalid UTF-8.
///
/// On failure returns a ready-to-return error response pointer so callers
/// can bail out with `?`-like brevity.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
