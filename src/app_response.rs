use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Serializable result envelope returned across the FFI boundary. `Ok`
/// carries the operation's JSON payload; every other variant carries a
/// human-readable message for the client to surface.
#[derive(Debug, Serialize, Deserialize)]
pub enum AppResponse {
    Ok(String),
    NotFound(String),
    Duplicate(String),
    ValidationError(String),
    BadRequest(String),
    DatabaseError(String),
    SerializationError(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::Duplicate(msg) => write!(f, "Duplicate: {}", msg),
            AppResponse::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppResponse::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<StoreError> for AppResponse {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppResponse::NotFound(msg),
            StoreError::DuplicateRecord(msg) => AppResponse::Duplicate(msg),
            StoreError::InvalidArgument(msg) => AppResponse::ValidationError(msg),
            StoreError::Corrupt(msg) => {
                AppResponse::DatabaseError(format!("stored data is corrupt: {msg}"))
            }
            StoreError::Storage(msg) => AppResponse::DatabaseError(msg),
            StoreError::Serialization(e) => AppResponse::SerializationError(e.to_string()),
        }
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }
}
