//! Error types for item control operations.
//!
//! This module defines [`ItemControlError`], the primary error type used
//! throughout the engine, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Document-level failures (`UnknownItem`, `UnresolvedSkills`,
//!   `DocumentParse`) are reported per document; callers log and continue
//! - Use `anyhow::Error` (via `ItemControlError::Other`) for unexpected errors
//! - Nothing here is fatal to the host process

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for item control operations.
#[derive(Debug, Error)]
pub enum ItemControlError {
    /// The document references a prefab the catalog does not know.
    #[error("Unknown item prefab: {prefab}")]
    UnknownItem { prefab: String },

    /// Strict validation rejected a document with unresolvable skills.
    #[error("Item '{prefab}' references unknown skills: {}", skills.join(", "))]
    UnresolvedSkills { prefab: String, skills: Vec<String> },

    /// Failed to parse a requirement document.
    #[error("Failed to parse document at {path}: {message}")]
    DocumentParse { path: PathBuf, message: String },

    /// Failed to serialize the requirement snapshot.
    #[error("Failed to encode snapshot: {message}")]
    SnapshotEncode { message: String },

    /// Failed to deserialize a received requirement snapshot.
    #[error("Failed to decode snapshot: {message}")]
    SnapshotDecode { message: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// The file watcher could not be started.
    #[error("File watch error: {message}")]
    Watch { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<notify::Error> for ItemControlError {
    fn from(err: notify::Error) -> Self {
        ItemControlError::Watch {
            message: err.to_string(),
        }
    }
}

/// Result type alias for item control operations.
pub type Result<T> = std::result::Result<T, ItemControlError>;
