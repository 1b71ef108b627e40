//! Error types for Expanded Task Text

use std::path::PathBuf;

use thiserror::Error;

/// The error type for enrichment operations.
///
/// Every variant here is fatal for the enrichment pass. Recoverable problems
/// (missing locale strings and the like) are reported as
/// [`Diagnostic`](crate::enrich::Diagnostic) values instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Reference Data Errors ====================
    /// A bundled reference file does not exist.
    #[error("required reference file not found: {path}")]
    ReferenceFileMissing {
        /// The expected path to the file.
        path: PathBuf,
    },

    /// A bundled reference file exists but could not be deserialized.
    #[error("malformed reference file {path}: {source}")]
    ReferenceFileMalformed {
        /// The path to the offending file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The configuration file deserialized to nothing.
    #[error("attempted to read {path}, got null! Ensure the file exists and is valid")]
    ConfigMissing {
        /// The path to the configuration file.
        path: PathBuf,
    },

    // ==================== Generated Data Errors ====================
    /// The description cache exists but could not be deserialized.
    #[error("malformed description cache {path}: {source}. Delete it to rebuild")]
    CacheMalformed {
        /// The path to the cache file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    // ==================== Database Errors ====================
    /// A server database file exists but could not be deserialized.
    #[error("malformed database file {path}: {source}")]
    DatabaseFileMalformed {
        /// The path to the offending file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    // ==================== Locale Errors ====================
    /// A locale table could not be loaded from its source.
    #[error("failed to load locale '{language}': {message}")]
    LocaleLoad {
        /// The language code of the table.
        language: String,
        /// Description of the failure.
        message: String,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// A specialized Result type for enrichment operations.
pub type Result<T> = std::result::Result<T, Error>;
