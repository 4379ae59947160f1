//! Error types for the contact store.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Validation failures are not errors: they are normal
//! results returned by the `validation` module and the domain value
//! objects. `StorageError` covers genuine I/O and decoding failure only,
//! and each raised instance is expected to be caught exactly once, at the
//! UI boundary, and surfaced as a user-visible notification.

use thiserror::Error;

/// Errors raised by the contact store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or decoding the persisted collection failed
    #[error("could not load contacts: {0}")]
    ReadFailure(String),

    /// Persisting the collection failed
    #[error("could not save contacts: {0}")]
    WriteFailure(String),

    /// Import payload is not parseable as JSON
    #[error("import payload is not valid JSON: {0}")]
    InvalidFormat(String),

    /// Import payload parsed but does not describe a contact collection
    #[error("invalid contact data: {0}")]
    InvalidStructure(String),
}

/// Errors raised by a persistence backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Underlying I/O failure
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Backend state was poisoned or otherwise unusable
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Generic backend error with context
    #[error("backend error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// No usable data directory could be determined
    #[error("Could not determine a data directory: {0}")]
    NoDataDir(String),
}

/// Convenience type alias for Results with StorageError
pub type StoreResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with BackendError
pub type BackendResult<T> = Result<T, BackendError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
