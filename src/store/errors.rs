//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures a persistence collaborator can report.
///
/// `NotFound` is the one variant with contract meaning: `update` and
/// `delete` raise it for an absent name and the registry classifies it as a
/// not-found outcome. Everything else is a store fault whose message is
/// surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entry with the requested name.
    #[error("App not found")]
    NotFound,

    /// Reading or writing the underlying medium failed.
    #[error("registry data I/O failure: {0}")]
    Io(String),

    /// The underlying data is present but not a valid registry.
    #[error("registry data is corrupt: {0}")]
    Corrupt(String),

    /// A store lock was poisoned by a panicking writer.
    #[error("registry store lock poisoned")]
    LockPoisoned,
}
