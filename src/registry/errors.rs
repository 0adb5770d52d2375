//! # Registry Errors
//!
//! The three-way outcome taxonomy of the registry contract. Display output
//! is the exact text a caller sees, so the transport layer never rewrites
//! messages, only picks status codes.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// How a registry operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The update patch carried fields outside the allow-list. Every
    /// offending key is named, in the order it appeared in the request.
    /// Nothing was applied.
    #[error("Cannot update fields: {}. Only appOwner and isValid can be updated.", .fields.join(", "))]
    DisallowedFields { fields: Vec<String> },

    /// The operation targeted a name with no entry.
    #[error("App not found")]
    NotFound,

    /// The persistence collaborator failed; its message passes through
    /// untouched.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => RegistryError::NotFound,
            other => RegistryError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disallowed_fields_message_names_every_key() {
        let err = RegistryError::DisallowedFields {
            fields: vec!["appName".to_string(), "appPath".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Cannot update fields: appName, appPath. Only appOwner and isValid can be updated."
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(RegistryError::NotFound.to_string(), "App not found");
    }

    #[test]
    fn test_store_not_found_classifies_as_not_found() {
        assert_eq!(
            RegistryError::from(StoreError::NotFound),
            RegistryError::NotFound
        );
    }

    #[test]
    fn test_store_fault_message_passes_through_verbatim() {
        let err = RegistryError::from(StoreError::Io("Database error".to_string()));
        assert_eq!(
            err,
            RegistryError::Store(StoreError::Io("Database error".to_string()))
        );
        assert_eq!(err.to_string(), "registry data I/O failure: Database error");
    }
}
