//! # App Registry
//!
//! The core of the service: the read/search/update/delete contract over app
//! entries, independent of any transport. The store is injected at
//! construction and is the only collaborator. The registry holds no state of
//! its own and never logs; every failure leaves as a typed outcome.

use crate::store::AppStore;

use super::errors::{RegistryError, RegistryResult};
use super::model::{AppEntry, AppPatch, SearchCriteria};

/// Registry operations over an injected store.
pub struct AppRegistry<S: AppStore> {
    store: S,
}

impl<S: AppStore> AppRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every entry, in whatever order the store yields. Read-only.
    pub fn list_all(&self) -> RegistryResult<Vec<AppEntry>> {
        Ok(self.store.get_all()?)
    }

    /// Entries matching every present criterion. Zero matches is a valid,
    /// successful result, and an empty criteria set returns everything.
    pub fn search(&self, criteria: &SearchCriteria) -> RegistryResult<Vec<AppEntry>> {
        Ok(self.store.search(criteria)?)
    }

    /// The entry with this exact name. `None` is the not-found sentinel and
    /// stays distinguishable from a store failure.
    pub fn find_by_name(&self, name: &str) -> RegistryResult<Option<AppEntry>> {
        Ok(self.store.find_by_name(name)?)
    }

    /// Apply a partial update to the named entry.
    ///
    /// Validation runs before the store is touched: a patch carrying any key
    /// outside `{appOwner, isValid}` fails with every offending key named,
    /// and nothing is applied. A valid patch against an absent name fails
    /// not-found. On success the full updated snapshot comes back; fields
    /// absent from the patch are untouched, and `appName`/`appPath` are
    /// untouchable by construction.
    pub fn update(&self, name: &str, patch: &AppPatch) -> RegistryResult<AppEntry> {
        if !patch.unknown_fields.is_empty() {
            return Err(RegistryError::DisallowedFields {
                fields: patch.unknown_fields.clone(),
            });
        }
        Ok(self.store.update(name, &patch.to_update())?)
    }

    /// Remove the named entry, returning its pre-deletion snapshot. Deleting
    /// the same name again fails not-found; deletion is not idempotent.
    pub fn delete(&self, name: &str) -> RegistryResult<AppEntry> {
        Ok(self.store.delete(name)?)
    }
}
