//! # Store Contract
//!
//! The persistence boundary the registry is built against. Implementations
//! own creation and destruction of entries and whatever ordering `get_all`
//! yields; the registry imposes neither.

use crate::registry::model::{AppEntry, AppUpdate, SearchCriteria};

use super::errors::StoreResult;

/// CRUD primitives keyed by the unique `appName`.
///
/// Methods take `&self`: implementations synchronize internally and are
/// shared across request handlers as a single injected dependency.
pub trait AppStore: Send + Sync {
    /// Every entry, in the store's own order.
    fn get_all(&self) -> StoreResult<Vec<AppEntry>>;

    /// The entry with this exact name, or `None`. Absence is a value here,
    /// never an error.
    fn find_by_name(&self, name: &str) -> StoreResult<Option<AppEntry>>;

    /// Entries satisfying the criteria, in `get_all` order.
    fn search(&self, criteria: &SearchCriteria) -> StoreResult<Vec<AppEntry>>;

    /// Overwrite the present fields of the named entry and return the
    /// updated snapshot. Fails with [`StoreError::NotFound`] on absence.
    ///
    /// [`StoreError::NotFound`]: super::StoreError::NotFound
    fn update(&self, name: &str, fields: &AppUpdate) -> StoreResult<AppEntry>;

    /// Remove the named entry and return it as it existed immediately before
    /// removal. Fails with [`StoreError::NotFound`] on absence.
    ///
    /// [`StoreError::NotFound`]: super::StoreError::NotFound
    fn delete(&self, name: &str) -> StoreResult<AppEntry>;
}
