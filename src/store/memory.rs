//! # In-Memory Store
//!
//! The simplest collaborator: a name-keyed map behind a lock. Used as the
//! test fake throughout, and usable as a real store for throwaway serving.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::registry::model::{AppDetails, AppEntry, AppUpdate, SearchCriteria};

use super::backend::AppStore;
use super::errors::{StoreError, StoreResult};

/// In-memory app store.
///
/// Entries iterate in name order, so `get_all` is deterministic. The map key
/// doubles as the uniqueness guarantee: seeding two entries with the same
/// name keeps the later one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, AppDetails>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries.
    pub fn with_entries(entries: Vec<AppEntry>) -> Self {
        let map = entries
            .into_iter()
            .map(|entry| (entry.app_name, entry.app_data))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    fn assemble(name: &str, details: &AppDetails) -> AppEntry {
        AppEntry {
            app_name: name.to_string(),
            app_data: details.clone(),
        }
    }
}

impl AppStore for MemoryStore {
    fn get_all(&self) -> StoreResult<Vec<AppEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .map(|(name, details)| Self::assemble(name, details))
            .collect())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<AppEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries
            .get(name)
            .map(|details| Self::assemble(name, details)))
    }

    fn search(&self, criteria: &SearchCriteria) -> StoreResult<Vec<AppEntry>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|entry| criteria.matches(entry))
            .collect())
    }

    fn update(&self, name: &str, fields: &AppUpdate) -> StoreResult<AppEntry> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let details = entries.get_mut(name).ok_or(StoreError::NotFound)?;
        details.apply(fields);
        let updated = Self::assemble(name, details);
        Ok(updated)
    }

    fn delete(&self, name: &str) -> StoreResult<AppEntry> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let details = entries.remove(name).ok_or(StoreError::NotFound)?;
        Ok(AppEntry {
            app_name: name.to_string(),
            app_data: details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, owner: &str, valid: bool) -> AppEntry {
        AppEntry {
            app_name: name.to_string(),
            app_data: AppDetails {
                app_path: format!("/{name}"),
                app_owner: owner.to_string(),
                is_valid: valid,
            },
        }
    }

    #[test]
    fn test_get_all_is_name_ordered() {
        let store = MemoryStore::with_entries(vec![
            entry("zeta", "ownerOne", true),
            entry("alpha", "ownerTwo", false),
        ]);
        let all = store.get_all().unwrap();
        assert_eq!(all[0].app_name, "alpha");
        assert_eq!(all[1].app_name, "zeta");
    }

    #[test]
    fn test_find_by_name() {
        let store = MemoryStore::with_entries(vec![entry("appOne", "ownerOne", true)]);
        assert_eq!(
            store.find_by_name("appOne").unwrap(),
            Some(entry("appOne", "ownerOne", true))
        );
        assert_eq!(store.find_by_name("nope").unwrap(), None);
    }

    #[test]
    fn test_search_filters_in_store_order() {
        let store = MemoryStore::with_entries(vec![
            entry("b", "shared", true),
            entry("a", "shared", true),
            entry("c", "other", true),
        ]);
        let criteria = SearchCriteria {
            app_owner: Some("shared".to_string()),
            ..Default::default()
        };
        let hits = store.search(&criteria).unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.app_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_update_missing_name_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update("ghost", &AppUpdate::default());
        assert_eq!(result.unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_update_returns_full_snapshot() {
        let store = MemoryStore::with_entries(vec![entry("appOne", "ownerOne", true)]);
        let updated = store
            .update(
                "appOne",
                &AppUpdate {
                    app_owner: Some("newOwner".to_string()),
                    is_valid: Some(false),
                },
            )
            .unwrap();
        assert_eq!(updated.app_data.app_owner, "newOwner");
        assert!(!updated.app_data.is_valid);
        assert_eq!(updated.app_data.app_path, "/appOne");
    }

    #[test]
    fn test_delete_returns_snapshot_then_not_found() {
        let store = MemoryStore::with_entries(vec![entry("appOne", "ownerOne", true)]);
        let deleted = store.delete("appOne").unwrap();
        assert_eq!(deleted, entry("appOne", "ownerOne", true));
        assert_eq!(store.delete("appOne").unwrap_err(), StoreError::NotFound);
    }
}
