//! # JSON File Store
//!
//! The production collaborator: a single JSON document holding an array of
//! entries. The whole registry is small enough that every mutation rewrites
//! the file; the write goes to a sibling temp file first and is renamed into
//! place, and the in-memory copy commits only after the write succeeded, so
//! a failed flush never leaves a half-applied registry.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::registry::model::{AppEntry, AppUpdate, SearchCriteria};

use super::backend::AppStore;
use super::errors::{StoreError, StoreResult};

/// File-backed app store.
///
/// `get_all` preserves the order of the array on disk. Duplicate names and
/// malformed documents are rejected at load time, so a constructed store
/// always satisfies the uniqueness invariant.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<Vec<AppEntry>>,
}

impl JsonFileStore {
    /// Load a registry from `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = load_entries(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Write an empty registry to `path`, creating parent directories.
    pub fn initialize(path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }
        write_entries(path, &[])
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn position(entries: &[AppEntry], name: &str) -> Option<usize> {
        entries.iter().position(|entry| entry.app_name == name)
    }
}

impl AppStore for JsonFileStore {
    fn get_all(&self) -> StoreResult<Vec<AppEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.clone())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<AppEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.iter().find(|e| e.app_name == name).cloned())
    }

    fn search(&self, criteria: &SearchCriteria) -> StoreResult<Vec<AppEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .filter(|entry| criteria.matches(entry))
            .cloned()
            .collect())
    }

    fn update(&self, name: &str, fields: &AppUpdate) -> StoreResult<AppEntry> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let index = Self::position(&entries, name).ok_or(StoreError::NotFound)?;

        let mut next = entries.clone();
        next[index].app_data.apply(fields);
        let updated = next[index].clone();

        write_entries(&self.path, &next)?;
        *entries = next;
        Ok(updated)
    }

    fn delete(&self, name: &str) -> StoreResult<AppEntry> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let index = Self::position(&entries, name).ok_or(StoreError::NotFound)?;

        let mut next = entries.clone();
        let removed = next.remove(index);

        write_entries(&self.path, &next)?;
        *entries = next;
        Ok(removed)
    }
}

fn load_entries(path: &Path) -> StoreResult<Vec<AppEntry>> {
    let raw = fs::read(path).map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;

    let entries: Vec<AppEntry> = serde_json::from_slice(&raw)
        .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.app_name.as_str()) {
            return Err(StoreError::Corrupt(format!(
                "{}: duplicate appName: {}",
                path.display(),
                entry.app_name
            )));
        }
    }

    Ok(entries)
}

fn write_entries(path: &Path, entries: &[AppEntry]) -> StoreResult<()> {
    let mut body =
        serde_json::to_vec_pretty(entries).map_err(|e| StoreError::Io(e.to_string()))?;
    body.push(b'\n');

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &body).map_err(|e| StoreError::Io(format!("{}: {e}", tmp.display())))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
    Ok(())
}
