//! # Persistence Collaborators
//!
//! The registry never talks to a concrete store; it talks to [`AppStore`],
//! injected once at boot. Two implementations ship here:
//!
//! - [`MemoryStore`]: lock-guarded map, deterministic order, test fake
//! - [`JsonFileStore`]: the production store, one JSON array on disk

pub mod backend;
pub mod errors;
pub mod file;
pub mod memory;

pub use backend::AppStore;
pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
