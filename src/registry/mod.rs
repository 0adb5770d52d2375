//! # App Registry Module
//!
//! The core contract of the service: looking up, filtering, partially
//! updating, and deleting app entries, with a fixed allow-list on updates
//! and a typed outcome for every failure. Transport-free; the HTTP layer
//! sits entirely on top.

pub mod errors;
pub mod model;
pub mod service;

pub use errors::{RegistryError, RegistryResult};
pub use model::{AppDetails, AppEntry, AppPatch, AppUpdate, SearchCriteria};
pub use service::AppRegistry;
