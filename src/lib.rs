//! appdex - a strict registry service for app records
//!
//! An HTTP JSON API over a file-backed registry of named app entries. The
//! registry owns the read/search/update/delete contract; persistence sits
//! behind the `AppStore` trait; the HTTP layer is a thin translation of
//! verbs and paths into registry calls.

pub mod cli;
pub mod http;
pub mod observability;
pub mod registry;
pub mod store;
