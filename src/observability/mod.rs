//! Observability for appdex
//!
//! Structured JSON logging only. Logging is a side channel: it never
//! participates in an operation's outcome, and the registry core never logs
//! at all. Only the transport layer and bootstrap do.

mod logger;

pub use logger::{Logger, Severity};
