//! # HTTP Transport
//!
//! The transport adapter over the app registry. Handlers translate HTTP
//! verbs, paths, query strings, and bodies into registry operations, and
//! typed failures back into status codes and a uniform JSON envelope:
//! `{success, data?, count?, criteria?, message?, error?}`.
//!
//! Surface:
//!
//! - `GET  /health`                 - liveness probe
//! - `GET  /api/apps`               - list every entry
//! - `GET  /api/apps/search`        - criteria search (query string)
//! - `GET  /api/apps/:appName`      - fetch one entry
//! - `PUT  /api/apps/:appName`      - partial update (appOwner, isValid)
//! - `DELETE /api/apps/:appName`    - delete, returning the last snapshot

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use routes::AppState;
pub use server::HttpServer;
