//! CLI module for appdex
//!
//! Provides the command-line interface:
//! - init: create the registry data file
//! - serve: boot the store and serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
