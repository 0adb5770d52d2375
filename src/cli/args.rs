//! CLI argument definitions using clap
//!
//! Commands:
//! - appdex init --config <path>
//! - appdex serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// appdex - a strict registry service for app records
#[derive(Parser, Debug)]
#[command(name = "appdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the registry data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./appdex.json")]
        config: PathBuf,
    },

    /// Serve the registry over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./appdex.json")]
        config: PathBuf,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
