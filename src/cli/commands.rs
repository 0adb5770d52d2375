//! CLI command implementations
//!
//! `init` creates the registry data file and exits. `serve` follows a strict
//! boot sequence: load configuration, open the data file, construct the
//! registry and HTTP server, then run the server on a dedicated runtime.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{AppState, HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::{AppStore, JsonFileStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Registry data file (required)
    pub data_file: String,

    /// HTTP server settings (optional, all fields defaulted)
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_file.is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        Ok(())
    }

    /// Get the data file as a Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Create the registry data file
///
/// Writes an empty entry array, creating parent directories as needed.
/// Refuses to touch an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let data_path = config.data_path();

    if data_path.exists() {
        return Err(CliError::already_initialized());
    }

    JsonFileStore::initialize(data_path)
        .map_err(|e| CliError::io_error(format!("Failed to create data file: {}", e)))?;

    let path_text = data_path.display().to_string();
    Logger::info("REGISTRY_INITIALIZED", &[("data_file", path_text.as_str())]);

    Ok(())
}

/// Serve the registry over HTTP
///
/// Boot sequence, any failure is fatal:
/// 1. Configuration load
/// 2. Data file load (rejects missing, malformed, or duplicate-name data)
/// 3. Registry and HTTP server construction
/// 4. Runtime start
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let data_path = config.data_path();

    if !data_path.exists() {
        return Err(CliError::not_initialized());
    }

    let store = JsonFileStore::open(data_path)
        .map_err(|e| CliError::boot_failed(format!("Failed to load registry data: {}", e)))?;

    let entries = store
        .get_all()
        .map_err(|e| CliError::boot_failed(format!("Failed to read registry data: {}", e)))?;
    let count_text = entries.len().to_string();
    let path_text = store.path().display().to_string();
    Logger::info(
        "STORE_LOADED",
        &[
            ("count", count_text.as_str()),
            ("data_file", path_text.as_str()),
        ],
    );

    let http_config = http_config_with_override(&config, port);
    let state = Arc::new(AppState::new(store));
    let server = HttpServer::new(http_config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// The configured HTTP settings, with the CLI port flag taking precedence.
fn http_config_with_override(config: &Config, port: Option<u16>) -> HttpServerConfig {
    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }
    http_config
}
