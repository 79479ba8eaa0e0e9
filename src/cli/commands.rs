//! CLI command implementations
//!
//! The config file is optional: a missing file yields the defaults, and
//! any present fields override them individually.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{AddressStore, Database};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./addresses.db")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load from a JSON file, or fall back to defaults if it is absent.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Create the database file and apply migrations, then exit.
fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let database = Database::open(&config.database_path).await?;
        database.close().await;
        Ok::<(), super::CliError>(())
    })?;

    println!("database ready at {}", config.database_path.display());
    Ok(())
}

/// Boot the store and serve HTTP until interrupted.
fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = Config::load(config_path)?;
    if let Some(port) = port_override {
        config.http.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let database = Database::open(&config.database_path).await?;
        let store = AddressStore::new(&database);

        let server = HttpServer::with_config(store, config.http);
        server.start().await?;

        database.close().await;
        Ok::<(), super::CliError>(())
    })
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
