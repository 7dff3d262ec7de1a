//! CLI command implementations
//!
//! `start` loads the recipe source into memory before binding the HTTP
//! server; no request is served until every record is in the store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::ingest::{self, IngestReport};
use crate::observability::init_tracing;
use crate::query::distinct_cuisines;
use crate::rest_api::CatalogService;
use crate::store::{InMemoryStore, RecipeStore};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recipe source JSON (required)
    pub data_path: PathBuf,

    /// Bind address, CORS and static assets
    #[serde(flatten)]
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

    fn validate(&self) -> CliResult<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(CliError::config_error("data_path must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        Ok(())
    }
}

/// Summary printed by `inspect`
#[derive(Debug, Serialize)]
pub struct InspectSummary {
    #[serde(flatten)]
    pub report: IngestReport,
    pub cuisines: Vec<String>,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config } => start(&config),
        Command::Inspect { data } => inspect(&data),
    }
}

/// Load the source, then serve until stopped
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = Arc::new(InMemoryStore::new());
    ingest::load_file(&config.data_path, &store)?;

    let handler = Arc::new(CatalogService::new(store));
    let server = HttpServer::with_config(config.http, handler);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load a source file and print what it contains
pub fn inspect(data_path: &Path) -> CliResult<()> {
    let summary = summarize(data_path)?;
    write_json(&summary)
}

/// Load `data_path` into a scratch store and summarize it
pub fn summarize(data_path: &Path) -> CliResult<InspectSummary> {
    let store = InMemoryStore::new();
    let report = ingest::load_file(data_path, &store)?;

    let snapshot = store
        .snapshot()
        .map_err(|e| CliError::load_failed(e.to_string()))?;

    Ok(InspectSummary {
        report,
        cuisines: distinct_cuisines(&snapshot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "catalog.json", r#"{"data_path": "recipes.json"}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("recipes.json"));
        assert_eq!(config.http, HttpServerConfig::default());
    }

    #[test]
    fn test_config_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "catalog.json",
            r#"{"data_path": "r.json", "port": 8080, "host": "127.0.0.1", "static_dir": "static"}"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.http.socket_addr(), "127.0.0.1:8080");
        assert_eq!(config.http.static_dir, Some(PathBuf::from("static")));
    }

    #[test]
    fn test_config_rejects_port_zero() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "catalog.json", r#"{"data_path": "r.json", "port": 0}"#);

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_config_requires_data_path() {
        let tmp = TempDir::new().unwrap();
        let missing = write(&tmp, "a.json", r#"{"port": 8080}"#);
        let empty = write(&tmp, "b.json", r#"{"data_path": ""}"#);

        assert_eq!(Config::load(&missing).unwrap_err().code(), CliErrorCode::ConfigError);
        assert_eq!(Config::load(&empty).unwrap_err().code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/no/such/catalog.json")).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_summarize() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "recipes.json",
            r#"{"0": {"cuisine": "Italian"}, "1": {"cuisine": "American"}, "2": {"cuisine": "NaN"}}"#,
        );

        let summary = summarize(&path).unwrap();
        assert_eq!(summary.report.loaded, 3);
        assert_eq!(summary.cuisines, vec!["American", "Italian"]);
    }

    #[test]
    fn test_summarize_bad_source() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "recipes.json", "42");

        let err = summarize(&path).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::LoadFailed);
    }
}
