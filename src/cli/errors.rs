//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero status.

use std::io;

use thiserror::Error;

use crate::ingest::IngestError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, runtime)
    IoError,
    /// Recipe source could not be loaded
    LoadFailed,
    /// Server failed to start or stopped with an error
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CATALOG_CLI_CONFIG_ERROR",
            Self::IoError => "CATALOG_CLI_IO_ERROR",
            Self::LoadFailed => "CATALOG_CLI_LOAD_FAILED",
            Self::BootFailed => "CATALOG_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {}", .code.code(), .message)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Load failed
    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::LoadFailed, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<IngestError> for CliError {
    fn from(e: IngestError) -> Self {
        Self::load_failed(e.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("port must be > 0");
        assert_eq!(err.to_string(), "CATALOG_CLI_CONFIG_ERROR: port must be > 0");
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_ingest_error_maps_to_load_failed() {
        let err = CliError::from(IngestError::UnsupportedShape("number"));
        assert_eq!(err.code(), CliErrorCode::LoadFailed);
    }
}
