//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout hanactl.
//! All errors are structured and map to specific error codes for JSON output.
//!
//! # Error Categories
//! - `InvalidIdentity`: Instance identity fields are missing or not text
//! - `CommandFailed`: An administrative command exited with a non-zero return code
//! - `OperationFailed`: An installer operation failed (fixed tool phrase)
//! - `VersionNotFound`: The version query produced no recognizable version line
//! - `Environment`: The process could not be spawned at all
//! - `InvalidPattern`: A probe pattern could not be compiled
//! - `ConfFile`: A configuration template could not be read or rewritten
//! - `ConfigError`: Instance registry errors

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for hanactl operations
#[derive(Error, Debug)]
pub enum HanaError {
    /// Instance identity could not be constructed
    #[error("Invalid instance identity: {0}")]
    InvalidIdentity(String),

    /// Administrative command returned a non-zero exit code
    ///
    /// `command` is the command line as it was executed, which may differ from
    /// the requested one (e.g. after `su` wrapping).
    #[error("Error running hana command: {command}")]
    CommandFailed { command: String },

    /// Installer-level operation failed
    #[error("{0}")]
    OperationFailed(String),

    /// Version line missing from the version query output
    #[error("Version pattern not found in command output")]
    VersionNotFound,

    /// Process could not be spawned (missing executable, permission denied, ...)
    #[error("Environment error: {0}")]
    Environment(#[from] std::io::Error),

    /// Probe pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration template could not be read or written
    #[error("Configuration file error ({}): {source}", .path.display())]
    ConfFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Instance registry error (file not found, invalid JSON, etc.)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl HanaError {
    /// Convert error to error code string for JSON output
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIdentity(_) => "INVALID_IDENTITY",
            Self::CommandFailed { .. } => "COMMAND_FAILED",
            Self::OperationFailed(_) => "OPERATION_FAILED",
            Self::VersionNotFound => "VERSION_NOT_FOUND",
            Self::Environment(_) => "ENVIRONMENT_ERROR",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::ConfFile { .. } => "CONF_FILE_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Get human-readable error message
    ///
    /// Never includes the instance password.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create an invalid identity error
    pub fn invalid_identity(message: impl Into<String>) -> Self {
        Self::InvalidIdentity(message.into())
    }

    /// Create a command failed error from the executed command line
    pub fn command_failed(command: impl Into<String>) -> Self {
        Self::CommandFailed { command: command.into() }
    }

    /// Create an operation failed error
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed(message.into())
    }

    /// Create a configuration template error
    pub fn conf_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfFile { path: path.into(), source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

/// Result type alias for hanactl operations
pub type Result<T> = std::result::Result<T, HanaError>;
