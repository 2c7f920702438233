//! Error types for Gangplank operations.
//!
//! This module defines [`GangplankError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GangplankError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GangplankError::Other`) for unexpected errors
//! - No retries, no partial recovery: the first failing deploy step surfaces
//!   immediately to the operator

use std::path::PathBuf;
use thiserror::Error;

use crate::config::exclusions::ExclusionError;

/// Core error type for Gangplank operations.
#[derive(Debug, Error)]
pub enum GangplankError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The service manager failed to stop the service.
    #[error("Failed to stop service '{service}': {detail}")]
    ServiceStopFailed { service: String, detail: String },

    /// The service manager failed to start the service.
    #[error("Failed to start service '{service}': {detail}")]
    ServiceStartFailed { service: String, detail: String },

    /// The file sync step failed.
    #[error("Sync failed: {detail}")]
    SyncFailed { detail: String },

    /// The exclusion file could not be loaded.
    #[error(transparent)]
    Exclusions(#[from] ExclusionError),

    /// Shell command failed to launch.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Gangplank operations.
pub type Result<T> = std::result::Result<T, GangplankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = GangplankError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GangplankError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn service_stop_failed_displays_service_and_detail() {
        let err = GangplankError::ServiceStopFailed {
            service: "fszn-web".into(),
            detail: "unit not loaded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fszn-web"));
        assert!(msg.contains("unit not loaded"));
        assert!(msg.contains("stop"));
    }

    #[test]
    fn service_start_failed_displays_service_and_detail() {
        let err = GangplankError::ServiceStartFailed {
            service: "fszn-web".into(),
            detail: "exit code 5".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fszn-web"));
        assert!(msg.contains("start"));
    }

    #[test]
    fn sync_failed_displays_detail() {
        let err = GangplankError::SyncFailed {
            detail: "disk full".into(),
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = GangplankError::CommandFailed {
            command: "systemctl stop web".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("systemctl stop web"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GangplankError = io_err.into();
        assert!(matches!(err, GangplankError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GangplankError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
