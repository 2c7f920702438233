//! Configuration schema definitions for Gangplank.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format (`.gangplank/config.yml`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GangplankConfig {
    /// Application name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Service under the platform service manager
    pub service: ServiceConfig,

    /// Source-to-destination sync settings
    pub sync: SyncConfig,

    /// Global settings
    pub settings: Settings,
}

/// Service-manager settings for the deployed service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service name as known to the service manager.
    pub name: String,

    /// Stop command template; `${service}` expands to the service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_command: Option<String>,

    /// Start command template; `${service}` expands to the service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
}

impl ServiceConfig {
    /// Effective stop command template (configured or platform default).
    pub fn stop_command_template(&self) -> &str {
        self.stop_command
            .as_deref()
            .unwrap_or(default_stop_command())
    }

    /// Effective start command template (configured or platform default).
    pub fn start_command_template(&self) -> &str {
        self.start_command
            .as_deref()
            .unwrap_or(default_start_command())
    }
}

fn default_stop_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "sc.exe stop ${service}"
    } else {
        "systemctl stop ${service}"
    }
}

fn default_start_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "sc.exe start ${service}"
    } else {
        "systemctl start ${service}"
    }
}

/// Source and destination for the file sync step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Source directory (relative paths resolve against the project root).
    pub source: PathBuf,

    /// Deployment directory the source tree is mirrored into.
    pub dest: PathBuf,

    /// Exclusion file: plain text, one gitignore-style pattern per line.
    pub exclude_file: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            dest: PathBuf::new(),
            exclude_file: PathBuf::from(".gangplank/exclude.txt"),
        }
    }
}

/// Global settings that apply to all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, quiet, silent
    #[serde(default = "default_output")]
    pub default_output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_output: default_output(),
        }
    }
}

fn default_output() -> OutputMode {
    OutputMode::Normal
}

/// Output verbosity setting from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

/// Validate a loaded configuration.
pub fn validate(config: &GangplankConfig) -> crate::error::Result<()> {
    if config.service.name.trim().is_empty() {
        return Err(crate::error::GangplankError::ConfigValidationError {
            message: "service.name must be set".to_string(),
        });
    }

    if config.sync.dest.as_os_str().is_empty() {
        return Err(crate::error::GangplankError::ConfigValidationError {
            message: "sync.dest must be set".to_string(),
        });
    }

    if config.sync.source == config.sync.dest {
        return Err(crate::error::GangplankError::ConfigValidationError {
            message: "sync.source and sync.dest must differ".to_string(),
        });
    }

    Ok(())
}
