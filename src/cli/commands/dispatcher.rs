//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config_file, load_merged_config, GangplankConfig};
use crate::error::Result;
use crate::ui::{Output, OutputMode};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing through `output`.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where configuration comes from for this invocation.
///
/// Either the discovered project layers or an explicit `--config` file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    project_root: PathBuf,
    explicit: Option<PathBuf>,
}

impl ConfigSource {
    pub fn new(project_root: PathBuf, explicit: Option<PathBuf>) -> Self {
        Self {
            project_root,
            explicit,
        }
    }

    /// The project root paths resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the configuration for this invocation.
    pub fn load(&self) -> Result<GangplankConfig> {
        match &self.explicit {
            Some(path) => load_config_file(path),
            None => load_merged_config(&self.project_root),
        }
    }

    /// Resolve a config-relative path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Apply the config-level default output mode when no flag overrode it.
///
/// `--verbose` and `--quiet` always win; an unflagged invocation picks up
/// `settings.default_output` from the loaded configuration.
pub(crate) fn effective_output(config: &GangplankConfig, cli_output: &Output) -> Output {
    if cli_output.mode() == OutputMode::Normal {
        Output::new(config.settings.default_output.into())
    } else {
        Output::new(cli_output.mode())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: ConfigSource,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_override: Option<PathBuf>) -> Self {
        Self {
            source: ConfigSource::new(project_root, config_override),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        self.source.project_root()
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Deploy(args)) => {
                let cmd = super::deploy::DeployCommand::new(self.source.clone(), args.clone());
                cmd.execute(output)
            }
            Some(Commands::Plan(args)) => {
                let cmd = super::plan::PlanCommand::new(self.source.clone(), args.clone());
                cmd.execute(output)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.source.clone(), args.clone());
                cmd.execute(output)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(
                    self.source.project_root().to_path_buf(),
                    args.clone(),
                );
                cmd.execute(output)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(output)
            }
            None => {
                // Default to deploy with default args
                let cmd = super::deploy::DeployCommand::new(
                    self.source.clone(),
                    crate::cli::args::DeployArgs::default(),
                );
                cmd.execute(output)
            }
        }
    }
}
