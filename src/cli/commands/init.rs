//! Init command implementation.
//!
//! The `gangplank init` command scaffolds `.gangplank/config.yml` and the
//! default exclusion file for a project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::ui::{GangplankTheme, Output};

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: PathBuf, args: InitArgs) -> Self {
        Self { project_root, args }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn config_path(&self) -> PathBuf {
        self.project_root.join(".gangplank").join("config.yml")
    }

    fn exclude_path(&self) -> PathBuf {
        self.project_root.join(".gangplank").join("exclude.txt")
    }

    fn project_name(&self) -> String {
        self.project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app")
            .to_string()
    }

    fn config_template(&self) -> String {
        let name = self.project_name();
        format!(
            "# Gangplank configuration for {name}\n\
             #\n\
             # `gangplank deploy` stops the service, mirrors `sync.source` into\n\
             # `sync.dest` (skipping patterns in `sync.exclude_file`), and starts\n\
             # the service again.\n\
             \n\
             app_name: {name}\n\
             \n\
             service:\n\
             \x20 name: {name}\n\
             \x20 # stop_command: \"systemctl stop ${{service}}\"\n\
             \x20 # start_command: \"systemctl start ${{service}}\"\n\
             \n\
             sync:\n\
             \x20 source: .\n\
             \x20 dest: /srv/{name}\n\
             \x20 exclude_file: .gangplank/exclude.txt\n"
        )
    }

    fn exclude_template(&self) -> &'static str {
        "# Paths the sync must never copy or overwrite at the deployment target.\n\
         # One gitignore-style pattern per line.\n\
         \n\
         .git/\n\
         .gangplank/\n\
         uploads/\n\
         instance/\n\
         .venv/\n\
         __pycache__/\n\
         *.log\n\
         .env\n"
    }
}

impl Command for InitCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let theme = GangplankTheme::detect();
        let config_path = self.config_path();

        if config_path.exists() && !self.args.force {
            output.error(&format!(
                "Configuration already exists at {} (use --force to overwrite)",
                config_path.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        fs::create_dir_all(self.project_root.join(".gangplank"))?;
        fs::write(&config_path, self.config_template())?;
        output.println(&theme.format_success(&format!("Created {}", config_path.display())));

        let exclude_path = self.exclude_path();
        if !exclude_path.exists() || self.args.force {
            fs::write(&exclude_path, self.exclude_template())?;
            output.println(&theme.format_success(&format!("Created {}", exclude_path.display())));
        }

        output.println("Edit sync.dest and service.name, then run 'gangplank deploy'.");

        Ok(CommandResult::success())
    }
}
