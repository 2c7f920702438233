//! Config command implementation.
//!
//! The `gangplank config` command prints the resolved configuration after
//! layer merging, as YAML (default) or JSON.

use crate::cli::args::ConfigArgs;
use crate::error::{GangplankError, Result};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The config command implementation.
pub struct ConfigCommand {
    source: ConfigSource,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(source: ConfigSource, args: ConfigArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let config = match self.source.load() {
            Ok(c) => c,
            Err(GangplankError::ConfigNotFound { .. }) => {
                output.error("No configuration found. Run 'gangplank init' first.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let rendered =
                serde_json::to_string_pretty(&config).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", rendered);
        } else {
            let rendered = serde_yaml::to_string(&config).map_err(|e| anyhow::anyhow!(e))?;
            print!("{}", rendered);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn config_without_project_exits_two() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = ConfigCommand::new(source, ConfigArgs::default());

        let output = Output::new(crate::ui::OutputMode::Silent);
        let result = cmd.execute(&output).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn config_prints_resolved_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".gangplank");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "service:\n  name: web\nsync:\n  dest: /srv/web\n",
        )
        .unwrap();

        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = ConfigCommand::new(source, ConfigArgs::default());

        let output = Output::new(crate::ui::OutputMode::Silent);
        let result = cmd.execute(&output).unwrap();
        assert!(result.success);
    }
}
