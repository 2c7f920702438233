//! Deploy command implementation.
//!
//! The `gangplank deploy` command runs the full sequence: stop the service,
//! mirror the source tree into the deployment directory, start the service.

use crate::cli::args::DeployArgs;
use crate::config::{validate, ExclusionList, GangplankConfig};
use crate::error::{GangplankError, Result};
use crate::runner::{
    DeploySequencer, RunProgress, RunResult, StartServiceStep, StepAction, StepOutcome,
    StopServiceStep, SyncFilesStep,
};
use crate::service::ServiceManager;
use crate::sync::{FileAction, LocalSync};
use crate::ui::{format_duration, GangplankTheme, Output, OutputMode, ProgressSpinner};

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The deploy command implementation.
pub struct DeployCommand {
    source: ConfigSource,
    args: DeployArgs,
}

impl DeployCommand {
    /// Create a new deploy command.
    pub fn new(source: ConfigSource, args: DeployArgs) -> Self {
        Self { source, args }
    }

    fn print_dry_run(&self, config: &GangplankConfig, output: &Output) -> Result<()> {
        let theme = GangplankTheme::detect();
        let exclusions = self.load_exclusions(config)?;
        let source_dir = self.source.resolve(&config.sync.source);
        let dest_dir = self.source.resolve(&config.sync.dest);

        let plan = crate::sync::plan(&source_dir, &dest_dir, &exclusions)?;

        output.println("Dry run - the service will not be touched");
        output.println(&format!(
            "Would copy {} files ({} new, {} changed), {} unchanged, {} excluded",
            plan.to_copy().count(),
            plan.count(FileAction::Create),
            plan.count(FileAction::Overwrite),
            plan.count(FileAction::Unchanged),
            plan.excluded.len(),
        ));

        for file in plan.to_copy() {
            let marker = match file.action {
                FileAction::Create => "+",
                FileAction::Overwrite => "~",
                FileAction::Unchanged => "=",
            };
            output.detail(&format!(
                "  {} {}",
                theme.dim.apply_to(marker),
                file.relative.display()
            ));
        }

        Ok(())
    }

    fn load_exclusions(&self, config: &GangplankConfig) -> Result<ExclusionList> {
        let path = self.source.resolve(&config.sync.exclude_file);
        let exclusions = ExclusionList::load(&path)?;
        tracing::debug!(
            path = %path.display(),
            patterns = exclusions.pattern_count(),
            "loaded exclusion list"
        );
        Ok(exclusions)
    }

    fn run_sequence(&self, config: &GangplankConfig, output: &Output) -> Result<RunResult> {
        let theme = GangplankTheme::detect();
        let exclusions = self.load_exclusions(config)?;
        let source_dir = self.source.resolve(&config.sync.source);
        let dest_dir = self.source.resolve(&config.sync.dest);

        let manager = ServiceManager::from_config(&config.service);
        let syncer = LocalSync::new();

        let steps: Vec<Box<dyn StepAction + '_>> = vec![
            Box::new(StopServiceStep::new(&manager)),
            Box::new(SyncFilesStep::new(
                &syncer,
                source_dir,
                dest_dir,
                &exclusions,
            )),
            Box::new(StartServiceStep::new(&manager)),
        ];

        let use_spinner = output.mode().shows_spinners()
            && console::Term::stderr().is_term()
            && !crate::shell::is_ci();

        let mut spinner: Option<ProgressSpinner> = None;
        let result = DeploySequencer::new(steps).run_with_progress(|progress| match progress {
            RunProgress::StepStarting {
                title,
                index,
                total,
                ..
            } => {
                let msg = format!("{} {}...", theme.format_counter(index, total), title);
                if use_spinner {
                    spinner = Some(ProgressSpinner::new(&msg));
                } else {
                    spinner = None;
                    output.println(&msg);
                }
            }
            RunProgress::StepFinished { record } => {
                let line = record.detail_line();
                match (spinner.take(), &record.outcome) {
                    (Some(s), StepOutcome::Completed { .. }) => s.finish_success(&line),
                    (Some(s), StepOutcome::Warned { .. }) => s.finish_warning(&line),
                    (Some(s), StepOutcome::Failed { .. }) => s.finish_error(&line),
                    (None, _) => output.println(&record.summary_line()),
                }
            }
        });

        Ok(result)
    }

    fn print_summary(&self, config: &GangplankConfig, result: &RunResult, output: &Output) {
        let theme = GangplankTheme::detect();

        for name in &result.skipped {
            output.println(&format!(
                "{} {}",
                theme.dim.apply_to("○"),
                theme.dim.apply_to(format!("{} (not attempted)", name))
            ));
        }

        match &result.failed {
            None => {
                output.println(&theme.format_success(&format!(
                    "Deploy complete in {}",
                    format_duration(result.duration)
                )));
            }
            Some(failed) => {
                output.error(&theme.format_error(&format!(
                    "Deploy failed at step '{}': {}",
                    failed.name, failed.error
                )));
                // A halt after a successful stop leaves the service down.
                if failed.name != "stop" {
                    output.error(&theme.format_warning(&format!(
                        "Service '{}' was left stopped; start it manually once the issue is fixed",
                        config.service.name
                    )));
                }
            }
        }
    }

    fn print_json(&self, result: &RunResult) {
        let status = if result.is_success() {
            "success"
        } else {
            "failed"
        };
        let summary = serde_json::json!({
            "event": "deploy",
            "status": status,
            "started_at": result.started_at.to_rfc3339(),
            "duration_ms": result.duration.as_millis() as u64,
            "completed": result.completed,
            "skipped": result.skipped,
            "failed_step": result.failed.as_ref().map(|f| f.name.clone()),
            "error": result.failed.as_ref().map(|f| f.error.clone()),
            "warnings": result.warnings,
        });
        println!("{}", summary);
    }
}

impl Command for DeployCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let theme = GangplankTheme::detect();

        // Load configuration
        let config = match self.source.load() {
            Ok(c) => c,
            Err(GangplankError::ConfigNotFound { .. }) => {
                output.error("No configuration found. Run 'gangplank init' first.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        validate(&config)?;

        let effective = super::dispatcher::effective_output(&config, output);
        let output = &effective;

        let app_name = config
            .app_name
            .as_deref()
            .unwrap_or(config.service.name.as_str());
        if !self.args.json {
            output.println(&theme.format_header(&format!("Deploying {}", app_name)));
        }

        if self.args.dry_run {
            self.print_dry_run(&config, output)?;
            return Ok(CommandResult::success());
        }

        // JSON mode owns stdout: run the sequence silently and emit only
        // the summary object.
        let silent;
        let run_output = if self.args.json {
            silent = Output::new(OutputMode::Silent);
            &silent
        } else {
            output
        };

        let result = self.run_sequence(&config, run_output)?;

        if self.args.json {
            self.print_json(&result);
        } else {
            self.print_summary(&config, &result, output);
            for warning in &result.warnings {
                output.println(&theme.format_warning(warning));
            }
        }

        if result.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project_with_config(stop: &str, start: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("deployed");
        fs::create_dir_all(&dest).unwrap();
        write(temp.path(), "site/app.py", "print('hi')");
        write(temp.path(), "site/uploads/data.pdf", "binary");
        write(
            temp.path(),
            ".gangplank/exclude.txt",
            "uploads/\n*.log\n",
        );
        write(
            temp.path(),
            ".gangplank/config.yml",
            &format!(
                "service:\n  name: fszn-web\n  stop_command: \"{}\"\n  start_command: \"{}\"\nsync:\n  source: site\n  dest: {}\n",
                stop,
                start,
                dest.display()
            ),
        );
        (temp, dest)
    }

    fn quiet_output() -> Output {
        Output::new(crate::ui::OutputMode::Silent)
    }

    #[test]
    #[cfg(unix)]
    fn deploy_copies_files_and_exits_zero() {
        let (temp, dest) = project_with_config("true", "true");
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = DeployCommand::new(source, DeployArgs::default());

        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(dest.join("app.py").exists());
        // Excluded path never copied
        assert!(!dest.join("uploads").exists());
    }

    #[test]
    #[cfg(unix)]
    fn deploy_failed_stop_copies_nothing() {
        let (temp, dest) = project_with_config("exit 1", "true");
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = DeployCommand::new(source, DeployArgs::default());

        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(!dest.join("app.py").exists());
    }

    #[test]
    #[cfg(unix)]
    fn deploy_failed_start_still_syncs() {
        let (temp, dest) = project_with_config("true", "exit 1");
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = DeployCommand::new(source, DeployArgs::default());

        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(!result.success);
        assert!(dest.join("app.py").exists());
    }

    #[test]
    fn deploy_without_config_exits_two() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = DeployCommand::new(source, DeployArgs::default());

        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dry_run_touches_nothing() {
        // Service commands would fail loudly if invoked; dry-run must not run them.
        let (temp, dest) = project_with_config("exit 99", "exit 99");
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = DeployCommand::new(
            source,
            DeployArgs {
                dry_run: true,
                json: false,
            },
        );

        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(result.success);
        assert!(!dest.join("app.py").exists());
    }
}
