//! Plan command implementation.
//!
//! The `gangplank plan` command previews the sync step: which files would be
//! created, overwritten, or left alone, and what the exclusion list skips.
//! The service is never touched.

use crate::cli::args::PlanArgs;
use crate::config::{validate, ExclusionList};
use crate::error::{GangplankError, Result};
use crate::sync::FileAction;
use crate::ui::{GangplankTheme, Output};

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The plan command implementation.
pub struct PlanCommand {
    source: ConfigSource,
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(source: ConfigSource, args: PlanArgs) -> Self {
        Self { source, args }
    }
}

impl Command for PlanCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let theme = GangplankTheme::detect();

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

        let exclude_path = self.source.resolve(&config.sync.exclude_file);
        let exclusions = ExclusionList::load(&exclude_path)?;
        let source_dir = self.source.resolve(&config.sync.source);
        let dest_dir = self.source.resolve(&config.sync.dest);

        let plan = crate::sync::plan(&source_dir, &dest_dir, &exclusions)?;

        let created = plan.count(FileAction::Create);
        let overwritten = plan.count(FileAction::Overwrite);
        let unchanged = plan.count(FileAction::Unchanged);

        if self.args.json {
            let summary = serde_json::json!({
                "event": "plan",
                "source": source_dir.display().to_string(),
                "dest": dest_dir.display().to_string(),
                "created": created,
                "overwritten": overwritten,
                "unchanged": unchanged,
                "excluded": plan.excluded.len(),
                "exclusion_patterns": exclusions.pattern_count(),
            });
            println!("{}", summary);
            return Ok(CommandResult::success());
        }

        output.println(&theme.format_header(&format!(
            "Plan: {} -> {}",
            source_dir.display(),
            dest_dir.display()
        )));

        for file in &plan.files {
            let marker = match file.action {
                FileAction::Create => "+",
                FileAction::Overwrite => "~",
                FileAction::Unchanged => "=",
            };
            output.detail(&format!("  {} {}", marker, file.relative.display()));
        }
        for excluded in &plan.excluded {
            output.detail(&format!(
                "  {} {}",
                theme.dim.apply_to("x"),
                theme.dim.apply_to(excluded.display().to_string())
            ));
        }

        output.println(&format!(
            "{} new, {} changed, {} unchanged, {} excluded ({} patterns)",
            created,
            overwritten,
            unchanged,
            plan.excluded.len(),
            exclusions.pattern_count(),
        ));

        if plan.is_clean() {
            output.println(&theme.format_success("Destination is up to date"));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn quiet_output() -> Output {
        Output::new(crate::ui::OutputMode::Silent)
    }

    #[test]
    fn plan_succeeds_without_touching_dest() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("deployed");
        fs::create_dir_all(&dest).unwrap();
        write(temp.path(), "site/app.py", "code");
        write(
            temp.path(),
            ".gangplank/config.yml",
            &format!(
                "service:\n  name: web\nsync:\n  source: site\n  dest: {}\n",
                dest.display()
            ),
        );

        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = PlanCommand::new(source, PlanArgs::default());

        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(result.success);
        assert!(!dest.join("app.py").exists());
    }

    #[test]
    fn plan_without_config_exits_two() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::new(temp.path().to_path_buf(), None);
        let cmd = PlanCommand::new(source, PlanArgs::default());

        let result = cmd.execute(&quiet_output()).unwrap();
        assert_eq!(result.exit_code, 2);
    }
}
