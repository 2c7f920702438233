//! Sync execution.
//!
//! The deploy sequencer copies files through the [`FileSync`] trait so tests
//! can observe the effective file set with a recording fake instead of
//! touching the real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::exclusions::ExclusionList;
use crate::error::Result;
use crate::sync::planner::{self, sync_io_error, SyncPlan};

/// Outcome of applying a sync plan.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Relative paths of files that were copied.
    pub copied: Vec<PathBuf>,
    /// Count of files left alone because content was identical.
    pub unchanged: usize,
    /// Count of paths skipped by the exclusion list.
    pub excluded: usize,
}

impl SyncReport {
    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!(
            "{} copied, {} unchanged, {} excluded",
            self.copied.len(),
            self.unchanged,
            self.excluded
        )
    }
}

/// Directory-tree mirroring behind a trait for testability.
pub trait FileSync {
    /// Build the plan for mirroring `source` into `dest`.
    fn plan(&self, source: &Path, dest: &Path, exclusions: &ExclusionList) -> Result<SyncPlan>;

    /// Apply a previously built plan.
    fn apply(&self, plan: &SyncPlan) -> Result<SyncReport>;

    /// Plan and apply in one call.
    fn sync(&self, source: &Path, dest: &Path, exclusions: &ExclusionList) -> Result<SyncReport> {
        let plan = self.plan(source, dest, exclusions)?;
        self.apply(&plan)
    }
}

/// Production implementation working on the local filesystem.
#[derive(Debug, Default)]
pub struct LocalSync;

impl LocalSync {
    pub fn new() -> Self {
        Self
    }
}

impl FileSync for LocalSync {
    fn plan(&self, source: &Path, dest: &Path, exclusions: &ExclusionList) -> Result<SyncPlan> {
        planner::plan(source, dest, exclusions)
    }

    fn apply(&self, plan: &SyncPlan) -> Result<SyncReport> {
        let mut report = SyncReport {
            unchanged: plan.count(crate::sync::planner::FileAction::Unchanged),
            excluded: plan.excluded.len(),
            ..Default::default()
        };

        for file in plan.to_copy() {
            let from = plan.source.join(&file.relative);
            let to = plan.dest.join(&file.relative);

            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent).map_err(|e| sync_io_error(parent, &e))?;
            }

            fs::copy(&from, &to).map_err(|e| sync_io_error(&to, &e))?;
            tracing::debug!(path = %file.relative.display(), "copied");
            report.copied.push(file.relative.clone());
        }

        Ok(report)
    }
}
