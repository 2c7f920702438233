//! The concrete deploy steps: stop, sync, start.

use std::path::PathBuf;

use crate::config::exclusions::ExclusionList;
use crate::error::Result;
use crate::runner::step::StepAction;
use crate::service::ServiceControl;
use crate::sync::FileSync;

/// Stop the service before files are replaced.
pub struct StopServiceStep<'a> {
    control: &'a dyn ServiceControl,
}

impl<'a> StopServiceStep<'a> {
    pub fn new(control: &'a dyn ServiceControl) -> Self {
        Self { control }
    }
}

impl StepAction for StopServiceStep<'_> {
    fn name(&self) -> &str {
        "stop"
    }

    fn title(&self) -> String {
        format!("Stopping service {}", self.control.service_name())
    }

    fn run(&mut self) -> Result<Option<String>> {
        self.control.stop()?;
        Ok(None)
    }
}

/// Mirror the source tree into the deployment directory.
pub struct SyncFilesStep<'a> {
    syncer: &'a dyn FileSync,
    source: PathBuf,
    dest: PathBuf,
    exclusions: &'a ExclusionList,
}

impl<'a> SyncFilesStep<'a> {
    pub fn new(
        syncer: &'a dyn FileSync,
        source: PathBuf,
        dest: PathBuf,
        exclusions: &'a ExclusionList,
    ) -> Self {
        Self {
            syncer,
            source,
            dest,
            exclusions,
        }
    }
}

impl StepAction for SyncFilesStep<'_> {
    fn name(&self) -> &str {
        "sync"
    }

    fn title(&self) -> String {
        format!(
            "Syncing {} -> {}",
            self.source.display(),
            self.dest.display()
        )
    }

    fn run(&mut self) -> Result<Option<String>> {
        let report = self
            .syncer
            .sync(&self.source, &self.dest, self.exclusions)?;
        Ok(Some(report.summary()))
    }
}

/// Start the service once files are in place.
pub struct StartServiceStep<'a> {
    control: &'a dyn ServiceControl,
}

impl<'a> StartServiceStep<'a> {
    pub fn new(control: &'a dyn ServiceControl) -> Self {
        Self { control }
    }
}

impl StepAction for StartServiceStep<'_> {
    fn name(&self) -> &str {
        "start"
    }

    fn title(&self) -> String {
        format!("Starting service {}", self.control.service_name())
    }

    fn run(&mut self) -> Result<Option<String>> {
        self.control.start()?;
        Ok(None)
    }
}
