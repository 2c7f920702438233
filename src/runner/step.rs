//! Deploy step abstraction.

use std::time::Duration;

use crate::error::Result;
use crate::ui::StatusKind;

/// A single named deploy step.
///
/// Actions are trait objects so the sequencer can be driven by fakes in
/// tests instead of real service managers and filesystems.
pub trait StepAction {
    /// Short machine name ("stop", "sync", "start").
    fn name(&self) -> &str;

    /// Human-readable progress title ("Stopping service fszn-web").
    fn title(&self) -> String;

    /// Whether a failure of this step lets the sequence continue.
    fn continue_on_failure(&self) -> bool {
        false
    }

    /// Run the step. `Ok(detail)` may carry a one-line result summary.
    fn run(&mut self) -> Result<Option<String>>;
}

/// Terminal outcome of one executed step.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// Step succeeded.
    Completed { detail: Option<String> },
    /// Step failed and halted the sequence.
    Failed { error: String },
    /// Step failed but was marked continue-on-failure.
    Warned { error: String },
}

impl StepOutcome {
    /// Whether this outcome halts the sequence.
    pub fn is_halting(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }

    /// Status icon kind for display.
    pub fn status(&self) -> StatusKind {
        match self {
            StepOutcome::Completed { .. } => StatusKind::Success,
            StepOutcome::Failed { .. } => StatusKind::Failed,
            StepOutcome::Warned { .. } => StatusKind::Warning,
        }
    }
}

/// Result of executing a single step.
#[derive(Debug, Clone)]
pub struct StepRecord {
    /// Step name.
    pub name: String,

    /// How the step ended.
    pub outcome: StepOutcome,

    /// Execution duration.
    pub duration: Duration,
}

impl StepRecord {
    /// Summary text without a status icon (the caller picks the icon).
    pub fn detail_line(&self) -> String {
        let duration = crate::ui::format_duration(self.duration);

        match &self.outcome {
            StepOutcome::Completed { detail: Some(d) } => {
                format!("{} - {} ({})", self.name, d, duration)
            }
            StepOutcome::Completed { detail: None } => {
                format!("{} ({})", self.name, duration)
            }
            StepOutcome::Failed { error } | StepOutcome::Warned { error } => {
                format!("{} - {}", self.name, error)
            }
        }
    }

    /// Generate a summary line for display.
    pub fn summary_line(&self) -> String {
        format!("{} {}", self.outcome.status().icon(), self.detail_line())
    }
}
