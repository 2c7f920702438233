//! Deploy sequencing.
//!
//! Executes steps strictly in order, synchronously, halting at the first
//! failure. No later step runs after a halt, including the restart step: a
//! failed sync leaves the service stopped, which is accepted behavior for
//! this tool. The operator diagnoses and re-runs.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::runner::step::{StepAction, StepOutcome, StepRecord};

/// Progress events emitted during a run.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting {
        name: &'a str,
        title: String,
        index: usize,
        total: usize,
    },
    /// A step finished.
    StepFinished { record: &'a StepRecord },
}

/// The step that halted the run.
#[derive(Debug, Clone)]
pub struct FailedStep {
    pub name: String,
    pub error: String,
}

/// Result of running a deploy sequence.
#[derive(Debug)]
pub struct RunResult {
    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// Names of steps that completed, in execution order.
    pub completed: Vec<String>,

    /// The step that halted the run, if any.
    pub failed: Option<FailedStep>,

    /// Names of steps never attempted because an earlier step halted.
    pub skipped: Vec<String>,

    /// Warnings from continue-on-failure steps.
    pub warnings: Vec<String>,

    /// Per-step execution records.
    pub steps: Vec<StepRecord>,

    /// Total duration.
    pub duration: Duration,
}

impl RunResult {
    /// Whether every step completed.
    pub fn is_success(&self) -> bool {
        self.failed.is_none()
    }
}

/// Orchestrates the execution of an ordered deploy sequence.
///
/// The sequencer performs no I/O itself; it only invokes step actions and
/// collects results. All printing happens in the progress callback.
pub struct DeploySequencer<'a> {
    steps: Vec<Box<dyn StepAction + 'a>>,
}

impl<'a> DeploySequencer<'a> {
    /// Create a sequencer over an ordered list of steps.
    pub fn new(steps: Vec<Box<dyn StepAction + 'a>>) -> Self {
        Self { steps }
    }

    /// Run all steps without progress reporting.
    pub fn run(self) -> RunResult {
        self.run_with_progress(|_| {})
    }

    /// Run all steps, emitting progress events to the callback.
    pub fn run_with_progress(mut self, mut on_progress: impl FnMut(RunProgress<'_>)) -> RunResult {
        let started_at = Utc::now();
        let start = Instant::now();
        let total = self.steps.len();

        let mut completed = Vec::new();
        let mut warnings = Vec::new();
        let mut records = Vec::new();
        let mut failed = None;
        let mut skipped = Vec::new();

        for index in 0..total {
            let step = &mut self.steps[index];
            let name = step.name().to_string();

            on_progress(RunProgress::StepStarting {
                name: &name,
                title: step.title(),
                index: index + 1,
                total,
            });

            tracing::info!(step = %name, "running deploy step");
            let step_start = Instant::now();

            let outcome = match step.run() {
                Ok(detail) => StepOutcome::Completed { detail },
                Err(e) if step.continue_on_failure() => StepOutcome::Warned {
                    error: e.to_string(),
                },
                Err(e) => StepOutcome::Failed {
                    error: e.to_string(),
                },
            };

            let record = StepRecord {
                name: name.clone(),
                outcome,
                duration: step_start.elapsed(),
            };

            on_progress(RunProgress::StepFinished { record: &record });

            let halting = record.outcome.is_halting();
            match &record.outcome {
                StepOutcome::Completed { .. } => completed.push(name),
                StepOutcome::Warned { error } => {
                    tracing::warn!(step = %name, error = %error, "step failed, continuing");
                    warnings.push(format!("{}: {}", name, error));
                    completed.push(name);
                }
                StepOutcome::Failed { error } => {
                    tracing::error!(step = %name, error = %error, "step failed, halting");
                    failed = Some(FailedStep {
                        name,
                        error: error.clone(),
                    });
                }
            }

            records.push(record);

            if halting {
                skipped = self.steps[index + 1..]
                    .iter()
                    .map(|s| s.name().to_string())
                    .collect();
                break;
            }
        }

        RunResult {
            started_at,
            completed,
            failed,
            skipped,
            warnings,
            steps: records,
            duration: start.elapsed(),
        }
    }
}
