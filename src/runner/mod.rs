//! Deploy step execution orchestration.

pub mod actions;
pub mod sequencer;
pub mod step;

pub use actions::{StartServiceStep, StopServiceStep, SyncFilesStep};
pub use sequencer::{DeploySequencer, FailedStep, RunProgress, RunResult};
pub use step::{StepAction, StepOutcome, StepRecord};
