//! Gangplank - Sync-and-restart deployment automation.
//!
//! Gangplank replaces ad-hoc deploy scripts for single-service hosts with a
//! declarative YAML configuration and one strictly ordered sequence: stop
//! the service, mirror the source tree into the deployment directory while
//! honoring an exclusion file, start the service again. The sequence is
//! fail-fast: the first failing step halts the run and later steps never
//! execute.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and the exclusion list
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Deploy step sequencing
//! - [`service`] - Service-manager invocation
//! - [`shell`] - Shell command execution
//! - [`sync`] - Directory-tree synchronization
//! - [`ui`] - Terminal output, themes, and spinners
//!
//! # Example
//!
//! ```
//! use gangplank::runner::{DeploySequencer, StepAction};
//!
//! struct Noop;
//!
//! impl StepAction for Noop {
//!     fn name(&self) -> &str { "noop" }
//!     fn title(&self) -> String { "Doing nothing".to_string() }
//!     fn run(&mut self) -> gangplank::Result<Option<String>> { Ok(None) }
//! }
//!
//! let result = DeploySequencer::new(vec![Box::new(Noop)]).run();
//! assert!(result.is_success());
//! assert_eq!(result.completed, vec!["noop"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod service;
pub mod shell;
pub mod sync;
pub mod ui;

pub use error::{GangplankError, Result};
