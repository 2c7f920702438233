//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute, execute_check, execute_quiet, CommandOptions, CommandResult};
pub use platform::is_ci;
