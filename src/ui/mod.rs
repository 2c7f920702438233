//! Terminal output components.
//!
//! This module provides:
//! - [`Output`] writer gated by [`OutputMode`]
//! - [`GangplankTheme`] styles and [`StatusKind`] icons
//! - [`ProgressSpinner`] for long-running steps

pub mod icons;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod theme;

pub use icons::StatusKind;
pub use output::{Output, OutputMode};
pub use progress::format_duration;
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, GangplankTheme};
