//! Configuration loading, parsing, and validation for Gangplank.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Variable interpolation in [`interpolation`]
//! - Exclusion file handling in [`exclusions`]
//!
//! # Configuration File Locations
//!
//! Gangplank discovers and merges configuration in this order:
//! 1. Project config (`.gangplank/config.yml`)
//! 2. Local overrides (`.gangplank/config.local.yml`)
//!
//! The exclusion file named by `sync.exclude_file` (default
//! `.gangplank/exclude.txt`) is plain text, one gitignore-style pattern per
//! line; it is loaded once at run start and never re-read mid-run.

pub mod exclusions;
pub mod interpolation;
pub mod loader;
pub mod merger;
pub mod schema;

pub use exclusions::{ExclusionError, ExclusionList};
pub use interpolation::{parse_interpolation, resolve_string, Segment};
pub use loader::{find_project_root, load_config_file, load_merged_config, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use schema::{validate, GangplankConfig, ServiceConfig, Settings, SyncConfig};
