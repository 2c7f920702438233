//! Directory-tree synchronization.
//!
//! Mirrors a source directory into the deployment directory: recursive,
//! overwrite-all, no prompting. Paths matched by the exclusion list are
//! never copied and never deleted at the destination.

pub mod planner;
pub mod syncer;

pub use planner::{plan, FileAction, PlannedFile, SyncPlan};
pub use syncer::{FileSync, LocalSync, SyncReport};
