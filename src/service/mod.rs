//! Service-manager integration.

pub mod control;

pub use control::{ServiceControl, ServiceManager};
