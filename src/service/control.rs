//! Service-manager invocation.
//!
//! The deploy sequencer talks to the platform service manager through the
//! [`ServiceControl`] trait so tests can substitute fakes for real services.

use std::collections::HashMap;

use crate::config::interpolation::resolve_string;
use crate::config::schema::ServiceConfig;
use crate::error::{GangplankError, Result};
use crate::shell;

/// Stop/start operations on a named service.
pub trait ServiceControl {
    /// Service name as known to the service manager.
    fn service_name(&self) -> &str;

    /// Stop the service. Blocks until the service manager returns.
    fn stop(&self) -> Result<()>;

    /// Start the service. Blocks until the service manager returns.
    fn start(&self) -> Result<()>;
}

/// Production implementation backed by the platform service manager CLI.
///
/// Renders the configured command templates (`${service}` expands to the
/// service name) and executes them through the shell layer.
pub struct ServiceManager {
    name: String,
    stop_template: String,
    start_template: String,
}

impl ServiceManager {
    /// Build a service manager from configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            name: config.name.clone(),
            stop_template: config.stop_command_template().to_string(),
            start_template: config.start_command_template().to_string(),
        }
    }

    fn render(&self, template: &str) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("service".to_string(), self.name.clone());
        resolve_string(template, &vars)
    }
}

impl ServiceControl for ServiceManager {
    fn service_name(&self) -> &str {
        &self.name
    }

    fn stop(&self) -> Result<()> {
        let command = self.render(&self.stop_template)?;
        tracing::debug!(command = %command, "stopping service");

        let result = shell::execute_quiet(&command, None)?;
        if result.success {
            Ok(())
        } else {
            Err(GangplankError::ServiceStopFailed {
                service: self.name.clone(),
                detail: result.failure_detail(),
            })
        }
    }

    fn start(&self) -> Result<()> {
        let command = self.render(&self.start_template)?;
        tracing::debug!(command = %command, "starting service");

        let result = shell::execute_quiet(&command, None)?;
        if result.success {
            Ok(())
        } else {
            Err(GangplankError::ServiceStartFailed {
                service: self.name.clone(),
                detail: result.failure_detail(),
            })
        }
    }
}
