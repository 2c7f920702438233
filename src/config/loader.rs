//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! their locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::GangplankConfig;
use crate::error::{GangplankError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.gangplank/config.yml`)
/// 2. Local overrides (`.gangplank/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .gangplank/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .gangplank/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: Self::find_existing(project_root, "config.yml"),
            project_local: Self::find_existing(project_root, "config.local.yml"),
        }
    }

    fn find_existing(project_root: &Path, name: &str) -> Option<PathBuf> {
        let path = project_root.join(".gangplank").join(name);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        let mut paths = Vec::new();

        if let Some(p) = &self.project {
            paths.push(p);
        }

        if let Some(p) = &self.project_local {
            paths.push(p);
        }

        paths
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

/// Find the project root by walking up from the start directory.
///
/// Looks for:
/// 1. `.gangplank` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".gangplank").is_dir() {
            return Some(current);
        }

        if current.join(".git").is_dir() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file as a YAML value.
fn load_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| GangplankError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| GangplankError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the merged configuration for a project root.
///
/// Returns `ConfigNotFound` if no project config exists.
pub fn load_merged_config(project_root: &Path) -> Result<GangplankConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_project_config() {
        return Err(GangplankError::ConfigNotFound {
            path: project_root.join(".gangplank").join("config.yml"),
        });
    }

    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("loading config layer: {}", path.display());
        values.push(load_value(path)?);
    }

    let merged = merge_configs(&values);

    serde_yaml::from_value(merged).map_err(|e| GangplankError::ConfigParseError {
        path: paths.project.unwrap_or_default(),
        message: e.to_string(),
    })
}

/// Load configuration from an explicit file path (`--config`).
///
/// No layering is applied; the file stands alone.
pub fn load_config_file(path: &Path) -> Result<GangplankConfig> {
    if !path.exists() {
        return Err(GangplankError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let value = load_value(path)?;
    serde_yaml::from_value(value).map_err(|e| GangplankError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) {
        let dir = root.join(".gangplank");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discover_finds_project_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "service:\n  name: web\n");

        let paths = ConfigPaths::discover(temp.path());

        assert!(paths.has_project_config());
        assert!(paths.project_local.is_none());
        assert_eq!(paths.all_existing().len(), 1);
    }

    #[test]
    fn load_merged_config_errors_without_config() {
        let temp = TempDir::new().unwrap();
        let result = load_merged_config(temp.path());
        assert!(matches!(result, Err(GangplankError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_merged_config_reads_project_config() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "service:\n  name: fszn-web\nsync:\n  dest: /srv/fszn\n",
        );

        let config = load_merged_config(temp.path()).unwrap();

        assert_eq!(config.service.name, "fszn-web");
        assert_eq!(config.sync.dest, PathBuf::from("/srv/fszn"));
    }

    #[test]
    fn local_overrides_project_config() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "service:\n  name: fszn-web\nsync:\n  dest: /srv/fszn\n",
        );
        write_config(
            temp.path(),
            "config.local.yml",
            "sync:\n  dest: /tmp/fszn-staging\n",
        );

        let config = load_merged_config(temp.path()).unwrap();

        // Overridden by local layer
        assert_eq!(config.sync.dest, PathBuf::from("/tmp/fszn-staging"));
        // Untouched keys survive from the project layer
        assert_eq!(config.service.name, "fszn-web");
    }

    #[test]
    fn load_merged_config_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "service: [not: valid");

        let result = load_merged_config(temp.path());
        assert!(matches!(
            result,
            Err(GangplankError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn load_config_file_errors_when_missing() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(GangplankError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_file_reads_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deploy.yml");
        fs::write(&path, "service:\n  name: web\nsync:\n  dest: /srv/web\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.service.name, "web");
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "service:\n  name: web\n");
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(root.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
    }
}
