//! Exclusion list loading and matching.
//!
//! The exclusion file is plain text, one gitignore-style pattern per line,
//! with `#` comments. It protects destination-only data (uploaded files,
//! local environment directories, logs) from being overwritten by a sync.
//!
//! The list is loaded once at run start into an immutable matcher and passed
//! explicitly to the sync step; nothing re-reads the file mid-run.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum exclusion file size (64KB).
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed.
const MAX_PATTERNS: usize = 1000;

/// Patterns loaded from an exclusion file.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug)]
pub struct ExclusionList {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExclusionList {
    /// Create an empty exclusion list (matches nothing).
    pub fn empty() -> Self {
        let builder = GitignoreBuilder::new("");
        let matcher = builder
            .build()
            .expect("empty gitignore should always build");
        Self {
            matcher,
            pattern_count: 0,
        }
    }

    /// Load patterns from the exclusion file at `path`.
    ///
    /// Returns `Ok(empty)` if the file doesn't exist.
    /// Returns `Err` if the file is too large, has too many patterns, or
    /// contains an invalid pattern.
    pub fn load(path: &Path) -> Result<Self, ExclusionError> {
        if !path.exists() {
            return Ok(Self::empty());
        }

        let metadata = fs::metadata(path).map_err(ExclusionError::Io)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ExclusionError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(path).map_err(ExclusionError::Io)?;
        Self::from_content(path, &content)
    }

    /// Parse patterns from string content.
    pub fn from_content(source_path: &Path, content: &str) -> Result<Self, ExclusionError> {
        let mut builder = GitignoreBuilder::new("");
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(ExclusionError::TooManyPatterns {
                    path: source_path.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), line) {
                return Err(ExclusionError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: line.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| ExclusionError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a path (relative to the sync source root) is excluded.
    ///
    /// `is_dir` should be true if the path is a directory.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when loading the exclusion file.
#[derive(Debug, Error)]
pub enum ExclusionError {
    /// The exclusion file exceeds the size limit.
    #[error("exclusion file exceeds {}KB limit ({size} bytes): {}", .limit / 1024, .path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Too many patterns in the file.
    #[error("exclusion file has {count} patterns, exceeds {limit} limit: {}", .path.display())]
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },

    /// A pattern has invalid syntax.
    #[error("invalid pattern at {}:{line}: '{pattern}' - {message}", .path.display())]
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },

    /// Failed to build the exclusion matcher.
    #[error("failed to build exclusion matcher: {0}")]
    BuildFailed(String),

    /// IO error reading the file.
    #[error("IO error reading exclusion file: {0}")]
    Io(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_patterns_match_nothing() {
        let patterns = ExclusionList::empty();
        assert!(!patterns.is_excluded(Path::new("anything.py"), false));
        assert!(!patterns.is_excluded(Path::new("dir/file.py"), false));
        assert_eq!(patterns.pattern_count(), 0);
        assert!(patterns.is_empty());
    }

    #[test]
    fn missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let patterns = ExclusionList::load(&dir.path().join("exclude.txt")).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn empty_file_returns_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exclude.txt");
        fs::write(&path, "").unwrap();
        let patterns = ExclusionList::load(&path).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn comments_only_returns_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exclude.txt");
        fs::write(&path, "# just a comment\n\n# another").unwrap();
        let patterns = ExclusionList::load(&path).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn pattern_matches_exact_file() {
        let patterns =
            ExclusionList::from_content(Path::new("exclude.txt"), ".env").unwrap();

        assert!(patterns.is_excluded(Path::new(".env"), false));
        assert!(!patterns.is_excluded(Path::new("settings.py"), false));
        assert_eq!(patterns.pattern_count(), 1);
    }

    #[test]
    fn pattern_matches_directory_recursively() {
        let patterns =
            ExclusionList::from_content(Path::new("exclude.txt"), "uploads/").unwrap();

        assert!(patterns.is_excluded(Path::new("uploads"), true));
        assert!(patterns.is_excluded(Path::new("uploads/report.pdf"), false));
        assert!(patterns.is_excluded(Path::new("uploads/2024/invoice.pdf"), false));
        assert!(!patterns.is_excluded(Path::new("static/app.js"), false));
    }

    #[test]
    fn glob_pattern_matches() {
        let patterns = ExclusionList::from_content(Path::new("exclude.txt"), "*.log").unwrap();

        assert!(patterns.is_excluded(Path::new("app.log"), false));
        assert!(patterns.is_excluded(Path::new("logs/error.log"), false));
        assert!(!patterns.is_excluded(Path::new("app.py"), false));
    }

    #[test]
    fn double_star_matches_any_depth() {
        let patterns =
            ExclusionList::from_content(Path::new("exclude.txt"), "**/__pycache__/").unwrap();

        assert!(patterns.is_excluded(Path::new("__pycache__"), true));
        assert!(patterns.is_excluded(Path::new("app/__pycache__"), true));
        assert!(patterns.is_excluded(Path::new("app/services/__pycache__/mod.pyc"), false));
    }

    #[test]
    fn negation_re_includes_file() {
        let patterns =
            ExclusionList::from_content(Path::new("exclude.txt"), "*.log\n!keep.log").unwrap();

        assert!(patterns.is_excluded(Path::new("app.log"), false));
        assert!(!patterns.is_excluded(Path::new("keep.log"), false));
    }

    #[test]
    fn file_too_large_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exclude.txt");
        let large_content = "x\n".repeat(40000); // ~80KB
        fs::write(&path, large_content).unwrap();

        let result = ExclusionList::load(&path);
        assert!(matches!(result, Err(ExclusionError::FileTooLarge { .. })));
    }

    #[test]
    fn too_many_patterns_error() {
        let patterns: String = (0..1100).map(|i| format!("file{}.log\n", i)).collect();
        let result = ExclusionList::from_content(Path::new("exclude.txt"), &patterns);
        assert!(matches!(result, Err(ExclusionError::TooManyPatterns { .. })));
    }

    #[test]
    fn multiple_patterns_work() {
        let patterns = ExclusionList::from_content(
            Path::new("exclude.txt"),
            "uploads/\n*.log\n.env",
        )
        .unwrap();

        assert_eq!(patterns.pattern_count(), 3);
        assert!(patterns.is_excluded(Path::new("uploads/report.pdf"), false));
        assert!(patterns.is_excluded(Path::new("old.log"), false));
        assert!(patterns.is_excluded(Path::new(".env"), false));
        assert!(!patterns.is_excluded(Path::new("app.py"), false));
    }
}
