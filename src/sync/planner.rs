//! Sync planning.
//!
//! Walks the source tree, filters the exclusion list, and classifies every
//! file against the destination before anything is copied. A matched
//! directory prunes its whole subtree, so excluded paths are never even
//! visited.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::config::exclusions::ExclusionList;
use crate::error::{GangplankError, Result};

/// What the sync will do with a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// File does not exist at the destination.
    Create,
    /// File exists at the destination with different content.
    Overwrite,
    /// File exists at the destination with identical content.
    Unchanged,
}

/// A single file in the sync plan, keyed by its path relative to the source.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub relative: PathBuf,
    pub action: FileAction,
}

/// The full plan for mirroring `source` into `dest`.
#[derive(Debug)]
pub struct SyncPlan {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub files: Vec<PlannedFile>,
    /// Paths skipped by the exclusion list (directories listed once).
    pub excluded: Vec<PathBuf>,
}

impl SyncPlan {
    /// Files that will actually be copied (created or overwritten).
    pub fn to_copy(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files
            .iter()
            .filter(|f| f.action != FileAction::Unchanged)
    }

    /// Count of files with the given action.
    pub fn count(&self, action: FileAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }

    /// True when nothing needs copying.
    pub fn is_clean(&self) -> bool {
        self.to_copy().next().is_none()
    }
}

/// Build a sync plan for mirroring `source` into `dest`.
///
/// The exclusion list is matched against paths relative to `source`;
/// excluded directories are pruned without descending into them.
pub fn plan(source: &Path, dest: &Path, exclusions: &ExclusionList) -> Result<SyncPlan> {
    if !source.is_dir() {
        return Err(GangplankError::SyncFailed {
            detail: format!("source directory not found: {}", source.display()),
        });
    }

    let mut plan = SyncPlan {
        source: source.to_path_buf(),
        dest: dest.to_path_buf(),
        files: Vec::new(),
        excluded: Vec::new(),
    };

    let mut walker = WalkDir::new(source).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| GangplankError::SyncFailed {
            detail: e.to_string(),
        })?;

        // The source root itself
        if entry.depth() == 0 {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| GangplankError::SyncFailed {
                detail: format!("{}: {}", entry.path().display(), e),
            })?
            .to_path_buf();

        let is_dir = entry.file_type().is_dir();

        if exclusions.is_excluded(&relative, is_dir) {
            plan.excluded.push(relative);
            if is_dir {
                walker.skip_current_dir();
            }
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        let target = dest.join(&relative);
        let action = if !target.exists() {
            FileAction::Create
        } else if files_identical(entry.path(), &target)? {
            FileAction::Unchanged
        } else {
            FileAction::Overwrite
        };

        plan.files.push(PlannedFile { relative, action });
    }

    Ok(plan)
}

/// Compare two files by size, then by SHA-256 content hash.
fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    let meta_a = fs::metadata(a).map_err(|e| sync_io_error(a, &e))?;
    let meta_b = fs::metadata(b).map_err(|e| sync_io_error(b, &e))?;

    if meta_a.len() != meta_b.len() {
        return Ok(false);
    }

    Ok(hash_file(a)? == hash_file(b)?)
}

fn hash_file(path: &Path) -> Result<[u8; 32]> {
    let mut file = fs::File::open(path).map_err(|e| sync_io_error(path, &e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = file.read(&mut buf).map_err(|e| sync_io_error(path, &e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hasher.finalize().into())
}

pub(crate) fn sync_io_error(path: &Path, err: &std::io::Error) -> GangplankError {
    GangplankError::SyncFailed {
        detail: format!("{}: {}", path.display(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn rel_set(paths: &[PlannedFile]) -> Vec<String> {
        let mut v: Vec<String> = paths
            .iter()
            .map(|f| f.relative.to_string_lossy().replace('\\', "/"))
            .collect();
        v.sort();
        v
    }

    #[test]
    fn plan_classifies_new_files_as_create() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write(src.path(), "app.py", "print('hi')");
        write(src.path(), "static/app.js", "console.log(1)");

        let plan = plan(src.path(), dst.path(), &ExclusionList::empty()).unwrap();

        assert_eq!(rel_set(&plan.files), vec!["app.py", "static/app.js"]);
        assert_eq!(plan.count(FileAction::Create), 2);
        assert!(!plan.is_clean());
    }

    #[test]
    fn plan_marks_identical_files_unchanged() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write(src.path(), "app.py", "print('hi')");
        write(dst.path(), "app.py", "print('hi')");

        let plan = plan(src.path(), dst.path(), &ExclusionList::empty()).unwrap();

        assert_eq!(plan.count(FileAction::Unchanged), 1);
        assert!(plan.is_clean());
    }

    #[test]
    fn plan_marks_modified_files_overwrite() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write(src.path(), "app.py", "print('new')");
        write(dst.path(), "app.py", "print('old')");

        let plan = plan(src.path(), dst.path(), &ExclusionList::empty()).unwrap();

        assert_eq!(plan.count(FileAction::Overwrite), 1);
    }

    #[test]
    fn plan_prunes_excluded_directories() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write(src.path(), "app.py", "code");
        write(src.path(), "uploads/big.pdf", "data");
        write(src.path(), "uploads/2024/more.pdf", "data");

        let exclusions =
            ExclusionList::from_content(Path::new("exclude.txt"), "uploads/").unwrap();
        let plan = plan(src.path(), dst.path(), &exclusions).unwrap();

        assert_eq!(rel_set(&plan.files), vec!["app.py"]);
        // Directory recorded once, not per-descendant
        assert_eq!(plan.excluded.len(), 1);
    }

    #[test]
    fn plan_excludes_by_glob() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write(src.path(), "app.py", "code");
        write(src.path(), "debug.log", "noise");
        write(src.path(), "logs/app.log", "noise");

        let exclusions = ExclusionList::from_content(Path::new("exclude.txt"), "*.log").unwrap();
        let plan = plan(src.path(), dst.path(), &exclusions).unwrap();

        assert_eq!(rel_set(&plan.files), vec!["app.py"]);
        assert_eq!(plan.excluded.len(), 2);
    }

    #[test]
    fn plan_errors_on_missing_source() {
        let dst = TempDir::new().unwrap();
        let result = plan(
            Path::new("/nonexistent/source"),
            dst.path(),
            &ExclusionList::empty(),
        );
        assert!(matches!(result, Err(GangplankError::SyncFailed { .. })));
    }

    #[test]
    fn files_identical_detects_equal_content() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", "same");
        write(dir.path(), "b.txt", "same");
        write(dir.path(), "c.txt", "different");

        assert!(files_identical(&dir.path().join("a.txt"), &dir.path().join("b.txt")).unwrap());
        assert!(!files_identical(&dir.path().join("a.txt"), &dir.path().join("c.txt")).unwrap());
    }
}
