//! Target directory management.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// How missing directories are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Create only the last component; the parent must already exist.
    SingleLevel,
    /// Create the directory and any missing parents.
    #[default]
    Recursive,
}

impl fmt::Display for CreateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateMode::SingleLevel => write!(f, "single-level"),
            CreateMode::Recursive => write!(f, "recursive"),
        }
    }
}

/// What [`ensure_dir`] found at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Ensure a directory exists, creating it if necessary.
///
/// Fails with [`Error::PathConflict`] when something other than a directory
/// already occupies `path`.
pub fn ensure_dir(path: &Path, mode: CreateMode) -> Result<DirStatus> {
    if path.is_dir() {
        return Ok(DirStatus::AlreadyExists);
    }
    if path.exists() {
        return Err(Error::PathConflict(path.to_path_buf()));
    }

    tracing::debug!("Creating {} ({})", path.display(), mode);
    let created = match mode {
        CreateMode::SingleLevel => std::fs::create_dir(path),
        CreateMode::Recursive => std::fs::create_dir_all(path),
    };
    created.map_err(|source| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(DirStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_missing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("fresh");

        assert_eq!(
            ensure_dir(&target, CreateMode::default()).unwrap(),
            DirStatus::Created
        );
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_not_an_error() {
        let temp = TempDir::new().unwrap();

        assert_eq!(
            ensure_dir(temp.path(), CreateMode::SingleLevel).unwrap(),
            DirStatus::AlreadyExists
        );
    }

    #[test]
    fn test_ensure_dir_file_conflict() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes");
        std::fs::write(&file, "not a directory").unwrap();

        let err = ensure_dir(&file, CreateMode::Recursive).unwrap_err();
        assert!(matches!(err, Error::PathConflict(p) if p == file));
    }

    #[test]
    fn test_ensure_dir_modes_with_missing_parent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing").join("child");

        let err = ensure_dir(&target, CreateMode::SingleLevel).unwrap_err();
        assert!(matches!(err, Error::DirectoryCreate { .. }));
        assert!(!target.exists());

        assert_eq!(
            ensure_dir(&target, CreateMode::Recursive).unwrap(),
            DirStatus::Created
        );
        assert!(target.is_dir());
    }
}
