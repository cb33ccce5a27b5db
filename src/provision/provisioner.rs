//! End-to-end folder provisioning.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, sanitize_folder_name, unusable_folder_name, CreateMode, DirStatus};
use crate::prompt::{Confirmation, Prompter};

const FOLDER_NAME_CONFIRMATION: Confirmation<'static> = Confirmation {
    label: "Sanitized folder name",
    question: "Do you want to use this name?",
    replacement: "Enter a new folder name",
    check: unusable_folder_name,
};

/// Result of a successful provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    /// Base directory joined with the confirmed folder name.
    pub path: PathBuf,
    pub status: DirStatus,
}

impl Provisioned {
    pub fn created(&self) -> bool {
        self.status == DirStatus::Created
    }
}

/// Creates (or reuses) a project folder under the configured base directory.
#[derive(Debug, Clone)]
pub struct FolderProvisioner {
    store: ConfigStore,
    mode: CreateMode,
}

impl FolderProvisioner {
    pub fn new(store: ConfigStore, mode: CreateMode) -> Self {
        Self { store, mode }
    }

    /// Sanitize `raw_name` and let the user confirm or replace it.
    pub fn confirm_name<R: BufRead, W: Write>(
        &self,
        raw_name: &str,
        prompter: &mut Prompter<R, W>,
    ) -> Result<String> {
        prompter.confirm(raw_name, &FOLDER_NAME_CONFIRMATION, sanitize_folder_name)
    }

    /// Resolve the target folder, create it if missing and make it the working directory.
    pub fn provision<R: BufRead, W: Write>(
        &self,
        raw_name: &str,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Provisioned> {
        let name = self.confirm_name(raw_name, prompter)?;
        let base_dir = self.store.load_or_initialize(prompter)?;

        let path = PathBuf::from(base_dir).join(&name);
        tracing::debug!("Provisioning {}", path.display());

        let status = ensure_dir(&path, self.mode)?;

        std::env::set_current_dir(&path).map_err(|source| Error::WorkingDirectory {
            path: path.clone(),
            source,
        })?;

        Ok(Provisioned { path, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    /// Provisioner whose config already points at `base`.
    fn provisioner_for(temp: &TempDir, base: &Path, mode: CreateMode) -> FolderProvisioner {
        let store = ConfigStore::new(temp.path().join("config.txt"), temp.path());
        store.save(&base.display().to_string()).unwrap();
        FolderProvisioner::new(store, mode)
    }

    /// Run `f`, then restore the working directory it may have changed.
    fn keeping_cwd<T>(f: impl FnOnce() -> T) -> T {
        let original = std::env::current_dir().unwrap();
        let result = f();
        std::env::set_current_dir(original).unwrap();
        result
    }

    #[test]
    fn test_confirm_name_sanitizes_replacements() {
        let temp = TempDir::new().unwrap();
        let provisioner = provisioner_for(&temp, temp.path(), CreateMode::default());

        let mut p = prompter("n\nClient <Acme> 2024\ny\n");
        let name = provisioner.confirm_name("My Project: v1?", &mut p).unwrap();
        assert_eq!(name, "Client_Acme_2024");

        let output = String::from_utf8(p.into_writer()).unwrap();
        assert!(output.contains("Sanitized folder name: \"My_Project_v1\""));
    }

    #[test]
    fn test_confirm_name_never_accepts_empty() {
        let temp = TempDir::new().unwrap();
        let provisioner = provisioner_for(&temp, temp.path(), CreateMode::default());

        let mut p = prompter("..\nreal\ny\n");
        let name = provisioner.confirm_name("???", &mut p).unwrap();
        assert_eq!(name, "real");
    }

    #[test]
    #[serial]
    fn test_provision_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base");
        let provisioner = provisioner_for(&temp, &base, CreateMode::Recursive);

        let result = keeping_cwd(|| {
            let mut p = prompter("y\n");
            let result = provisioner.provision("My Project: v1?", &mut p).unwrap();
            assert_eq!(
                fs::canonicalize(std::env::current_dir().unwrap()).unwrap(),
                fs::canonicalize(&result.path).unwrap()
            );
            result
        });

        assert_eq!(result.path, base.join("My_Project_v1"));
        assert!(result.created());
        assert!(result.path.is_dir());
    }

    #[test]
    #[serial]
    fn test_provision_reuses_existing_directory() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("existing");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("keep.txt"), "data").unwrap();
        let provisioner = provisioner_for(&temp, temp.path(), CreateMode::SingleLevel);

        let result = keeping_cwd(|| {
            let mut p = prompter("y\n");
            let result = provisioner.provision("existing", &mut p).unwrap();
            assert_eq!(
                fs::canonicalize(std::env::current_dir().unwrap()).unwrap(),
                fs::canonicalize(&existing).unwrap()
            );
            result
        });

        assert_eq!(result.status, DirStatus::AlreadyExists);
        assert!(existing.join("keep.txt").exists());
    }

    #[test]
    #[serial]
    fn test_provision_rejects_file_in_the_way() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes"), "plain file").unwrap();
        let provisioner = provisioner_for(&temp, temp.path(), CreateMode::Recursive);

        let err = keeping_cwd(|| {
            let mut p = prompter("y\n");
            provisioner.provision("notes", &mut p).unwrap_err()
        });
        assert!(matches!(err, Error::PathConflict(_)));
    }

    #[test]
    #[serial]
    fn test_provision_single_level_needs_base() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("not-yet");
        let provisioner = provisioner_for(&temp, &base, CreateMode::SingleLevel);

        let err = keeping_cwd(|| {
            let mut p = prompter("y\n");
            provisioner.provision("project", &mut p).unwrap_err()
        });
        assert!(matches!(err, Error::DirectoryCreate { .. }));
        assert!(!base.exists());
    }

    #[test]
    #[serial]
    fn test_provision_first_run_prompts_for_base() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(
            temp.path().join("FolderManager").join("config.txt"),
            temp.path().join("home"),
        );
        let config_file = store.path().to_path_buf();
        let provisioner = FolderProvisioner::new(store, CreateMode::Recursive);

        let result = keeping_cwd(|| {
            let mut p = prompter("y\ny\n");
            provisioner.provision("first project", &mut p).unwrap()
        });

        let expected = temp.path().join("home").join("Projects").join("first_project");
        assert_eq!(result.path, expected);
        assert!(expected.is_dir());
        assert!(config_file.exists());
    }
}
