//! Per-user configuration locations.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Error, Result};

/// Directory under the local data directory that holds our files.
pub const APP_DIR_NAME: &str = "FolderManager";

/// Name of the single-line config file.
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Folder under the home directory suggested as the base directory.
pub const DEFAULT_BASE_SUBDIR: &str = "Projects";

/// Config file location for a given per-user local data directory.
pub fn config_file_in(local_data_dir: &Path) -> PathBuf {
    local_data_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Base directory suggested on first run.
pub fn suggested_base_dir(home: &Path) -> PathBuf {
    home.join(DEFAULT_BASE_SUBDIR)
}

/// Directories resolved from the user's environment.
#[derive(Debug, Clone)]
pub struct UserLocations {
    pub home: PathBuf,
    pub local_data: PathBuf,
}

impl UserLocations {
    /// Resolve the home and local data directories of the current user.
    pub fn resolve() -> Result<Self> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| Error::EnvironmentResolution("the user home directory".to_string()))?;

        Ok(Self {
            home: dirs.home_dir().to_path_buf(),
            local_data: dirs.data_local_dir().to_path_buf(),
        })
    }

    /// Default config file location.
    pub fn config_file(&self) -> PathBuf {
        config_file_in(&self.local_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_in() {
        let path = config_file_in(Path::new("/home/alice/.local/share"));
        assert_eq!(
            path,
            PathBuf::from("/home/alice/.local/share/FolderManager/config.txt")
        );
    }

    #[test]
    fn test_suggested_base_dir() {
        assert_eq!(
            suggested_base_dir(Path::new("/home/alice")),
            PathBuf::from("/home/alice/Projects")
        );
    }

    #[test]
    fn test_user_locations_config_file() {
        let locations = UserLocations {
            home: PathBuf::from("/home/alice"),
            local_data: PathBuf::from("/data"),
        };
        assert_eq!(
            locations.config_file(),
            PathBuf::from("/data/FolderManager/config.txt")
        );
    }
}
