//! Base directory persistence.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::paths::{suggested_base_dir, UserLocations};
use crate::error::{Error, Result};
use crate::prompt::{Confirmation, Prompter};

const BASE_DIR_CONFIRMATION: Confirmation<'static> = Confirmation {
    label: "Suggested default base directory",
    question: "Use this as your base directory?",
    replacement: "Enter your preferred base directory",
    check: unusable_base_dir,
};

fn unusable_base_dir(path: &str) -> Option<&'static str> {
    path.trim()
        .is_empty()
        .then_some("base directory cannot be empty")
}

/// Single-line config file holding the base directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    file: PathBuf,
    home: PathBuf,
}

impl ConfigStore {
    pub fn new(file: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            home: home.into(),
        }
    }

    /// Store at the default location, or at `file_override` when given.
    pub fn from_locations(locations: &UserLocations, file_override: Option<PathBuf>) -> Self {
        let file = file_override.unwrap_or_else(|| locations.config_file());
        Self::new(file, &locations.home)
    }

    /// Path of the config file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Read the stored base directory.
    ///
    /// Returns `None` when the file is missing or its first line is empty.
    pub fn load(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: self.file.clone(),
                    source,
                })
            }
        };

        let first_line = content
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim_end_matches('\r');

        if first_line.is_empty() {
            tracing::warn!("Config file {} is empty", self.file.display());
            return Ok(None);
        }

        Ok(Some(first_line.to_string()))
    }

    /// Write `base_dir` as the only line of the config file, replacing its contents.
    pub fn save(&self, base_dir: &str) -> Result<()> {
        fs::write(&self.file, format!("{}\n", base_dir)).map_err(|source| Error::ConfigWrite {
            path: self.file.clone(),
            source,
        })
    }

    /// Load the base directory, asking the user for one on first run.
    pub fn load_or_initialize<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<String> {
        // Only fatal if the file has to be written below
        let mut dir_error = None;
        if let Some(parent) = self.file.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::debug!("Could not create {}: {}", parent.display(), e);
                dir_error = Some(e);
            }
        }

        if let Some(base_dir) = self.load()? {
            tracing::debug!("Base directory from {}: {}", self.file.display(), base_dir);
            return Ok(base_dir);
        }

        prompter.say("Config file not found.")?;
        let suggested = suggested_base_dir(&self.home).display().to_string();
        let base_dir = prompter.confirm(&suggested, &BASE_DIR_CONFIRMATION, str::to_string)?;

        self.save(&base_dir).map_err(|e| with_dir_cause(e, dir_error))?;
        prompter.say("Saved base directory to config file.")?;
        tracing::debug!("Saved base directory {} to {}", base_dir, self.file.display());

        Ok(base_dir)
    }
}

/// Report a failed config directory creation as the cause of a failed write.
fn with_dir_cause(err: Error, dir_error: Option<std::io::Error>) -> Error {
    match (err, dir_error) {
        (Error::ConfigWrite { path, .. }, Some(source)) => Error::ConfigWrite { path, source },
        (err, _) => err,
    }
}
