//! Platform file browser launcher.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use directories::UserDirs;

use crate::error::{Error, Result};
use crate::opener::Opener;

#[cfg(target_os = "windows")]
const FILE_BROWSER: &str = "explorer";

#[cfg(target_os = "macos")]
const FILE_BROWSER: &str = "open";

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FILE_BROWSER: &str = "xdg-open";

/// Opens folders with the platform file browser.
///
/// The browser is spawned and left running; its outcome is not awaited.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open_path(&self, path: &Path) -> Result<()> {
        tracing::debug!("{} {}", FILE_BROWSER, path.display());

        Command::new(FILE_BROWSER)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::ShellOpen(format!("{} ({}: {})", path.display(), FILE_BROWSER, e))
            })?;

        Ok(())
    }

    fn open_downloads_folder(&self) -> Result<()> {
        let downloads = downloads_dir()?;
        self.open_path(&downloads)
    }
}

/// Resolve the user's Downloads folder.
pub fn downloads_dir() -> Result<PathBuf> {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .ok_or_else(|| Error::ShellOpen("Could not locate Downloads folder".to_string()))
}
