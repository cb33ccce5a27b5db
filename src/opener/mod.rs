//! File browser integration.
//!
//! Provides:
//! - The [`Opener`] capability used after provisioning
//! - A system implementation that launches the platform file browser

pub mod system;

use std::path::Path;

use crate::error::Result;

pub use system::{downloads_dir, SystemOpener};

/// Shows folders to the user.
pub trait Opener {
    /// Open `path` in the file browser.
    fn open_path(&self, path: &Path) -> Result<()>;

    /// Open the user's Downloads folder in the file browser.
    fn open_downloads_folder(&self) -> Result<()>;
}

/// Open the project folder and the Downloads folder.
///
/// Failures are logged and skipped. Returns how many of the two requests failed.
pub fn open_workspace(opener: &dyn Opener, path: &Path) -> usize {
    let mut failures = 0;

    if let Err(e) = opener.open_path(path) {
        tracing::warn!("{}", e);
        failures += 1;
    }

    if let Err(e) = opener.open_downloads_folder() {
        tracing::warn!("{}", e);
        failures += 1;
    }

    failures
}
