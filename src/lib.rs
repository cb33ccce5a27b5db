//! Folder Manager - create or reuse project folders from the command line.
//!
//! This library provides the pieces behind the `folder-manager` binary.
//!
//! # Features
//!
//! - Sanitize a folder name into something every filesystem accepts
//! - Interactive confirmation of the name and of the base directory
//! - Base directory remembered in a single-line per-user config file
//! - Idempotent directory creation, single-level or recursive
//! - Open the project and Downloads folders in the file browser
//!
//! # Example
//!
//! ```no_run
//! use folder_manager::{
//!     config::{ConfigStore, UserLocations},
//!     fs::CreateMode,
//!     opener::{open_workspace, SystemOpener},
//!     prompt::Prompter,
//!     FolderProvisioner,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let locations = UserLocations::resolve()?;
//!     let store = ConfigStore::from_locations(&locations, None);
//!     let provisioner = FolderProvisioner::new(store, CreateMode::Recursive);
//!
//!     let provisioned = provisioner.provision("My Project", &mut Prompter::stdio())?;
//!     open_workspace(&SystemOpener, &provisioned.path);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod opener;
pub mod output;
pub mod prompt;
pub mod provision;

// Re-exports for convenience
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use fs::{sanitize_folder_name, CreateMode};
pub use opener::{Opener, SystemOpener};
pub use provision::{FolderProvisioner, Provisioned};
