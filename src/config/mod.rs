//! Configuration module for folder-manager.
//!
//! This module handles:
//! - Resolving the per-user config file location
//! - Loading and first-run initialization of the base directory

pub mod paths;
pub mod store;

pub use paths::{config_file_in, suggested_base_dir, UserLocations};
pub use store::ConfigStore;
