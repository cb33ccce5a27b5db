//! Provisioning module.
//!
//! Ties name confirmation, the base directory store and directory creation
//! together into one run.

pub mod provisioner;

pub use provisioner::{FolderProvisioner, Provisioned};
