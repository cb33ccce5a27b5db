//! Filesystem module.
//!
//! Provides:
//! - Folder name sanitization
//! - Target directory creation

pub mod naming;
pub mod paths;

pub use naming::{sanitize_folder_name, unusable_folder_name, FORBIDDEN_CHARS, MAX_NAME_LEN};
pub use paths::{ensure_dir, CreateMode, DirStatus};
