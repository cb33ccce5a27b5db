//! Output module for user-facing console messages.

pub mod console;

pub use console::{print_error, print_info, print_provisioned, print_success, print_warning};
