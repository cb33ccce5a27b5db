//! Interactive confirmation module.

pub mod prompter;

pub use prompter::{is_affirmative, Confirmation, Prompter};
