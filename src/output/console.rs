//! Console output utilities.

use console::style;

use crate::provision::Provisioned;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Report whether the project folder was created or reused.
pub fn print_provisioned(provisioned: &Provisioned) {
    let path = provisioned.path.display();
    if provisioned.created() {
        print_success(&format!("Directory created: {}", path));
    } else {
        print_info(&format!("Directory already exists: {}", path));
    }
}
