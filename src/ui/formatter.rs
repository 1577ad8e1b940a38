//! Pure formatting functions for diagnostic output.
//!
//! All diagnostics go to stderr; stdout is reserved for the JSON document.
//! The `format_*` functions build the styled lines and the `display_*`
//! functions print them.

use console::style;

/// Build an error line with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}

/// Build a success line with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green().for_stderr(), message)
}

/// Build a status line with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow().for_stderr(), message)
}

/// Build a warning line with a yellow prefix.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Format and print a warning message.
pub fn display_warning(message: &str) {
    eprintln!("{}", format_warning(message));
}
