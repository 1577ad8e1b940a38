//! User interface module - diagnostics and change reporting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - The reporter that routes version changes to the terminal

use crate::domain::ChangeReporter;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, display_status, display_success, display_warning};

/// Prints each version change as a status line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl ChangeReporter for StderrReporter {
    fn report(&mut self, description: &str) {
        display_status(description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_reporter() {
        // Visual verification test - output is printed to stderr
        let mut reporter = StderrReporter;
        reporter.report("Set version to 2 (from 1)");
    }
}
