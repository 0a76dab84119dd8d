//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting
///
/// Everything goes to stderr: on the success path this process is replaced
/// by a native app, so stdout belongs to the apps.
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
