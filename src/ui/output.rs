//! Output abstraction layer
//!
//! User-facing messages go through [`OutputWriter`] so that commands never
//! print directly. Informational text goes to stderr: stdout is reserved
//! for results (paths, scores) so the tool composes with shell pipelines.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use goto_folder::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("src/app/about");
/// output.error("No workspace folder is available");
/// ```
pub trait OutputWriter {
    /// Write a result line (stdout)
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - results to stdout, messages to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new writer; `quiet` suppresses success and info messages
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}
