//! Message formatting and display.
//!
//! All status output goes through [`OutputFormatter`] so messages carry a
//! consistent prefix per level and color only when stdout is a terminal.
//! Failures never come through here; the binary reports them on stderr.

use std::io;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
}

/// Output formatter for user-facing status messages.
pub struct OutputFormatter {
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a formatter, detecting color support from the environment.
    pub fn new() -> Self {
        Self {
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter with color disabled.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message.
    pub fn info(&self, message: &str) {
        self.print_message(MessageLevel::Info, message);
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        self.print_message(MessageLevel::Success, message);
    }

    /// Print a numbered list item.
    pub fn list_item(&self, index: usize, message: &str) {
        println!("  {index}. {message}");
    }

    /// Print a blank line.
    pub fn blank_line(&self) {
        println!();
    }

    /// Print a message with level-appropriate formatting.
    fn print_message(&self, level: MessageLevel, message: &str) {
        let (prefix, color_code) = match level {
            MessageLevel::Info => ("", ""),
            MessageLevel::Success => ("✓ ", "\x1b[32m"), // Green
        };

        let reset = "\x1b[0m";

        if self.colored && !color_code.is_empty() {
            println!("{color_code}{prefix}{message}{reset}");
        } else {
            println!("{prefix}{message}");
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
