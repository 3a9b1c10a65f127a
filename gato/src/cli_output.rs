// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Provides standardized formatting for errors, warnings and hints on stderr

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format("error:", message, Level::Error));
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.format("warning:", message, Level::Warning));
    }

    pub fn info(&self, message: &str) {
        eprintln!("{}", self.format("info:", message, Level::Info));
    }

    fn format(&self, label: &str, message: &str, level: Level) -> String {
        if !self.use_color {
            return format!("{} {}", label, message);
        }
        match level {
            Level::Error => format!("{} {}", label.red().bold(), message),
            Level::Warning => format!("{} {}", label.yellow().bold(), message),
            Level::Info => format!("{} {}", label.blue().bold(), message),
        }
    }
}

#[derive(Clone, Copy)]
enum Level {
    Error,
    Warning,
    Info,
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}
