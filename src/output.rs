//! Structured diagnostic output for the cuit CLI.
//!
//! Provides a unified interface for emitting messages in different modes:
//! - Human: colored, symbol-prefixed lines for terminal display
//! - Json: one JSON event per line for programmatic consumption
//! - Quiet: only errors are emitted
//!
//! Verdicts themselves are rendered by [`crate::formatters`]; this sink carries
//! progress, warnings and errors, and by default writes to stderr so that
//! machine-readable verdicts on stdout stay clean.

use colored::{Color, Colorize};
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::config::OutputFormat;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output with symbol prefixes
    Human,
    /// JSON-formatted structured output
    Json,
    /// Silent mode - only errors
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the configured format and the quiet flag.
    pub fn resolve(format: OutputFormat, quiet: bool) -> Self {
        if quiet {
            OutputMode::Quiet
        } else if format == OutputFormat::Json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stderr
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stderr);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stderr()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    /// Output a step message: "→ {msg}" in cyan
    pub fn step(&self, msg: &str) {
        self.prefixed("step", "→", Color::Cyan, msg);
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        self.prefixed("success", "✓", Color::Green, msg);
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        self.prefixed("warning", "⚠", Color::Yellow, msg);
    }

    /// Output an error message: "✗ {msg}" in red
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Quiet => {
                // Errors always output, even in quiet mode
                self.write_line(&format!("✗ {}", msg));
            }
            _ => self.prefixed("error", "✗", Color::Red, msg),
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(&format!("  {}", msg)),
            OutputMode::Json => self.write_json("detail", msg),
            OutputMode::Quiet => {}
        }
    }

    fn prefixed(&self, level: &str, symbol: &str, color: Color, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    symbol.color(color).to_string()
                } else {
                    symbol.to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json(level, msg),
            OutputMode::Quiet => {}
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn write_json(&self, level: &str, msg: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let obj = json!({
                "level": level,
                "msg": msg,
            });
            let _ = writeln!(writer, "{}", obj);
        }
    }
}
