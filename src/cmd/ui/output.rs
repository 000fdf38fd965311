//! Structured output abstraction for airaware.
//!
//! Provides a unified interface for outputting messages in different modes:
//! - Human: Colored symbol-prefixed output for terminal display
//! - Json: One JSON document per result; progress messages are dropped
//! - Quiet: Only errors are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON documents for programmatic consumption
    Json,
    /// Silent mode - only errors
    Quiet,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            let prefix = if self.is_tty {
                "✓".green().to_string()
            } else {
                "✓".to_string()
            };
            self.write_line(&format!("{} {}", prefix, msg));
        }
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            let prefix = if self.is_tty {
                "⚠".yellow().to_string()
            } else {
                "⚠".to_string()
            };
            self.write_line(&format!("{} {}", prefix, msg));
        }
    }

    /// Output an error message: "✗ {msg}" in red
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✗".red().to_string()
                } else {
                    "✗".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_line(&json!({ "error": msg }).to_string());
            }
            OutputMode::Quiet => {
                // Errors always output, even in quiet mode
                self.write_line(&format!("✗ {}", msg));
            }
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            self.write_line(msg);
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            self.write_line(&format!("  {}", msg));
        }
    }

    /// Emit a result document in JSON mode; no-op otherwise.
    pub fn value<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        if self.mode == OutputMode::Json {
            let json = serde_json::to_string(value)?;
            self.write_line(&json);
        }
        Ok(())
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Check if running in TTY
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }
}
