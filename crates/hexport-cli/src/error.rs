//! Error handling for the Hexport CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping
//!
//! The demo itself is deliberately error-light: the only runtime failure
//! paths are a listener that cannot bind and runtime construction.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use hexport_server::ServerError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `hexport-server`.
    ///
    /// Wrapped here so the CLI can attach suggestions without the server
    /// crate knowing anything about terminals or exit codes.
    #[error("Server failed: {0}")]
    Server(#[from] ServerError),

    /// An I/O operation failed (runtime construction, stdio).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Server(ServerError::Bind { host, port, .. }) => vec![
                format!("Could not listen on {host}:{port}"),
                "Check whether another process already holds the port".into(),
                "Pick a free port with --port, or stop the other process".into(),
            ],
            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file descriptors and system limits".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Condition              | Code |
    /// |------------------------|------|
    /// | Success                |  0   |
    /// | Server / system error  |  1   |
    /// | Argument error (clap)  |  2   |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Server(_) | Self::Io { .. } => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        tracing::error!("{}", self);
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn bind_error() -> CliError {
        CliError::Server(ServerError::Bind {
            host: "0.0.0.0".into(),
            port: 3000,
            source: io::Error::from(io::ErrorKind::AddrInUse),
        })
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn bind_failure_suggests_another_port() {
        assert!(
            bind_error()
                .suggestions()
                .iter()
                .any(|s| s.contains("--port"))
        );
    }

    #[test]
    fn io_error_suggestions_non_empty() {
        let err = CliError::Io {
            message: "runtime".into(),
            source: io::Error::from(io::ErrorKind::OutOfMemory),
        };
        assert!(!err.suggestions().is_empty());
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_server_error() {
        assert_eq!(bind_error().exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = bind_error().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_shows_the_cause_chain() {
        let s = bind_error().format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }
}
