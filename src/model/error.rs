//! Error types for the farescout application.
//!
//! Hierarchical taxonomy built with `thiserror`. Domain-specific errors
//! compose into [`AppError`] via `From`, so call sites propagate with `?`
//! and only the composition root decides what is fatal.
//!
//! Catalog loading errors ([`DataError`]) are non-fatal: the composition
//! root logs them and continues with empty data, so the UI renders its
//! empty states instead of crashing. Config, logging, and terminal errors
//! are fatal and surface before the TUI takes over the screen.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load one of the static data files. Non-fatal at the
    /// composition root: logged, and the affected collection stays empty.
    #[error("Failed to load data: {0}")]
    Data(#[from] DataError),

    /// Failed to load or parse the configuration file. Fatal.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize the tracing subscriber. Fatal.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    /// Fatal; the terminal is restored before exiting.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading the ticket or airport catalog.
///
/// Variants carry the path so the log line tells the user which of the
/// two JSON files is at fault.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file does not exist at the given path.
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// I/O failure reading the data file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON or does not match the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// The underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_error_messages_include_path() {
        let err = DataError::FileNotFound {
            path: PathBuf::from("/tmp/tickets.json"),
        };
        assert!(err.to_string().contains("/tmp/tickets.json"));
    }

    #[test]
    fn data_error_converts_to_app_error() {
        let err = DataError::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Data(_)));
    }

    #[test]
    fn io_error_converts_to_terminal_error() {
        let io = std::io::Error::other("boom");
        let app: AppError = io.into();
        assert!(matches!(app, AppError::Terminal(_)));
    }
}
