//! Error types for elegir-terminal.

use thiserror::Error;

/// Errors that can occur in the terminal backend.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stdout is not attached to a terminal.
    #[error("stdout is not a terminal")]
    NotATty,

    /// The logger was initialized twice.
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}
