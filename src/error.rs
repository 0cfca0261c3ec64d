//! Console operation errors.

use std::io;

/// Errors returned by console, prompt and progress operations.
///
/// Invalid answers typed at a prompt are never errors; the prompt asks again.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Failed to write to the terminal: {0}")]
    Io(#[from] io::Error),

    /// The line source gave up with `ErrorKind::Interrupted`.
    #[error("Prompt interrupted")]
    Interrupted,

    #[error("Standard input closed while waiting for an answer")]
    InputClosed,

    #[error("Default selection {index} is out of range for {len} option(s)")]
    DefaultOutOfRange { index: usize, len: usize },

    #[error("A choice needs at least one option")]
    NoOptions,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ConsoleError>;

impl ConsoleError {
    /// Whether the error is a cancellation rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Interrupted | Self::InputClosed)
    }
}
