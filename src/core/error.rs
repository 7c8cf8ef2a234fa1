//! Error types.
//!
//! Two very different kinds of failure exist in the arcade:
//!
//! - `InputError`: the player typed something the current prompt cannot
//!   accept. These are shown as a notice and the prompt is repeated. They
//!   never leave the game loop.
//! - `PortError`: the host behind the prompts failed (closed stream, I/O
//!   error, exhausted script). These abort the running game and propagate
//!   to the caller as `ArcadeError`.

use thiserror::Error;

/// Result type alias for arcade operations.
pub type Result<T> = std::result::Result<T, ArcadeError>;

/// Player input that a prompt rejected.
///
/// The `Display` text is the notice shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum InputError {
    #[error("Error: Name is invalid.")]
    InvalidName,

    #[error("Error: Only \"Yes\" or \"No\" allowed.")]
    InvalidYesNo,

    #[error("Error: Invalid number.")]
    InvalidNumber,

    #[error("Error: No question detected. Please write a question.")]
    EmptyInput,

    #[error("Error: Operation canceled.")]
    NullInput,

    #[error("Error: Invalid Entry.")]
    InvalidEntry,
}

impl InputError {
    /// Append this notice to a prompt message.
    #[must_use]
    pub fn annotate(self, message: &str) -> String {
        format!("{message}\n{self}")
    }
}

/// Failure of the host environment behind the I/O port.
#[derive(Debug, Error)]
pub enum PortError {
    /// The input stream ended; no further answers will ever arrive.
    #[error("input closed")]
    Closed,

    /// A scripted responder ran out of answers.
    #[error("script exhausted after {0} answers")]
    Exhausted(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Arcade error type.
#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("port error: {0}")]
    Port(#[from] PortError),
}
