//! Error type shared by the generator, settings, CLI and TUI.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// User input that cannot become a generation request.
    #[error("Invalid length: {0}")]
    Validation(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
