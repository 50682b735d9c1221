use crate::ports::catalog_store::StorageError;
use thiserror::Error;

/// A book ID typed by the user that is not an integer
///
/// Caught by the menu; the command is aborted and the loop continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid book ID: '{input}'")]
pub struct FormatError {
    pub input: String,
}

/// Errors that end a session
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the user's input or writing the menu failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog could not be written on exit
    #[error("Failed to save catalog: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, CliError>;
