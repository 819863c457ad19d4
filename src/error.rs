//! Error handling for the filetransform application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for filetransform operations.
///
/// These are the fatal errors that abort a run before (or instead of)
/// file processing. Per-file read/write failures are not represented
/// here; they are recorded as [`crate::transform::FileError`]
/// descriptors and the run continues.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents an invalid glob in the target-file pattern
    #[error("Pattern error: {0}.")]
    PatternError(String),

    /// Represents a missing or malformed parameter at the invocation boundary
    #[error("Invalid parameters: {0}.")]
    InvalidParameters(String),
}

/// Convenience type alias for Results with filetransform's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
