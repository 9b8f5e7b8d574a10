//! Error types for line extraction.

use std::io;

/// Errors that can occur while reading lines from a byte source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying byte source failed.
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Read(err)
    }
}
