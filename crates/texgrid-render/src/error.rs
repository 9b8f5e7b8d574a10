//! Error types for matrix rendering.
//!
//! This module provides [`RenderError`], returned by every fallible operation
//! of [`MatrixWriter`](crate::MatrixWriter).

use std::fmt;

/// Error type for matrix rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// The cells cannot be laid out in the requested number of columns.
    ShapeMismatch {
        /// Number of cells handed to the writer.
        cells: usize,
        /// Requested number of columns.
        columns: usize,
    },

    /// Writing to the destination failed.
    IoError(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ShapeMismatch { cells, columns } => write!(
                f,
                "shape mismatch: {} cells cannot fill {} columns",
                cells, columns
            ),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}
