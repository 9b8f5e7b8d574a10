//! Error types for the matrix filter.

use texgrid_input::InputError;
use texgrid_render::RenderError;

/// Errors that stop a filter run.
///
/// Every variant is fatal: nothing is rendered once one of them occurs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single line exceeded the byte cap.
    #[error("line exceeds maximum number of bytes ({max_bytes})")]
    LineTooLong { max_bytes: usize },

    /// More entries than allowed were collected.
    #[error("too many entries given (maximum is {max_entries})")]
    TooManyEntries { max_entries: usize },

    /// The input held no usable entry.
    #[error("no entries given")]
    NoEntries,

    /// The entry count is not a multiple of the explicit column count.
    #[error(
        "unable to determine matrix size: {entries} entries do not fill rows of {columns} (use . for missing entries)"
    )]
    AmbiguousShape { entries: usize, columns: usize },

    /// Reading the input failed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing the matrix failed.
    #[error("failed to write matrix: {0}")]
    Render(#[from] RenderError),
}

impl Error {
    /// Create a line-too-long error for the given cap.
    pub fn line_too_long(max_bytes: usize) -> Self {
        Self::LineTooLong { max_bytes }
    }

    /// Create a too-many-entries error for the given maximum.
    pub fn too_many_entries(max_entries: usize) -> Self {
        Self::TooManyEntries { max_entries }
    }
}
