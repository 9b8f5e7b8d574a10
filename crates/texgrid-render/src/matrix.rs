//! LaTeX matrix environment writer.
//!
//! [`MatrixWriter`] lays a row-major slice of cells out as the body of a
//! matrix environment. Every column is as wide as its widest cell and cells are
//! right-aligned within it:
//!
//! ```text
//! \begin{pmatrix}
//!     1 &  0 \\
//!   -12 & 42
//! \end{pmatrix}
//! ```

use std::io::{self, Write};

use crate::util::{column_widths, pad_left};
use crate::RenderError;

/// Environment used when none is given.
pub const DEFAULT_ENVIRONMENT: &str = "pmatrix";

/// Placed between two cells of a row.
pub const COLUMN_SEPARATOR: &str = " & ";

/// Placed at the end of every row but the last.
pub const ROW_SEPARATOR: &str = " \\\\";

/// Writes cells as a LaTeX matrix environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixWriter {
    /// Name of the environment, e.g. `pmatrix` or `bmatrix`.
    environment: String,
    /// Prefix for every output line.
    indent: Vec<u8>,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}

impl MatrixWriter {
    /// Create a writer for the named environment.
    pub fn new(environment: impl Into<String>) -> Self {
        MatrixWriter {
            environment: environment.into(),
            indent: Vec::new(),
        }
    }

    /// Set the prefix written in front of every line.
    pub fn indent(mut self, indent: impl AsRef<[u8]>) -> Self {
        self.indent = indent.as_ref().to_vec();
        self
    }

    /// Get the environment name.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Get the line prefix.
    pub fn get_indent(&self) -> &[u8] {
        &self.indent
    }

    /// Write the environment for `cells`, laid out in `columns` columns.
    ///
    /// Cells are written byte for byte. Nothing is written if `cells` cannot
    /// fill complete rows.
    pub fn write_to<W, S>(
        &self,
        out: &mut W,
        cells: &[S],
        columns: usize,
    ) -> Result<(), RenderError>
    where
        W: Write + ?Sized,
        S: AsRef<[u8]>,
    {
        if columns == 0 || cells.len() % columns != 0 {
            return Err(RenderError::ShapeMismatch {
                cells: cells.len(),
                columns,
            });
        }

        let widths = column_widths(cells, columns);
        let indent = self.indent.as_slice();

        out.write_all(indent)?;
        writeln!(out, "\\begin{{{}}}", self.environment)?;
        out.write_all(indent)?;
        out.write_all(b"  ")?;

        for (i, row) in cells.chunks_exact(columns).enumerate() {
            if i > 0 {
                out.write_all(ROW_SEPARATOR.as_bytes())?;
                out.write_all(b"\n")?;
                out.write_all(indent)?;
                out.write_all(b"  ")?;
            }

            let mut line = Vec::new();
            for (j, (cell, width)) in row.iter().zip(&widths).enumerate() {
                if j > 0 {
                    line.extend_from_slice(COLUMN_SEPARATOR.as_bytes());
                }
                line.extend_from_slice(&pad_left(cell, *width));
            }
            out.write_all(&line)?;
        }

        writeln!(out)?;
        out.write_all(indent)?;
        writeln!(out, "\\end{{{}}}", self.environment)?;
        out.flush()?;

        Ok(())
    }

    /// Render text cells into a string.
    pub fn render<S: AsRef<str>>(
        &self,
        cells: &[S],
        columns: usize,
    ) -> Result<String, RenderError> {
        let cells: Vec<&[u8]> = cells.iter().map(|cell| cell.as_ref().as_bytes()).collect();
        let mut buf = Vec::new();
        self.write_to(&mut buf, &cells, columns)?;
        String::from_utf8(buf)
            .map_err(|err| RenderError::IoError(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
