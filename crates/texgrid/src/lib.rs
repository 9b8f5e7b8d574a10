//! # texgrid - one entry per line in, aligned LaTeX matrix out
//!
//! `texgrid` is a stream filter. It reads matrix entries, one per line, and
//! writes the source of a LaTeX matrix environment with every column aligned:
//!
//! ```text
//! input        output
//! 1            \begin{pmatrix}
//! -12              1 & -12 \\
//! 300            300 &   4
//! 4            \end{pmatrix}
//! ```
//!
//! ## Input rules
//!
//! - Lines may end in LF, CR or CR+LF, mixed freely.
//! - Leading and trailing whitespace of every line is dropped; blank lines are
//!   skipped.
//! - A line `.` is an empty cell.
//! - A line `...` ends the first row and so fixes the column count. Later
//!   `...` lines are ignored.
//! - Without `...`, a perfect square number of entries gives a square matrix,
//!   any other number a single column.
//! - The leading whitespace of the first entry's line is repeated in front of
//!   every output line.
//!
//! ## Crates
//!
//! - [`texgrid_input`]: line extraction and whitespace helpers
//! - [`texgrid_render`]: width measurement and the matrix writer
//!
//! ## Quick Start
//!
//! ```rust
//! use texgrid::{run, Config};
//!
//! let input = "  a\n  b\n...\n  c\n  .\n";
//! let mut output = Vec::new();
//! run(input.as_bytes(), &mut output, &Config::default()).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "  \\begin{pmatrix}\n    a & b \\\\\n    c &  \n  \\end{pmatrix}\n"
//! );
//! ```

mod collector;
mod config;
mod error;
mod pipeline;
mod shape;

pub use collector::{Collected, EntryCollector, LineKind, EMPTY_CELL_MARKER, ROW_END_MARKER};
pub use config::{Config, DEFAULT_MAX_ENTRIES};
pub use error::Error;
pub use pipeline::{run, Summary};
pub use shape::Shape;

// Re-export the building blocks
pub use texgrid_input::{InputError, LineReader, ReadOutcome, DEFAULT_MAX_LINE_BYTES};
pub use texgrid_render::{MatrixWriter, RenderError, DEFAULT_ENVIRONMENT};
