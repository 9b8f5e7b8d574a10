//! # texgrid-render - Aligned matrix output
//!
//! `texgrid-render` turns a row-major list of cells into the source of a LaTeX
//! matrix environment, with every column padded to the width of its widest
//! cell. Cells are bytes and are written exactly as given.
//!
//! ## Core Concepts
//!
//! - [`MatrixWriter`]: Environment name and indent, writes to any [`std::io::Write`]
//! - [`display_width`]: Cell width in UTF-8 characters, not bytes
//! - [`column_widths`]: Per-column maximum width of a grid
//! - [`RenderError`]: Shape mismatches and I/O failures
//!
//! ## Quick Start
//!
//! ```rust
//! use texgrid_render::MatrixWriter;
//!
//! let cells = ["1", "0", "-3", "12"];
//! let output = MatrixWriter::new("pmatrix").render(&cells, 2).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "\\begin{pmatrix}\n   1 &  0 \\\\\n  -3 & 12\n\\end{pmatrix}\n"
//! );
//! ```
//!
//! ## Indentation
//!
//! An indent is written in front of every line, so the block can be pasted
//! back into an indented document:
//!
//! ```rust
//! use texgrid_render::MatrixWriter;
//!
//! let output = MatrixWriter::new("bmatrix")
//!     .indent("    ")
//!     .render(&["x"], 1)
//!     .unwrap();
//!
//! assert_eq!(output, "    \\begin{bmatrix}\n      x\n    \\end{bmatrix}\n");
//! ```

mod error;
mod matrix;
mod util;

pub use error::RenderError;
pub use matrix::{MatrixWriter, COLUMN_SEPARATOR, DEFAULT_ENVIRONMENT, ROW_SEPARATOR};
pub use util::{column_widths, display_width, pad_left};
