//! Line extraction for newline-delimited text filters.
//!
//! `texgrid-input` turns a raw byte stream into logical lines, whatever mix of
//! line endings the producer used, and offers the small whitespace helpers a
//! filter needs to turn those lines into entries. Lines stay raw bytes
//! throughout, so input that is not valid UTF-8 is never altered.
//!
//! # Quick Start
//!
//! ```
//! use texgrid_input::{trim, LineReader, ReadOutcome};
//!
//! let mut reader = LineReader::with_default_limit(&b"  alpha \r\n beta"[..]);
//! let mut entries = Vec::new();
//!
//! while reader.read_line().unwrap() == ReadOutcome::Line {
//!     entries.push(trim(reader.line()).to_vec());
//! }
//!
//! assert_eq!(entries, [b"alpha".to_vec(), b"beta".to_vec()]);
//! ```
//!
//! # Line endings
//!
//! LF, CR and CR+LF all end a line, and a CR+LF pair never produces an extra
//! empty line, even if the pair is split across reads:
//!
//! ```text
//! "a\nb"    → "a", "b"
//! "a\rb"    → "a", "b"
//! "a\r\nb"  → "a", "b"
//! "a\n\rb"  → "a", "", "b"
//! ```
//!
//! # Testing
//!
//! [`MockStdin`] replaces standard input in tests and can deliver its content
//! in arbitrarily small chunks:
//!
//! ```
//! use texgrid_input::{LineReader, MockStdin, ReadOutcome};
//!
//! let mut reader = LineReader::with_default_limit(MockStdin::chunked("a\r\nb", 1));
//! assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
//! assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
//! assert_eq!(reader.line(), b"b");
//! ```

pub mod env;
mod error;
mod normalize;
mod reader;

pub use error::InputError;
pub use normalize::{indent, trim};
pub use reader::{LineReader, ReadOutcome, ReaderState, DEFAULT_MAX_LINE_BYTES};

pub use env::MockStdin;
