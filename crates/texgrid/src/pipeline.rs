//! The read, collect, resolve and render chain.

use std::io::{BufRead, Write};

use texgrid_input::LineReader;
use texgrid_render::MatrixWriter;
use tracing::debug;

use crate::{Config, EntryCollector, Error, Shape};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Shape of the rendered matrix.
    pub shape: Shape,
    /// Number of entries, empty cells included.
    pub entries: usize,
    /// Indent written in front of every output line.
    pub indent: Vec<u8>,
}

/// Read entries from `input` and write the matrix to `output`.
///
/// Nothing is written unless the whole input was read and a shape resolved.
/// Entries are copied byte for byte, whether or not they are valid UTF-8.
///
/// ```
/// let mut out = Vec::new();
/// let summary = texgrid::run(&b"1\n2\n3\n4\n"[..], &mut out, &texgrid::Config::default()).unwrap();
///
/// assert_eq!(summary.shape.to_string(), "2x2");
/// assert_eq!(summary.entries, 4);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\\begin{pmatrix}\n  1 & 2 \\\\\n  3 & 4\n\\end{pmatrix}\n"
/// );
/// ```
pub fn run<R, W>(input: R, output: &mut W, config: &Config) -> Result<Summary, Error>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut reader = LineReader::new(input, config.max_line_bytes);
    let collected = EntryCollector::new(config.max_entries).collect_from(&mut reader)?;
    debug!(
        entries = collected.entries.len(),
        columns = ?collected.columns,
        "input exhausted"
    );

    let shape = Shape::resolve(collected.entries.len(), collected.columns)?;
    debug!(%shape, "matrix shape resolved");

    MatrixWriter::new(config.environment.as_str())
        .indent(&collected.indent)
        .write_to(output, &collected.entries, shape.columns)?;

    Ok(Summary {
        shape,
        entries: collected.entries.len(),
        indent: collected.indent,
    })
}
