//! Entry collection from extracted lines.
//!
//! Every trimmed line falls into one of four classes:
//!
//! | Line          | Effect                                              |
//! | ------------- | --------------------------------------------------- |
//! | empty         | skipped                                             |
//! | `...`         | the entries so far form the first row (once only)   |
//! | `.`           | an empty cell                                       |
//! | anything else | the line itself is a cell                           |

use std::io::BufRead;

use texgrid_input::{indent, trim, LineReader, ReadOutcome};

use crate::Error;

/// Marks the end of the first row.
pub const ROW_END_MARKER: &[u8] = b"...";

/// Stands for an empty cell.
pub const EMPTY_CELL_MARKER: &[u8] = b".";

/// What a trimmed line contributes to the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing.
    Blank,
    /// Closes the first row.
    RowEnd,
    /// An empty cell.
    EmptyCell,
    /// A cell with this content.
    Entry(&'a [u8]),
}

impl<'a> LineKind<'a> {
    /// Classify an already trimmed line.
    pub fn classify(trimmed: &'a [u8]) -> Self {
        match trimmed {
            b"" => LineKind::Blank,
            ROW_END_MARKER => LineKind::RowEnd,
            EMPTY_CELL_MARKER => LineKind::EmptyCell,
            entry => LineKind::Entry(entry),
        }
    }
}

/// The result of collecting a whole input stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    /// Cells in row-major order, as raw bytes.
    pub entries: Vec<Vec<u8>>,
    /// Column count fixed by the row-end marker, if any.
    pub columns: Option<usize>,
    /// Leading whitespace of the line that produced the first entry.
    pub indent: Vec<u8>,
}

/// Accumulates entries line by line.
#[derive(Debug, Clone)]
pub struct EntryCollector {
    collected: Collected,
    max_entries: usize,
}

impl EntryCollector {
    /// Create a collector that fails once more than `max_entries` are added.
    pub fn new(max_entries: usize) -> Self {
        Self {
            collected: Collected::default(),
            max_entries,
        }
    }

    /// Entries collected so far.
    pub fn entries(&self) -> &[Vec<u8>] {
        &self.collected.entries
    }

    /// Column count fixed so far.
    pub fn columns(&self) -> Option<usize> {
        self.collected.columns
    }

    /// Indent captured so far.
    pub fn indent(&self) -> &[u8] {
        &self.collected.indent
    }

    /// Feed one raw line, terminators already stripped.
    pub fn push_line(&mut self, raw: &[u8]) -> Result<(), Error> {
        let collected = &mut self.collected;

        if collected.entries.is_empty() {
            collected.indent = indent(raw).to_vec();
        }

        match LineKind::classify(trim(raw)) {
            LineKind::Blank => return Ok(()),
            LineKind::RowEnd => {
                if collected.columns.is_none() && !collected.entries.is_empty() {
                    let columns = collected.entries.len();
                    tracing::debug!(columns, "first row closed");
                    collected.columns = Some(columns);
                }
            }
            LineKind::EmptyCell => collected.entries.push(Vec::new()),
            LineKind::Entry(entry) => collected.entries.push(entry.to_vec()),
        }

        if collected.entries.len() > self.max_entries {
            return Err(Error::too_many_entries(self.max_entries));
        }

        Ok(())
    }

    /// Drain `reader` and return everything collected.
    ///
    /// A line over the reader's byte cap aborts collection.
    pub fn collect_from<R: BufRead>(
        mut self,
        reader: &mut LineReader<R>,
    ) -> Result<Collected, Error> {
        loop {
            match reader.read_line()? {
                ReadOutcome::Nothing => break,
                ReadOutcome::TooLong => return Err(Error::line_too_long(reader.max_bytes())),
                ReadOutcome::Line => self.push_line(reader.line())?,
            }
        }

        Ok(self.finish())
    }

    /// Stop collecting.
    pub fn finish(self) -> Collected {
        self.collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(lines: &[&str]) -> Collected {
        let mut collector = EntryCollector::new(100);
        for line in lines {
            collector.push_line(line.as_bytes()).unwrap();
        }
        collector.finish()
    }

    fn texts(entries: &[Vec<u8>]) -> Vec<&str> {
        entries
            .iter()
            .map(|entry| std::str::from_utf8(entry).unwrap())
            .collect()
    }

    #[test]
    fn classify_lines() {
        assert_eq!(LineKind::classify(b""), LineKind::Blank);
        assert_eq!(LineKind::classify(b"..."), LineKind::RowEnd);
        assert_eq!(LineKind::classify(b"."), LineKind::EmptyCell);
        assert_eq!(LineKind::classify(b".."), LineKind::Entry(b".."));
        assert_eq!(LineKind::classify(b"...."), LineKind::Entry(b"...."));
        assert_eq!(LineKind::classify(b"x_1"), LineKind::Entry(b"x_1"));
    }

    #[test]
    fn entries_are_trimmed() {
        let collected = collect(&["  a ", "\tb c\t"]);
        assert_eq!(texts(&collected.entries), ["a", "b c"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let collected = collect(&["", "  ", "a", "\t", "b"]);
        assert_eq!(texts(&collected.entries), ["a", "b"]);
    }

    #[test]
    fn dot_is_empty_cell() {
        let collected = collect(&["a", " . ", "b"]);
        assert_eq!(texts(&collected.entries), ["a", "", "b"]);
    }

    #[test]
    fn invalid_utf8_entry_is_kept() {
        let mut collector = EntryCollector::new(100);
        collector.push_line(b"\t caf\xe9 ").unwrap();
        assert_eq!(collector.entries(), [b"caf\xe9".to_vec()]);
        assert_eq!(collector.indent(), b"\t ");
    }

    #[test]
    fn row_end_sets_columns_once() {
        let collected = collect(&["1", "2", "...", "3", "4", "...", "5", "6"]);
        assert_eq!(collected.columns, Some(2));
        assert_eq!(collected.entries.len(), 6);
    }

    #[test]
    fn row_end_before_entries_is_inert() {
        let collected = collect(&["...", "1", "2", "3", "...", "4", "5", "6"]);
        assert_eq!(collected.columns, Some(3));
    }

    #[test]
    fn no_row_end_leaves_columns_unset() {
        assert_eq!(collect(&["1", "2"]).columns, None);
    }

    #[test]
    fn indent_comes_from_first_entry_line() {
        let collected = collect(&["", "    ", "\t  a", "        b"]);
        assert_eq!(collected.indent, b"\t  ");
    }

    #[test]
    fn indent_is_empty_without_leading_whitespace() {
        assert!(collect(&["a", "   b"]).indent.is_empty());
    }

    #[test]
    fn limit_allows_exactly_max_entries() {
        let mut collector = EntryCollector::new(2);
        collector.push_line(b"a").unwrap();
        collector.push_line(b"b").unwrap();
        collector.push_line(b"").unwrap();
        collector.push_line(b"...").unwrap();
        assert_eq!(collector.entries().len(), 2);
        assert_eq!(collector.columns(), Some(2));
        assert!(collector.indent().is_empty());

        let err = collector.push_line(b"c").unwrap_err();
        assert!(matches!(err, Error::TooManyEntries { max_entries: 2 }));
    }

    #[test]
    fn collect_from_reader_with_mixed_endings() {
        let mut reader = LineReader::new(&b"  1\r\n2\r...\n3\r\n4"[..], 64);
        let collected = EntryCollector::new(100).collect_from(&mut reader).unwrap();
        assert_eq!(texts(&collected.entries), ["1", "2", "3", "4"]);
        assert_eq!(collected.columns, Some(2));
        assert_eq!(collected.indent, b"  ");
    }

    #[test]
    fn collect_from_reports_long_lines() {
        let mut reader = LineReader::new(&b"ok\ntoo long\n"[..], 4);
        let err = EntryCollector::new(100).collect_from(&mut reader).unwrap_err();
        assert!(matches!(err, Error::LineTooLong { max_bytes: 4 }));
    }
}
