//! Incremental line extraction from byte streams.
//!
//! [`LineReader`] pulls one logical line per call out of any [`BufRead`]
//! source. Bare LF, bare CR and CR+LF are all accepted as terminators, and a
//! CR+LF pair is always consumed as a single boundary, even when the two bytes
//! arrive in separate calls.
//!
//! Lines are capped at a configurable number of bytes. Hitting the cap is not
//! an error at this level: the reader reports [`ReadOutcome::TooLong`], keeps
//! the overflowing byte, and the next call continues the same logical line.
//!
//! ```
//! use texgrid_input::{LineReader, ReadOutcome};
//!
//! let mut reader = LineReader::new(&b"one\r\ntwo\rthree"[..], 16);
//!
//! assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
//! assert_eq!(reader.line(), b"one");
//! assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
//! assert_eq!(reader.line(), b"two");
//! assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
//! assert_eq!(reader.line(), b"three");
//! assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
//! ```

use std::io::{self, BufRead};

use crate::InputError;

/// Default maximum number of content bytes per line.
pub const DEFAULT_MAX_LINE_BYTES: usize = 2048;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Result of a single [`LineReader::read_line`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// No bytes were extracted: the stream is exhausted or the cap is zero.
    Nothing,
    /// A complete line is available through [`LineReader::line`].
    Line,
    /// The byte cap was hit before a terminator.
    ///
    /// [`LineReader::line`] holds the truncated prefix. Calling
    /// [`LineReader::read_line`] again continues the same logical line.
    TooLong,
}

/// Where the reader stands between two calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Nothing carries over; the next byte is interpreted on its own.
    Clean,
    /// The last byte was a CR terminator. A directly following LF belongs to it.
    AfterCr,
    /// The last call stopped on the byte cap. `pending` is the byte that
    /// overflowed and opens the next call's line.
    Continuation { pending: u8 },
}

/// Reads logical lines from a byte stream.
#[derive(Debug)]
pub struct LineReader<R> {
    input: R,
    max_bytes: usize,
    state: ReaderState,
    line: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader that accepts at most `max_bytes` content bytes per line.
    ///
    /// A cap of zero makes every [`read_line`](Self::read_line) call return
    /// [`ReadOutcome::Nothing`] without touching the stream.
    pub fn new(input: R, max_bytes: usize) -> Self {
        Self {
            input,
            max_bytes,
            state: ReaderState::Clean,
            line: Vec::new(),
        }
    }

    /// Create a reader using [`DEFAULT_MAX_LINE_BYTES`].
    pub fn with_default_limit(input: R) -> Self {
        Self::new(input, DEFAULT_MAX_LINE_BYTES)
    }

    /// The configured byte cap.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// The state carried into the next call.
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Bytes extracted by the most recent call, without terminators.
    pub fn line(&self) -> &[u8] {
        &self.line
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> R {
        self.input
    }

    /// Try to extract one line from the stream.
    ///
    /// The end of the stream also ends a line: an unterminated final fragment
    /// is reported as [`ReadOutcome::Line`]. Reaching it leaves the reader
    /// [`Clean`](ReaderState::Clean).
    pub fn read_line(&mut self) -> Result<ReadOutcome, InputError> {
        if self.max_bytes == 0 {
            return Ok(ReadOutcome::Nothing);
        }

        self.line.clear();

        // bytes taken from the stream in this call, terminators included
        let mut extracted = 0usize;
        // content bytes of the current line
        let mut buffered = 0usize;

        if let ReaderState::Continuation { pending } = self.state {
            self.line.push(pending);
            extracted += 1;
            buffered += 1;
            self.state = ReaderState::Clean;
        }

        while let Some(byte) = self.next_byte()? {
            match byte {
                CR => {
                    self.state = ReaderState::AfterCr;
                    return Ok(ReadOutcome::Line);
                }
                LF if self.state == ReaderState::AfterCr => {
                    self.state = ReaderState::Clean;
                }
                LF => {
                    self.state = ReaderState::Clean;
                    return Ok(ReadOutcome::Line);
                }
                _ => {
                    extracted += 1;
                    buffered += 1;

                    if buffered > self.max_bytes {
                        tracing::trace!(
                            max_bytes = self.max_bytes,
                            "line exceeds byte cap, carrying overflow byte"
                        );
                        self.state = ReaderState::Continuation { pending: byte };
                        return Ok(ReadOutcome::TooLong);
                    }

                    self.state = ReaderState::Clean;
                    self.line.push(byte);
                }
            }
        }

        self.state = ReaderState::Clean;

        if extracted > 0 {
            Ok(ReadOutcome::Line)
        } else {
            Ok(ReadOutcome::Nothing)
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(available) => available.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            if byte.is_some() {
                self.input.consume(1);
            }
            return Ok(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_lines(input: &[u8], max_bytes: usize) -> Vec<(ReadOutcome, Vec<u8>)> {
        let mut reader = LineReader::new(input, max_bytes);
        let mut out = Vec::new();
        loop {
            match reader.read_line().unwrap() {
                ReadOutcome::Nothing => break,
                outcome => out.push((outcome, reader.line().to_vec())),
            }
        }
        out
    }

    fn lines(input: &[u8]) -> Vec<String> {
        collect_lines(input, DEFAULT_MAX_LINE_BYTES)
            .into_iter()
            .map(|(outcome, line)| {
                assert_eq!(outcome, ReadOutcome::Line);
                String::from_utf8(line).unwrap()
            })
            .collect()
    }

    #[test]
    fn empty_stream_yields_nothing() {
        let mut reader = LineReader::new(&b""[..], 8);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
        assert!(reader.line().is_empty());
    }

    #[test]
    fn zero_cap_never_reads() {
        let mut reader = LineReader::new(&b"abc\n"[..], 0);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
        assert_eq!(reader.into_inner(), b"abc\n");
    }

    #[test]
    fn lf_terminated_lines() {
        assert_eq!(lines(b"a\nbb\nccc\n"), ["a", "bb", "ccc"]);
    }

    #[test]
    fn cr_terminated_lines() {
        assert_eq!(lines(b"a\rbb\rccc\r"), ["a", "bb", "ccc"]);
    }

    #[test]
    fn crlf_counts_as_one_terminator() {
        assert_eq!(lines(b"a\r\nb"), ["a", "b"]);
    }

    #[test]
    fn mixed_terminators() {
        assert_eq!(lines(b"a\nb\rc\r\nd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn lf_cr_is_two_terminators() {
        assert_eq!(lines(b"a\n\rb"), ["a", "", "b"]);
    }

    #[test]
    fn blank_lines_are_reported() {
        assert_eq!(lines(b"a\n\nb"), ["a", "", "b"]);
        assert_eq!(lines(b"a\r\rb"), ["a", "", "b"]);
        assert_eq!(lines(b"a\r\n\r\nb"), ["a", "", "b"]);
    }

    #[test]
    fn unterminated_fragment_reported_once() {
        let mut reader = LineReader::new(&b"x\nlast"[..], 8);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.line(), b"last");
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
    }

    #[test]
    fn trailing_crlf_leaves_nothing() {
        let mut reader = LineReader::new(&b"x\r\n"[..], 8);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.state(), ReaderState::AfterCr);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
        assert_eq!(reader.state(), ReaderState::Clean);
    }

    #[test]
    fn buffer_cleared_on_nothing() {
        let mut reader = LineReader::new(&b"abc"[..], 8);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
        assert!(reader.line().is_empty());
    }

    #[test]
    fn line_at_cap_succeeds() {
        let mut reader = LineReader::new(&b"abcd\n"[..], 4);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.line(), b"abcd");
    }

    #[test]
    fn line_over_cap_is_too_long() {
        let mut reader = LineReader::new(&b"abcde\n"[..], 4);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::TooLong);
        assert_eq!(reader.line(), b"abcd");
        assert_eq!(reader.state(), ReaderState::Continuation { pending: b'e' });

        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.line(), b"e");
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
    }

    #[test]
    fn continuation_spans_several_calls() {
        let result = collect_lines(b"abcdefghij\nk", 3);
        assert_eq!(
            result,
            vec![
                (ReadOutcome::TooLong, b"abc".to_vec()),
                (ReadOutcome::TooLong, b"def".to_vec()),
                (ReadOutcome::TooLong, b"ghi".to_vec()),
                (ReadOutcome::Line, b"j".to_vec()),
                (ReadOutcome::Line, b"k".to_vec()),
            ]
        );
    }

    #[test]
    fn continuation_byte_counts_toward_cap() {
        // the carried byte plus two fresh bytes exceed a cap of two
        let result = collect_lines(b"abcd", 2);
        assert_eq!(
            result,
            vec![
                (ReadOutcome::TooLong, b"ab".to_vec()),
                (ReadOutcome::Line, b"cd".to_vec()),
            ]
        );
    }

    #[test]
    fn cap_of_one() {
        let result = collect_lines(b"ab\r\n", 1);
        assert_eq!(
            result,
            vec![
                (ReadOutcome::TooLong, b"a".to_vec()),
                (ReadOutcome::Line, b"b".to_vec()),
            ]
        );
    }

    #[test]
    fn terminators_do_not_count_toward_cap() {
        let mut reader = LineReader::new(&b"ab\r\ncd\r\n"[..], 2);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.line(), b"cd");
    }

    #[test]
    fn trailing_cr_then_end_of_stream_is_clean() {
        let mut reader = LineReader::new(&b"x\r"[..], 8);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.state(), ReaderState::AfterCr);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Nothing);
        assert_eq!(reader.state(), ReaderState::Clean);
    }

    #[test]
    fn invalid_utf8_is_kept_verbatim() {
        let mut reader = LineReader::new(&b"a\xffb\n"[..], 8);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::Line);
        assert_eq!(reader.line(), b"a\xffb");
    }

    #[test]
    fn multibyte_characters_are_counted_in_bytes() {
        // "äö" is four bytes
        let mut reader = LineReader::new("äö\n".as_bytes(), 3);
        assert_eq!(reader.read_line().unwrap(), ReadOutcome::TooLong);
    }
}
