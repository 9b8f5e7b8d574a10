//! Byte source doubles for testability.
//!
//! [`MockStdin`] stands in for standard input. It hands its content out in
//! fixed-size chunks, so tests can place read boundaries anywhere, including
//! between the two bytes of a CR+LF pair. It can also simulate interrupted
//! reads and hard failures.

use std::io::{self, BufRead, Read};

/// Mock standard input for testing.
#[derive(Debug, Clone)]
pub struct MockStdin {
    content: Vec<u8>,
    position: usize,
    chunk_size: usize,
    interrupt_every_read: bool,
    interrupted: bool,
    failure: Option<io::ErrorKind>,
}

impl MockStdin {
    /// Create a mock that yields all of `content` in a single read.
    pub fn piped(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let chunk_size = content.len().max(1);
        Self {
            content,
            position: 0,
            chunk_size,
            interrupt_every_read: false,
            interrupted: false,
            failure: None,
        }
    }

    /// Create a mock that yields at most `chunk_size` bytes per read.
    pub fn chunked(content: impl Into<Vec<u8>>, chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            ..Self::piped(content)
        }
    }

    /// Report `ErrorKind::Interrupted` once before every successful read.
    pub fn interrupting(mut self) -> Self {
        self.interrupt_every_read = true;
        self
    }

    /// Fail with `kind` once the content is exhausted.
    pub fn failing_after(mut self, kind: io::ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    fn check_ready(&mut self) -> io::Result<()> {
        if self.interrupt_every_read && !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        if self.position >= self.content.len() {
            if let Some(kind) = self.failure {
                return Err(io::Error::new(kind, "mock stdin failure"));
            }
        }
        Ok(())
    }
}

impl Read for MockStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for MockStdin {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.check_ready()?;
        let end = (self.position + self.chunk_size).min(self.content.len());
        Ok(&self.content[self.position..end])
    }

    fn consume(&mut self, amount: usize) {
        self.position = (self.position + amount).min(self.content.len());
        self.interrupted = false;
    }
}
