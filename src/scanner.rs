//! Record scanner: splits raw source bytes into records on one separator byte.

use std::io::{self, Read};

/// What the scanner can make of the bytes it currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// A record of this many bytes (separator included, if any) is at the front.
    Record(usize),
    /// No separator yet and the source may still have bytes.
    NeedMore,
    /// Nothing left, and nothing will come.
    End,
}

/// Decide on the next token for `pending`, skipping the first `searched`
/// bytes already known not to contain `rs`.
pub(crate) fn next_token(pending: &[u8], searched: usize, rs: u8, exhausted: bool) -> Token {
    match pending[searched..].iter().position(|&b| b == rs) {
        Some(i) => Token::Record(searched + i + 1),
        None if !exhausted => Token::NeedMore,
        None if pending.is_empty() => Token::End,
        None => Token::Record(pending.len()),
    }
}

/// Pulls bytes from a source in fixed chunks and hands out one record at a time.
#[derive(Debug)]
pub(crate) struct Scanner {
    pending: Vec<u8>,
    start: usize,
    exhausted: bool,
    chunk_size: usize,
}

impl Scanner {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            pending: Vec::new(),
            start: 0,
            exhausted: false,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Replace the contents of `record` with the next record.
    ///
    /// Returns `Ok(false)` once the source is exhausted and every byte has
    /// been handed out. The separator is read at call time, so changing it
    /// only affects records not yet scanned.
    pub fn next_record(
        &mut self,
        source: &mut dyn Read,
        rs: u8,
        record: &mut Vec<u8>,
    ) -> io::Result<bool> {
        record.clear();
        let mut searched = 0;
        loop {
            let window = &self.pending[self.start..];
            match next_token(window, searched, rs, self.exhausted) {
                Token::Record(len) => {
                    record.extend_from_slice(&window[..len]);
                    self.start += len;
                    return Ok(true);
                }
                Token::End => return Ok(false),
                Token::NeedMore => {
                    searched = window.len();
                    self.fill(source)?;
                }
            }
        }
    }

    fn fill(&mut self, source: &mut dyn Read) -> io::Result<()> {
        if self.start > 0 {
            self.pending.drain(..self.start);
            self.start = 0;
        }

        let filled = self.pending.len();
        self.pending.resize(filled + self.chunk_size, 0);
        loop {
            match source.read(&mut self.pending[filled..]) {
                Ok(n) => {
                    self.pending.truncate(filled + n);
                    if n == 0 {
                        self.exhausted = true;
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.pending.truncate(filled);
                    return Err(e);
                }
            }
        }
    }
}
