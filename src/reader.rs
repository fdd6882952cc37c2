//! The record reader.
//!
//! `Reader` pulls records from its source through the scanner, runs them
//! through the step chain and keeps the result in a bounded output buffer
//! that `std::io::Read::read` drains. All work happens inside `read`, on the
//! caller's thread; nothing is produced ahead of demand beyond one record
//! plus the buffer limit.

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

use regex::Regex;
use regex::bytes::Regex as BytesRegex;
use tracing::{debug, trace};

use crate::buffer::OutputBuffer;
use crate::chain::{AwkVars, Chain, Step};
use crate::config::{DEFAULT_BUFFER_LIMIT, DEFAULT_CHUNK_SIZE, ReaderConfig};
use crate::error::Error;
use crate::flow::Flow;
use crate::io::InputProvider;
use crate::scanner::Scanner;

enum Upstream<'a> {
    Missing,
    Deferred(Arc<dyn InputProvider>),
    Open(Box<dyn Read + 'a>),
}

impl<'a> Upstream<'a> {
    /// The readable source, opening a deferred provider on first use.
    fn resolve(&mut self) -> Result<&mut (dyn Read + 'a), Error> {
        if let Upstream::Deferred(provider) = self {
            let opened = provider.open().map_err(|source| Error::Open {
                id: provider.id().to_string(),
                source,
            })?;
            *self = Upstream::Open(opened);
        }
        match self {
            Upstream::Open(source) => Ok(source.as_mut()),
            _ => Err(Error::MissingSource),
        }
    }
}

enum Phase {
    Streaming,
    /// Source exhausted or a step stopped the stream.
    Finished,
    /// A failure waiting to be reported once the buffer is drained.
    Failed(Error),
}

/// Record-by-record reader over any byte source.
///
/// Build it with one of the constructors, register steps with the builder
/// methods (each returns the reader), then consume it through `Read` or the
/// `read_all*` helpers.
///
/// ```
/// use std::io::Cursor;
/// use linewise::Reader;
///
/// let out = Reader::new(Cursor::new("111\n222\n333"))
///     .grep(|line| !line.starts_with(b"222"))
///     .map_text(|line| format!("> {line}"))
///     .read_all_string()
///     .unwrap();
/// assert_eq!(out, "> 111\n> 333");
/// ```
pub struct Reader<'a> {
    upstream: Upstream<'a>,
    scanner: Scanner,
    chain: Chain<'a>,
    vars: AwkVars,
    output: OutputBuffer,
    phase: Phase,
    record: Vec<u8>,
}

impl<'a> Reader<'a> {
    /// Wrap `source` with default separators and sizes.
    pub fn new<R: Read + 'a>(source: R) -> Self {
        Self::build(Upstream::Open(Box::new(source)), DEFAULT_CHUNK_SIZE, DEFAULT_BUFFER_LIMIT)
    }

    /// A reader with no source. It fails with `Error::MissingSource` on the
    /// first read, never before.
    pub fn without_source() -> Self {
        Self::build(Upstream::Missing, DEFAULT_CHUNK_SIZE, DEFAULT_BUFFER_LIMIT)
    }

    /// Like `new`, or `without_source` when `source` is `None`.
    pub fn from_optional<R: Read + 'a>(source: Option<R>) -> Self {
        match source {
            Some(source) => Self::new(source),
            None => Self::without_source(),
        }
    }

    /// Open `provider` on the first read instead of now. An open failure is
    /// reported as `Error::Open` by that read.
    pub fn from_provider(provider: Arc<dyn InputProvider>) -> Self {
        Self::build(Upstream::Deferred(provider), DEFAULT_CHUNK_SIZE, DEFAULT_BUFFER_LIMIT)
    }

    /// Wrap `source` using the separators and sizes in `config`.
    pub fn with_config<R: Read + 'a>(source: R, config: &ReaderConfig) -> Result<Self, Error> {
        config.validate()?;
        let mut reader = Self::build(
            Upstream::Open(Box::new(source)),
            config.chunk_size,
            config.buffer_limit,
        );
        reader.vars.rs = config.record_separator;
        reader.vars.fs = config.field_separator_regex()?;
        Ok(reader)
    }

    fn build(upstream: Upstream<'a>, chunk_size: usize, buffer_limit: usize) -> Self {
        Self {
            upstream,
            scanner: Scanner::new(chunk_size),
            chain: Chain::default(),
            vars: AwkVars::default(),
            output: OutputBuffer::new(buffer_limit),
            phase: Phase::Streaming,
            record: Vec::new(),
        }
    }

    fn step(mut self, step: Step<'a>) -> Self {
        self.chain.push(step);
        self
    }

    /// Rewrite every record.
    pub fn map(self, f: impl FnMut(Vec<u8>) -> Vec<u8> + 'a) -> Self {
        self.step(Step::map(f))
    }

    /// Rewrite every record; `f` may also omit it or stop the stream.
    pub fn map_flow(self, f: impl FnMut(Vec<u8>) -> Flow<Vec<u8>> + 'a) -> Self {
        self.step(Step::map_flow(f))
    }

    /// Rewrite every record as text. Records that are not valid UTF-8 end
    /// the stream with an error.
    pub fn map_text(self, f: impl FnMut(&str) -> String + 'a) -> Self {
        self.step(Step::map_text(f))
    }

    /// Text version of `map_flow`.
    pub fn map_text_flow(self, f: impl FnMut(&str) -> Flow<String> + 'a) -> Self {
        self.step(Step::map_text_flow(f))
    }

    /// Keep records for which `f` returns true.
    pub fn grep(self, f: impl FnMut(&[u8]) -> bool + 'a) -> Self {
        self.step(Step::grep(f))
    }

    /// Keep records whose text satisfies `f`.
    pub fn grep_text(self, f: impl FnMut(&str) -> bool + 'a) -> Self {
        self.step(Step::grep_text(f))
    }

    /// Keep records matching `re` (separator included in the haystack).
    pub fn grep_regex(self, re: BytesRegex) -> Self {
        self.step(Step::grep(move |record| re.is_match(record)))
    }

    /// Look at every record without replacing it.
    ///
    /// `f` gets a view of the reader's working buffer, valid for the duration
    /// of the call only. Changes made through it are seen by later steps and
    /// end up in the output; copy the bytes to keep them.
    pub fn each(self, f: impl FnMut(&mut [u8]) + 'a) -> Self {
        self.step(Step::each(f))
    }

    /// Text version of `each`.
    pub fn each_text(self, f: impl FnMut(&str) + 'a) -> Self {
        self.step(Step::each_text(f))
    }

    /// Awk-style processing.
    ///
    /// `f` receives the record without its trailing separator, its fields
    /// split on the field separator, and the reader's `AwkVars` with `nf`
    /// set for this record. The separator is put back on the returned text
    /// unless it already ends with one. Return `Flow::Omit` to drop the
    /// record and `Flow::stop()` or `Flow::fail(..)` to end the stream.
    pub fn awk(self, f: impl FnMut(&str, &[&str], &AwkVars) -> Flow<String> + 'a) -> Self {
        self.step(Step::awk(f))
    }

    /// Split records on `rs` from the next scanned record on.
    pub fn set_record_separator(mut self, rs: u8) -> Self {
        self.vars.rs = rs;
        self
    }

    /// Split awk fields on `fs` from the next record on.
    pub fn set_field_separator(mut self, fs: Regex) -> Self {
        self.vars.fs = fs;
        self
    }

    /// Change how many processed bytes may wait in the output buffer.
    pub fn set_buffer_limit(mut self, limit: usize) -> Self {
        self.output.set_limit(limit);
        self
    }

    /// Current awk variables: `nr` counts records scanned so far.
    pub fn vars(&self) -> &AwkVars {
        &self.vars
    }

    /// Pull and process records until the buffer is full or the stream ends.
    fn fill(&mut self) {
        while matches!(self.phase, Phase::Streaming) && self.output.has_room() {
            if let Err(err) = self.pull() {
                debug!(record = self.vars.nr, error = %err, "record stream failed");
                self.phase = Phase::Failed(err);
            }
        }
    }

    fn pull(&mut self) -> Result<(), Error> {
        let source = self.upstream.resolve()?;
        let mut record = std::mem::take(&mut self.record);
        if !self
            .scanner
            .next_record(source, self.vars.rs, &mut record)
            .map_err(Error::Io)?
        {
            debug!(records = self.vars.nr, "source exhausted");
            self.phase = Phase::Finished;
            return Ok(());
        }

        self.vars.nr += 1;
        trace!(nr = self.vars.nr, len = record.len(), "record scanned");

        match self.chain.run(record, &mut self.vars) {
            Flow::Continue(out) => {
                self.output.push(&out);
                self.record = out;
            }
            Flow::Omit => {}
            Flow::Stop(None) => {
                debug!(nr = self.vars.nr, "stream stopped by step");
                self.phase = Phase::Finished;
            }
            Flow::Stop(Some(source)) => {
                return Err(Error::Step {
                    record: self.vars.nr,
                    source,
                });
            }
        }
        Ok(())
    }

    fn take_failure(&mut self) -> Option<Error> {
        match std::mem::replace(&mut self.phase, Phase::Finished) {
            Phase::Failed(err) => Some(err),
            other => {
                self.phase = other;
                None
            }
        }
    }
}

impl Read for Reader<'_> {
    /// Fill `dst` with processed bytes.
    ///
    /// Bytes produced before a stop or failure are always delivered first.
    /// A failure is then reported by exactly one call; later calls return
    /// `Ok(0)`.
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        if dst.is_empty() {
            return Ok(0);
        }
        self.fill();
        if !self.output.is_empty() {
            return Ok(self.output.drain_into(dst));
        }
        match self.take_failure() {
            Some(err) => Err(err.into()),
            None => Ok(0),
        }
    }
}

impl fmt::Debug for Reader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("vars", &self.vars)
            .field("steps", &self.chain.len())
            .field("buffered", &self.output.len())
            .field("buffer_limit", &self.output.limit())
            .finish()
    }
}
