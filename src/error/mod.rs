//! Error types for record processing.
//!
//! This module provides:
//! - `Error`: every failure a `Reader` can surface to its caller
//! - `BoxError`: the boxed error carried by a failing step
//!
//! `std::io::Read::read` can only report `io::Error`, so a pipeline `Error`
//! travels inside one (see `From<Error> for io::Error`). The bulk helpers on
//! `Reader` unwrap it again, which keeps `match`-ing on variants possible.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Boxed error returned by user steps.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// The reader was built without a source.
    #[error("reader has no source")]
    MissingSource,

    /// A lazily opened input provider could not be opened.
    #[error("failed to open input '{id}': {source}")]
    Open {
        id: String,
        #[source]
        source: io::Error,
    },

    /// The underlying source failed while being read.
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// A step failed while processing record `record`.
    #[error("record {record}: {source}")]
    Step {
        record: u64,
        #[source]
        source: BoxError,
    },

    /// A field separator pattern did not compile.
    #[error("invalid field separator: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Output requested as text is not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl Error {
    /// Record number a step failure happened on, if any.
    pub fn record(&self) -> Option<u64> {
        match self {
            Error::Step { record, .. } => Some(*record),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        if !err.get_ref().is_some_and(|inner| inner.is::<Error>()) {
            return Error::Io(err);
        }
        let kind = err.kind();
        match err.into_inner().map(|inner| inner.downcast::<Error>()) {
            Some(Ok(own)) => *own,
            Some(Err(inner)) => Error::Io(io::Error::new(kind, inner)),
            None => Error::Io(io::Error::from(kind)),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            // An inner reader's error must not be mistaken for ours on the way back.
            Error::Io(inner) if !inner.get_ref().is_some_and(|e| e.is::<Error>()) => inner,
            other => io::Error::other(other),
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
