//! Byte sources a `Reader` can be opened on lazily.
//!
//! This module provides:
//! - `InputProvider`: something that can open a fresh byte stream
//! - `StdinInput` and `FileInput` for the process's own inputs
//! - `InMemorySource` for tests and fixed data
//!
//! Any `std::io::Read` can feed a `Reader` directly through `Reader::new`;
//! providers exist for the cases where opening should wait until the first
//! read, so that building a reader never fails.

mod memory;
mod std_io;

use std::fmt::Debug;
use std::io::Read;

pub use memory::InMemorySource;
pub use std_io::{FileInput, StdinInput};

/// Opens readable byte streams on demand.
pub trait InputProvider: Send + Sync + Debug {
    /// Identifier used in error messages ("-" for stdin, the path for files).
    fn id(&self) -> &str;

    /// Open a new stream positioned at the beginning.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
