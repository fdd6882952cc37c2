//! # linewise
//!
//! Record-by-record processing for any `std::io::Read`.
//!
//! ## Overview
//!
//! linewise wraps a byte source, splits it into records on a separator byte
//! (newline by default), runs every record through an ordered chain of steps
//! and hands the result back as a plain `Read`:
//! - **map**: rewrite records as bytes or text
//! - **grep**: keep records by predicate or regular expression
//! - **each**: observe records for side effects
//! - **awk**: split records into fields and work with `NR`/`NF`
//!
//! Any step can drop the current record (`Flow::Omit`) or end the stream
//! (`Flow::stop()`, or `Flow::fail(err)` to surface an error).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use linewise::{Flow, Reader};
//! use regex::Regex;
//!
//! let input = "1,name one,12.3#2,second row;7.1#3,three row;15.51";
//!
//! let out = Reader::new(Cursor::new(input))
//!     .set_record_separator(b'#')
//!     .set_field_separator(Regex::new("[,;]").unwrap())
//!     .awk(|line, fields, vars| {
//!         if vars.nf < 3 {
//!             return Flow::fail(format!("short record {line:?}"));
//!         }
//!         match fields[2].parse::<f64>() {
//!             Ok(price) if price < 10.0 => Flow::Omit,
//!             Ok(_) => Flow::Continue(format!("{}/{} - {}", fields[0], vars.nr, fields[1])),
//!             Err(e) => Flow::fail(e),
//!         }
//!     })
//!     .read_all_string()
//!     .unwrap();
//!
//! assert_eq!(out, "1/1 - name one#3/3 - three row");
//! ```
//!
//! ## Streaming semantics
//!
//! - Records keep their separator; only the last record of the source may
//!   lack one, exactly when the source does not end with a separator.
//! - `NR` counts every record scanned, including omitted ones.
//! - Processed bytes wait in a buffer bounded by `buffer_limit`; the reader
//!   only pulls another record while the buffer is below it, so memory stays
//!   bounded while single records may still be arbitrarily long.
//! - Reads of any size work: a record may be delivered over several calls,
//!   and one call may carry several records.
//! - After a stop or failure every byte produced earlier is still delivered.
//!   A failure is then reported once; later reads return `Ok(0)`.
//!
//! ## Features
//!
//! - `json` - `ReaderConfig::from_json_str`
//! - `yaml` - `ReaderConfig::from_yaml_str`
//! - `miette` - Pretty error reporting with miette

mod buffer;
mod chain;
mod collect;
pub mod config;
pub mod error;
pub mod flow;
pub mod io;
pub mod reader;
mod scanner;

pub use chain::AwkVars;
pub use config::{
    DEFAULT_BUFFER_LIMIT, DEFAULT_CHUNK_SIZE, DEFAULT_FIELD_SEPARATOR, DEFAULT_RECORD_SEPARATOR,
    ReaderConfig,
};
pub use error::{BoxError, Error};
pub use flow::Flow;
pub use io::{FileInput, InMemorySource, InputProvider, StdinInput};
pub use reader::Reader;

#[cfg(feature = "miette")]
pub use error::RecordDiagnostic;
