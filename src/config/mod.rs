//! Configuration for readers.
//!
//! This module provides:
//! - `ReaderConfig`: separators and buffer sizes, loadable from JSON/YAML
//! - the default values a plain `Reader::new` starts from

mod reader_config;

pub use reader_config::ReaderConfig;

/// Record separator used unless overridden.
pub const DEFAULT_RECORD_SEPARATOR: u8 = b'\n';

/// Field separator pattern used unless overridden (runs of whitespace).
pub const DEFAULT_FIELD_SEPARATOR: &str = r"\s+";

/// Processed bytes held before the reader stops pulling records.
pub const DEFAULT_BUFFER_LIMIT: usize = 4096;

/// Bytes requested from the source per read.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;
