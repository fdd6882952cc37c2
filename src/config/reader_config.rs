//! Serializable reader configuration.

use regex::Regex;
use serde::{Deserialize, Deserializer, de::Error as _};

use super::{
    DEFAULT_BUFFER_LIMIT, DEFAULT_CHUNK_SIZE, DEFAULT_FIELD_SEPARATOR, DEFAULT_RECORD_SEPARATOR,
};
use crate::error::Error;

/// Configuration for a `Reader`.
///
/// Every field is optional when deserializing:
///
/// ```json
/// { "record_separator": "#", "field_separator": "[,;]", "buffer_limit": 1024 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Record separator, a one-byte string such as `"\n"` or `"#"`
    #[serde(deserialize_with = "separator_byte")]
    pub record_separator: u8,
    /// Field separator regex used by awk steps
    pub field_separator: String,
    /// Processed bytes buffered ahead of the caller
    pub buffer_limit: usize,
    /// Bytes pulled from the source per read
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            record_separator: DEFAULT_RECORD_SEPARATOR,
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            buffer_limit: DEFAULT_BUFFER_LIMIT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record separator.
    pub fn with_record_separator(mut self, rs: u8) -> Self {
        self.record_separator = rs;
        self
    }

    /// Set the field separator pattern.
    pub fn with_field_separator(mut self, pattern: impl Into<String>) -> Self {
        self.field_separator = pattern.into();
        self
    }

    /// Set the output buffer limit.
    pub fn with_buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = limit;
        self
    }

    /// Set the source read size.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Check sizes and compile the field separator.
    pub fn validate(&self) -> Result<(), Error> {
        if self.buffer_limit == 0 {
            return Err(Error::Config("buffer_limit must be greater than zero".into()));
        }
        if self.chunk_size == 0 {
            return Err(Error::Config("chunk_size must be greater than zero".into()));
        }
        self.field_separator_regex().map(|_| ())
    }

    pub fn field_separator_regex(&self) -> Result<Regex, Error> {
        Ok(Regex::new(&self.field_separator)?)
    }

    /// Parse and validate a JSON configuration.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML configuration.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn separator_byte<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => Err(D::Error::custom(format!(
            "record separator must be a single byte, got {s:?}"
        ))),
    }
}
