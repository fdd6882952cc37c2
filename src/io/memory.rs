//! In-memory source.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::InputProvider;

/// Fixed bytes served from memory; every `open` starts over.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<[u8]>,
}

impl InMemorySource {
    /// Create a source serving `data` under `id`.
    pub fn new(id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            data: Arc::from(data.into()),
        }
    }

    /// Create a source serving the bytes of a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// Number of bytes served by every `open`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the source holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Cursor over shared bytes, so opening never copies the data.
struct SharedBytes(Arc<[u8]>);

impl AsRef<[u8]> for SharedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(SharedBytes(Arc::clone(&self.data)))))
    }
}
