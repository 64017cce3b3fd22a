//! Record type stored under each key

use bytes::Bytes;

/// Content type given to records built from plain text
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=UTF-8";

/// A stored value: an opaque payload tagged with a content type
///
/// Records are immutable once built. The payload is a reference-counted
/// `Bytes`, so cloning a record on its way in or out of the store never
/// copies the underlying buffer and no caller can mutate a stored payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    payload: Bytes,
    content_type: String,
}

impl Record {
    /// Create a plain-text record (`text/plain; charset=UTF-8`)
    pub fn from_text(s: impl Into<String>) -> Self {
        let text: String = s.into();
        Record {
            payload: Bytes::from(text),
            content_type: TEXT_PLAIN_UTF8.to_string(),
        }
    }

    /// Create a record from raw bytes and a caller-supplied content type
    ///
    /// Neither argument is validated; an empty content type is kept as is.
    pub fn from_bytes(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Record {
            payload: data.into(),
            content_type: content_type.into(),
        }
    }

    /// The raw payload
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// The content type tag
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Split into payload and content type
    pub fn into_parts(self) -> (Bytes, String) {
        (self.payload, self.content_type)
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Approximate memory usage of this record in bytes
    pub fn memory_usage(&self) -> usize {
        self.payload.len() + self.content_type.len() + std::mem::size_of::<Record>()
    }
}
