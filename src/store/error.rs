//! Store error types

use thiserror::Error;

/// Errors returned by store operations
///
/// Reading an absent key is the only failure. Writes, deletes and
/// existence checks always succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record is stored under the key
    #[error("key not found: {0}")]
    NotFound(String),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// The key the error refers to
    pub fn key(&self) -> &str {
        match self {
            StoreError::NotFound(key) => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound("/docs/a".to_string());
        assert_eq!(err.to_string(), "key not found: /docs/a");
        assert_eq!(err.key(), "/docs/a");
    }
}
