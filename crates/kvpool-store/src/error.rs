use crate::traits::Key;

/// Errors from pool storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested key has no entry in the pool. Carries the original key
    /// for diagnostics.
    #[error("key not found: {}", printable_key(.0))]
    NotFound(Key),

    /// Failure of the underlying storage medium, unrelated to key absence:
    /// permission problems, entry-type mismatches, disk errors. Callers may
    /// retry these; a [`StoreError::NotFound`] must never be retried as if
    /// it were transient.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific invariant violation. Reserved kind; no core
    /// operation currently produces it.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Render a raw key for diagnostics: verbatim when it is clean UTF-8, hex
/// otherwise.
fn printable_key(key: &[u8]) -> String {
    match std::str::from_utf8(key) {
        Ok(text) => text.to_string(),
        Err(_) => hex::encode(key),
    }
}
