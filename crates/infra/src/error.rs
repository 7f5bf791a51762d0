use thiserror::Error;

/// Result type returned by every repository call.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure of a repository backend.
///
/// A missing entity is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An in-memory store lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    Poisoned(&'static str),

    /// No unused id is left for a new record.
    #[error("id space exhausted: {0}")]
    IdsExhausted(&'static str),

    /// Any other backend failure (I/O, connection, decoding).
    #[error("repository backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
