use thiserror::Error;

/// Errors surfaced by core operations.
///
/// Every variant is recoverable from the caller's point of view: the worst
/// case is an unsaved mutation, never a partial write (the gateway always
/// rewrites the whole record in one `set`).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Bad or missing required input. The caller should re-prompt.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Stale or out-of-range index. The caller should refresh its view
    /// of the collection before retrying.
    #[error("index {index} is out of range for {collection}")]
    Index {
        collection: &'static str,
        index: usize,
    },

    /// Status string not in the recognized set.
    #[error("unrecognized challenge status: {0:?}")]
    InvalidTransition(String),

    /// Malformed import payload. The import is aborted and prior state
    /// is left untouched.
    #[error("invalid user data format: {0}")]
    Format(String),

    /// No resident user in storage. Expected when logged out.
    #[error("no user record found")]
    NotFound,

    /// Stored record failed the schema check. Callers should treat this
    /// as a logged-out state and offer recovery.
    #[error("stored user record is corrupt: {0}")]
    CorruptData(String),

    /// Underlying storage provider failure.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
