//! Error type shared by storage capabilities and persisted stores.
//!
//! ERROR HANDLING
//! ==============
//! Construction-time failures (unreadable or corrupt stored data) are returned
//! to the caller. Failures inside persistence subscribers are logged and
//! swallowed so the remaining subscribers still observe the change.

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation on {key:?} failed: {message}")]
    Storage { key: String, message: String },
    #[error("stored value under {key:?} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("document update failed: {0}")]
    Document(String),
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this error came from unparseable stored data.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
