use thiserror::Error;

/// Failure reported by a [`crate::storage::KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage area unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },

    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode task list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a pending link was not attached to a draft.
///
/// The display text is what the user sees in the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkRejection {
    #[error("Please enter a valid URL (must start with http:// or https://)")]
    InvalidNewTaskUrl,

    #[error("Please enter a valid URL")]
    InvalidEditUrl,

    #[error("Maximum number of links: {max}")]
    TooManyLinks { max: usize },
}
