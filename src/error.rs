use std::io;
use std::path::PathBuf;

/// Failures of the persistent key-value slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("Failed to save tasks: {0}")]
    Storage(#[from] StorageError),
}
