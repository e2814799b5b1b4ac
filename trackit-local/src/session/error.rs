use thiserror::Error;

/// Failures of the session store backends
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),
}
