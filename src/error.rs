//!
//! Error types for keeper operations.

use crate::store::StoreError;

/// Errors returned by `Keeper` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeeperError {
    /// The input failed a structural precondition. Nothing was written.
    #[error("{0}")]
    Validation(String),
    /// No record is stored under the requested id.
    #[error("{0}")]
    NotFound(String),
    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
    /// A stored record could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(String),
}

impl KeeperError {
    pub fn is_validation(&self) -> bool {
        matches!(self, KeeperError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KeeperError::NotFound(_))
    }
}

impl From<serde_json::Error> for KeeperError {
    fn from(err: serde_json::Error) -> Self {
        KeeperError::Codec(err.to_string())
    }
}
