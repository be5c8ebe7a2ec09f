use async_trait::async_trait;
use serde_json::Value;

/// Collection names used by the submission service.
pub const ENROLLMENTS: &str = "enrollments";
pub const CONTACTS: &str = "contacts";
pub const STATUS_CHECKS: &str = "status_checks";

/// Gateway to the document store so the service module can be exercised
/// against test doubles. Implementations must preserve insertion order in
/// `find` when the backing store does.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StorageError>;
    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Value>, StorageError>;

    /// Cheap connectivity probe for the health report.
    async fn ping(&self) -> Result<(), StorageError>;
}

/// Error enumeration for document store failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("document not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected: {0}")]
    WriteFailed(String),
}
