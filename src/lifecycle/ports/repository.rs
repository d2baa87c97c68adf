//! Repository port for resource collection persistence.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Keyed persistence contract for one resource collection.
///
/// Implementations own the internal persisted schema and any
/// transcription between it and the external resource model `T`.
///
/// # Implementation Notes
///
/// Orchestrator calls may race, and the orchestrator does not serialise
/// them. Implementations must ensure:
/// - `insert` is an atomic insert-if-absent, returning
///   [`RepositoryError::Duplicate`] when the key already exists; callers'
///   existence pre-checks are advisory only
/// - `in_use` reflects the referencing subsystem at the moment of the
///   call
/// - `update` merges field-by-field rather than replacing the record
#[async_trait]
pub trait ResourceRepository<T>: Send + Sync {
    /// Returns every record in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] when the store cannot be
    /// reached.
    async fn get_all(&self) -> RepositoryResult<Vec<T>>;

    /// Fetches one record by identifier.
    ///
    /// Returns `None` when no record carries the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the store cannot be reached or
    /// the identifier cannot be coerced to the persisted key type.
    async fn get(&self, id: &str) -> RepositoryResult<Option<T>>;

    /// Reports whether a record with the identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the store cannot be reached or
    /// the identifier is malformed.
    async fn exists(&self, id: &str) -> RepositoryResult<bool>;

    /// Reports whether another subsystem still references the record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the store cannot be reached or
    /// the identifier is malformed.
    async fn in_use(&self, id: &str) -> RepositoryResult<bool>;

    /// Stores a new record, failing atomically on duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Duplicate`] when the key already
    /// exists, or [`RepositoryError::InvalidData`] when the resource
    /// cannot be mapped onto the persisted schema.
    async fn insert(&self, resource: T) -> RepositoryResult<()>;

    /// Merges `delta` field-by-field into the stored record and returns
    /// the merged result.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the
    /// identifier.
    async fn update(&self, id: &str, delta: T) -> RepositoryResult<T>;

    /// Removes the record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the
    /// identifier.
    async fn remove(&self, id: &str) -> RepositoryResult<()>;
}

/// Errors returned by resource repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A record with the same identifier already exists.
    #[error("identifier already exists: {0}")]
    Duplicate(String),

    /// No record carries the given identifier.
    #[error("identifier does not exist: {0}")]
    NotFound(String),

    /// The store cannot be obtained or reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Data crossing the boundary could not be mapped to or from the
    /// persisted schema.
    #[error("invalid data: {0}")]
    InvalidData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a mapping or data-quality error from the schema boundary.
    pub fn invalid_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
