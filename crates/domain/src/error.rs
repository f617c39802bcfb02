//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts into [`HearthError`] via
//! `#[from]` — no stringly-typed variants.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A storage backend failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Violated domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,
    /// An identifier could not be parsed.
    #[error("malformed id: {0}")]
    InvalidId(String),
    /// A device was built without choosing a kind.
    #[error("device kind must be chosen")]
    MissingKind,
    /// A complaint was submitted without any issue description.
    #[error("complaint must describe at least one issue")]
    EmptyComplaint,
    /// A message body was empty.
    #[error("message must not be empty")]
    EmptyMessage,
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Ticket"`).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// A storage adapter failed to complete an operation.
#[derive(Debug, thiserror::Error)]
#[error("storage backend failed: {message}")]
pub struct StorageError {
    /// Adapter-provided description of the failure.
    pub message: String,
}
