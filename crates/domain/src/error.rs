//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BoardError`] via `From`.

/// Boxed error coming from an outer layer (storage, IO).
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The report store could not be reached or the query failed.
    #[error("report retrieval failed")]
    Storage(#[source] BoxedSource),
}

impl BoardError {
    /// Wrap any storage-layer error.
    pub fn storage(err: impl Into<BoxedSource>) -> Self {
        Self::Storage(err.into())
    }
}
