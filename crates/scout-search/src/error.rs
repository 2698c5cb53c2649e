//! Search pipeline errors.

use thiserror::Error;

use crate::collection::CollectionError;

/// Errors surfaced by a search invocation.
///
/// Invalid-request variants are detected before storage is touched;
/// storage failures propagate unchanged from the collection capability.
/// An empty matching set is not an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// `limit` must be strictly positive.
    #[error("limit must be positive (got {0})")]
    InvalidLimit(i64),
    /// `offset` must not be negative.
    #[error("offset must not be negative (got {0})")]
    InvalidOffset(i64),
    /// The collection capability failed; never retried here.
    #[error(transparent)]
    Storage(#[from] CollectionError),
}
