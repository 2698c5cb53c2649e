//! The directory abstraction: CRUD over one entity collection.

use std::sync::Arc;

use scout_search::{BoxFuture, Collection};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by directory write and lookup operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A directory of one entity type: the search [`Collection`] capability
/// plus create/read/update/delete.
///
/// `replace` and `remove` report whether a record with the given id
/// existed; callers turn `false` into their own not-found handling.
pub trait Directory<E>: Collection<E> {
    /// Store a new entity.
    fn insert<'a>(&'a self, entity: E) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Fetch one entity by id.
    fn get<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<E>, StoreError>>;

    /// Overwrite the stored entity with the same id. Returns `false` if
    /// no such record exists.
    fn replace<'a>(&'a self, entity: E) -> BoxFuture<'a, Result<bool, StoreError>>;

    /// Delete by id. Returns `false` if no such record exists.
    fn remove<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool, StoreError>>;

    /// All entities, most recently updated first.
    fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<E>, StoreError>>;
}

/// Shared handle to a directory, as injected into request handlers.
pub type SharedDirectory<E> = Arc<dyn Directory<E>>;
