//! In-memory directory.
//!
//! The original mock data lived in module-level mutable arrays; here the
//! rows live behind an `RwLock` inside an explicitly constructed value,
//! injected wherever a directory is needed. Concurrent searches take
//! read locks only.

use std::sync::RwLock;

use scout_core::Record;
use scout_search::collection::{count_slice, page_slice};
use scout_search::{BoxFuture, Collection, CollectionError, Predicate};
use uuid::Uuid;

use crate::directory::{Directory, StoreError};

/// A directory backed by a plain in-process vector.
pub struct MemoryDirectory<E> {
    rows: RwLock<Vec<E>>,
}

impl<E> MemoryDirectory<E> {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Create a directory pre-populated with `rows`.
    #[must_use]
    pub fn with_rows(rows: Vec<E>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl<E> Default for MemoryDirectory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Collection<E> for MemoryDirectory<E>
where
    E: Record + Clone + Send + Sync,
{
    fn count_matching<'a>(
        &'a self,
        matches: &'a (dyn Fn(&E) -> bool + Send + Sync),
    ) -> BoxFuture<'a, Result<u64, CollectionError>> {
        let rows = self.rows.read().expect("directory lock poisoned");
        let count = count_slice(&rows, matches);
        Box::pin(std::future::ready(Ok(count)))
    }

    fn fetch_page<'a>(
        &'a self,
        matches: &'a (dyn Fn(&E) -> bool + Send + Sync),
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<E>, CollectionError>> {
        let rows = self.rows.read().expect("directory lock poisoned");
        let page = page_slice(&rows, matches, offset, limit);
        Box::pin(std::future::ready(Ok(page)))
    }
}

impl<E> Directory<E> for MemoryDirectory<E>
where
    E: Record + Clone + Send + Sync + 'static,
{
    fn insert<'a>(&'a self, entity: E) -> BoxFuture<'a, Result<(), StoreError>> {
        self.rows
            .write()
            .expect("directory lock poisoned")
            .push(entity);
        Box::pin(std::future::ready(Ok(())))
    }

    fn get<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<E>, StoreError>> {
        let found = self
            .rows
            .read()
            .expect("directory lock poisoned")
            .iter()
            .find(|e| e.id() == id)
            .cloned();
        Box::pin(std::future::ready(Ok(found)))
    }

    fn replace<'a>(&'a self, entity: E) -> BoxFuture<'a, Result<bool, StoreError>> {
        let mut rows = self.rows.write().expect("directory lock poisoned");
        let replaced = match rows.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        };
        Box::pin(std::future::ready(Ok(replaced)))
    }

    fn remove<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool, StoreError>> {
        let mut rows = self.rows.write().expect("directory lock poisoned");
        let before = rows.len();
        rows.retain(|e| e.id() != id);
        Box::pin(std::future::ready(Ok(rows.len() < before)))
    }

    fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<E>, StoreError>> {
        let rows = self.rows.read().expect("directory lock poisoned");
        let all: Predicate<E> = Box::new(|_| true);
        let listed = page_slice(&rows, &all, 0, rows.len());
        Box::pin(std::future::ready(Ok(listed)))
    }
}
