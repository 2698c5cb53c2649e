//! Read-only collection capability consumed by the search pipeline.

use std::future::Future;
use std::pin::Pin;

use scout_core::Record;
use thiserror::Error;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A boolean condition over one entity.
pub type Predicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Error raised when the collection capability cannot serve a read.
///
/// Propagated to callers unchanged; the search pipeline performs no
/// retry, caching, or fallback.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The underlying store failed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Read capability over a full entity collection.
///
/// Implementations must order results most-recently-updated first, with
/// ties broken by ascending id, so that pagination across calls against
/// an unchanged dataset is stable. Reads are best-effort read-committed:
/// two calls may observe different states if a writer interleaves.
pub trait Collection<E>: Send + Sync {
    /// Count entities matching `matches`, ignoring pagination.
    fn count_matching<'a>(
        &'a self,
        matches: &'a (dyn Fn(&E) -> bool + Send + Sync),
    ) -> BoxFuture<'a, Result<u64, CollectionError>>;

    /// Fetch the matching entities in the documented order, skipping
    /// `offset` and returning at most `limit`. An offset past the end of
    /// the matching set yields an empty page, not an error.
    fn fetch_page<'a>(
        &'a self,
        matches: &'a (dyn Fn(&E) -> bool + Send + Sync),
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<E>, CollectionError>>;
}

/// Count the entities in `rows` satisfying `matches`.
///
/// Reference evaluation of the collection contract over an in-memory
/// slice; store implementations delegate here.
#[must_use]
pub fn count_slice<E>(rows: &[E], matches: &(dyn Fn(&E) -> bool + Send + Sync)) -> u64 {
    rows.iter().filter(|e| matches(e)).count() as u64
}

/// Page through the entities in `rows` satisfying `matches`, in the
/// documented order (updated descending, id ascending).
#[must_use]
pub fn page_slice<E: Record + Clone>(
    rows: &[E],
    matches: &(dyn Fn(&E) -> bool + Send + Sync),
    offset: usize,
    limit: usize,
) -> Vec<E> {
    let mut hits: Vec<E> = rows.iter().filter(|e| matches(e)).cloned().collect();
    hits.sort_by(|a, b| {
        b.updated_at()
            .cmp(&a.updated_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
    hits.into_iter().skip(offset).take(limit).collect()
}

/// A plain vector is the simplest collection: a point-in-time snapshot.
impl<E> Collection<E> for Vec<E>
where
    E: Record + Clone + Send + Sync,
{
    fn count_matching<'a>(
        &'a self,
        matches: &'a (dyn Fn(&E) -> bool + Send + Sync),
    ) -> BoxFuture<'a, Result<u64, CollectionError>> {
        Box::pin(std::future::ready(Ok(count_slice(self, matches))))
    }

    fn fetch_page<'a>(
        &'a self,
        matches: &'a (dyn Fn(&E) -> bool + Send + Sync),
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<E>, CollectionError>> {
        Box::pin(std::future::ready(Ok(page_slice(
            self, matches, offset, limit,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use scout_core::Company;

    fn fixture() -> Vec<Company> {
        let base = Utc::now();
        let mut rows = Vec::new();
        for (i, name) in ["alpha", "beta", "gamma"].iter().enumerate() {
            let mut c = Company::new(*name);
            c.updated_at = base - Duration::minutes(i as i64);
            rows.push(c);
        }
        rows
    }

    #[test]
    fn page_slice_orders_by_updated_desc() {
        let rows = fixture();
        let all: Predicate<Company> = Box::new(|_| true);
        let page = page_slice(&rows, &all, 0, 10);
        let names: Vec<&str> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn page_slice_past_the_end_is_empty() {
        let rows = fixture();
        let all: Predicate<Company> = Box::new(|_| true);
        assert!(page_slice(&rows, &all, 1000, 10).is_empty());
        assert_eq!(count_slice(&rows, &all), 3);
    }

    #[test]
    fn equal_timestamps_tie_break_on_id() {
        let ts = Utc::now();
        let mut rows = fixture();
        for c in &mut rows {
            c.updated_at = ts;
        }
        let all: Predicate<Company> = Box::new(|_| true);
        let first = page_slice(&rows, &all, 0, 3);
        let second = page_slice(&rows, &all, 0, 3);
        let ids: Vec<_> = first.iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(
            ids,
            second.iter().map(|c| c.id).collect::<Vec<_>>()
        );
    }
}
