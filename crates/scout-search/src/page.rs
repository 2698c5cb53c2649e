//! Pagination executor and the result envelope.

use serde::Serialize;

use crate::collection::{Collection, Predicate};
use crate::error::SearchError;

/// Page size applied when a request omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: usize,
    offset: usize,
}

impl Page {
    /// Validate raw pagination input. A missing `limit` defaults to
    /// [`DEFAULT_LIMIT`]; a missing `offset` defaults to zero.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidLimit`] for `limit <= 0` (an
    /// explicit zero is rejected, never silently clamped) and
    /// [`SearchError::InvalidOffset`] for a negative offset.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, SearchError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit <= 0 {
            return Err(SearchError::InvalidLimit(limit));
        }
        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(SearchError::InvalidOffset(offset));
        }
        Ok(Self {
            limit: limit as usize,
            offset: offset as usize,
        })
    }

    /// Maximum number of items in the returned page.
    #[must_use]
    pub fn limit(self) -> usize {
        self.limit
    }

    /// Number of matching entities skipped before the page starts.
    #[must_use]
    pub fn offset(self) -> usize {
        self.offset
    }
}

/// One page of search results plus pagination metadata.
///
/// Immutable once constructed and serialized directly to the wire as
/// `{items, totalCount, hasMore}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<E> {
    /// Matching entities for this page, at most `limit` of them.
    pub items: Vec<E>,
    /// Count of all matching entities, ignoring pagination.
    pub total_count: u64,
    /// Whether matching entities exist beyond this page.
    pub has_more: bool,
}

/// Apply `predicates` against `collection` and assemble the page.
///
/// Two reads are issued: a count of the full matching set, then the
/// bounded page fetch. `has_more` is computed as
/// `offset + items.len() < total_count`.
///
/// # Errors
///
/// Propagates [`SearchError::Storage`] unchanged if either read fails.
pub async fn run_search<E: 'static>(
    collection: &dyn Collection<E>,
    predicates: Vec<Predicate<E>>,
    page: Page,
) -> Result<SearchPage<E>, SearchError> {
    let matches = crate::predicate::conjoin(predicates);
    let total_count = collection.count_matching(&matches).await?;
    let items = collection
        .fetch_page(&matches, page.offset(), page.limit())
        .await?;
    let has_more = (page.offset() as u64 + items.len() as u64) < total_count;
    Ok(SearchPage {
        items,
        total_count,
        has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_ten() {
        let page = Page::new(None, None).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn zero_limit_is_rejected_not_clamped() {
        let err = Page::new(Some(0), None).unwrap_err();
        assert!(matches!(err, SearchError::InvalidLimit(0)));
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert!(matches!(
            Page::new(Some(-5), None).unwrap_err(),
            SearchError::InvalidLimit(-5)
        ));
        assert!(matches!(
            Page::new(None, Some(-1)).unwrap_err(),
            SearchError::InvalidOffset(-1)
        ));
    }

    #[test]
    fn envelope_serialises_camel_case() {
        let page = SearchPage::<u8> {
            items: vec![],
            total_count: 0,
            has_more: false,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 0);
        assert_eq!(json["hasMore"], false);
    }
}
