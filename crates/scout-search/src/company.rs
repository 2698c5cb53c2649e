//! Company search: query type, predicate assembly, entry point.

use scout_core::Company;
use serde::Deserialize;

use crate::collection::{Collection, Predicate};
use crate::error::SearchError;
use crate::page::{run_search, Page, SearchPage};
use crate::predicate::{
    contains_ci, exact_member, intersects_exact, normalized_query, substring_member_ci,
};

/// A company search request.
///
/// Empty filters contribute no constraint. Unknown JSON keys are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyQuery {
    /// Free-text query matched case-insensitively against name,
    /// description, industry, specialties, and headquarters.
    pub query: Option<String>,
    /// Exact industry filter.
    pub industries: Vec<String>,
    /// Case-insensitive headquarters filter (substring match).
    pub locations: Vec<String>,
    /// Exact company-size filter.
    pub sizes: Vec<String>,
    /// Exact hiring-status filter.
    pub hiring_statuses: Vec<String>,
    /// Exact tech-stack filter (intersects the company's stack).
    pub tech_stacks: Vec<String>,
    /// Page size; defaults to [`crate::DEFAULT_LIMIT`].
    pub limit: Option<i64>,
    /// Page start; defaults to zero.
    pub offset: Option<i64>,
}

impl CompanyQuery {
    /// Build one predicate per populated filter.
    ///
    /// Cheap set-membership checks come before the free-text substring
    /// scan so the conjunction short-circuits on them first.
    #[must_use]
    pub fn predicates(&self) -> Vec<Predicate<Company>> {
        let mut predicates: Vec<Predicate<Company>> = Vec::new();

        if !self.industries.is_empty() {
            let set = self.industries.clone();
            predicates.push(Box::new(move |c| exact_member(c.industry.as_deref(), &set)));
        }
        if !self.sizes.is_empty() {
            let set = self.sizes.clone();
            predicates.push(Box::new(move |c| {
                exact_member(c.company_size.as_deref(), &set)
            }));
        }
        if !self.hiring_statuses.is_empty() {
            let set = self.hiring_statuses.clone();
            predicates.push(Box::new(move |c| {
                exact_member(c.hiring_status.as_deref(), &set)
            }));
        }
        if !self.tech_stacks.is_empty() {
            let set = self.tech_stacks.clone();
            predicates.push(Box::new(move |c| intersects_exact(&c.tech_stack, &set)));
        }
        if !self.locations.is_empty() {
            let set: Vec<String> = self.locations.iter().map(|l| l.to_lowercase()).collect();
            predicates.push(Box::new(move |c| {
                substring_member_ci(c.headquarters.as_deref(), &set)
            }));
        }
        if let Some(needle) = normalized_query(self.query.as_deref()) {
            predicates.push(Box::new(move |c| {
                [
                    Some(c.name.as_str()),
                    c.description.as_deref(),
                    c.industry.as_deref(),
                    c.specialties.as_deref(),
                    c.headquarters.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| contains_ci(field, &needle))
            }));
        }

        predicates
    }
}

/// Run a company search against `collection`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidLimit`] / [`SearchError::InvalidOffset`]
/// for bad pagination input, and [`SearchError::Storage`] if the
/// collection read fails.
pub async fn search_companies(
    collection: &dyn Collection<Company>,
    query: &CompanyQuery,
) -> Result<SearchPage<Company>, SearchError> {
    let page = Page::new(query.limit, query.offset)?;
    run_search(collection, query.predicates(), page).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_json_keys_are_ignored() {
        let query: CompanyQuery = serde_json::from_str(
            r#"{"query": "rust", "sortByRelevance": true, "industries": ["Software"]}"#,
        )
        .unwrap();
        assert_eq!(query.query.as_deref(), Some("rust"));
        assert_eq!(query.industries, ["Software"]);
    }

    #[test]
    fn empty_request_builds_no_predicates() {
        assert!(CompanyQuery::default().predicates().is_empty());
    }

    #[test]
    fn whitespace_query_builds_no_predicate() {
        let query = CompanyQuery {
            query: Some("   ".to_owned()),
            ..CompanyQuery::default()
        };
        assert!(query.predicates().is_empty());
    }
}
