//! Talent search: query type, predicate assembly, entry point.

use scout_core::{ExperienceLevel, Talent, YearsRange};
use serde::Deserialize;

use crate::collection::{Collection, Predicate};
use crate::error::SearchError;
use crate::page::{run_search, Page, SearchPage};
use crate::predicate::{
    contains_ci, exact_member, intersects_exact, normalized_query, substring_member_ci,
};

/// A talent search request.
///
/// Empty filters contribute no constraint. Unknown JSON keys are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TalentQuery {
    /// Free-text query matched case-insensitively against name, title,
    /// bio, location, and skills.
    pub query: Option<String>,
    /// Exact skill filter (intersects the talent's skills).
    pub skills: Vec<String>,
    /// Case-insensitive location filter (substring match).
    pub locations: Vec<String>,
    /// Seniority labels resolved through the experience-level table to a
    /// union of years ranges. Unknown labels match nothing.
    pub experience_levels: Vec<String>,
    /// Exact availability filter.
    pub availabilities: Vec<String>,
    /// Page size; defaults to [`crate::DEFAULT_LIMIT`].
    pub limit: Option<i64>,
    /// Page start; defaults to zero.
    pub offset: Option<i64>,
}

impl TalentQuery {
    /// Build one predicate per populated filter.
    #[must_use]
    pub fn predicates(&self) -> Vec<Predicate<Talent>> {
        let mut predicates: Vec<Predicate<Talent>> = Vec::new();

        if !self.skills.is_empty() {
            let set = self.skills.clone();
            predicates.push(Box::new(move |t| intersects_exact(&t.skills, &set)));
        }
        if !self.availabilities.is_empty() {
            let set = self.availabilities.clone();
            predicates.push(Box::new(move |t| {
                exact_member(t.availability.as_deref(), &set)
            }));
        }
        if !self.experience_levels.is_empty() {
            // Unknown labels resolve to no range at all, so a request
            // made up entirely of unknown labels matches nothing.
            let ranges: Vec<YearsRange> = self
                .experience_levels
                .iter()
                .filter_map(|label| ExperienceLevel::from_label(label))
                .map(ExperienceLevel::years)
                .collect();
            predicates.push(Box::new(move |t| {
                t.years_of_experience
                    .is_some_and(|years| ranges.iter().any(|range| range.contains(years)))
            }));
        }
        if !self.locations.is_empty() {
            let set: Vec<String> = self.locations.iter().map(|l| l.to_lowercase()).collect();
            predicates.push(Box::new(move |t| {
                substring_member_ci(t.location.as_deref(), &set)
            }));
        }
        if let Some(needle) = normalized_query(self.query.as_deref()) {
            predicates.push(Box::new(move |t| {
                [
                    Some(t.name.as_str()),
                    t.title.as_deref(),
                    t.bio.as_deref(),
                    t.location.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| contains_ci(field, &needle))
                    || t.skills.iter().any(|skill| contains_ci(skill, &needle))
            }));
        }

        predicates
    }
}

/// Run a talent search against `collection`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidLimit`] / [`SearchError::InvalidOffset`]
/// for bad pagination input, and [`SearchError::Storage`] if the
/// collection read fails.
pub async fn search_talents(
    collection: &dyn Collection<Talent>,
    query: &TalentQuery,
) -> Result<SearchPage<Talent>, SearchError> {
    let page = Page::new(query.limit, query.offset)?;
    run_search(collection, query.predicates(), page).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talent_with_years(years: f64) -> Talent {
        let mut t = Talent::new("t");
        t.years_of_experience = Some(years);
        t
    }

    #[test]
    fn level_filter_unions_ranges() {
        let query = TalentQuery {
            experience_levels: vec!["Entry Level".to_owned(), "Expert".to_owned()],
            ..TalentQuery::default()
        };
        let predicates = query.predicates();
        assert_eq!(predicates.len(), 1);
        let matches = &predicates[0];
        assert!(matches(&talent_with_years(1.0)));
        assert!(!matches(&talent_with_years(3.0)));
        assert!(!matches(&talent_with_years(6.0)));
        assert!(matches(&talent_with_years(11.0)));
    }

    #[test]
    fn unknown_levels_match_nothing() {
        let query = TalentQuery {
            experience_levels: vec!["Wizard".to_owned()],
            ..TalentQuery::default()
        };
        let predicates = query.predicates();
        assert!(!predicates[0](&talent_with_years(3.0)));
    }

    #[test]
    fn missing_years_never_match_a_level_filter() {
        let query = TalentQuery {
            experience_levels: vec!["Entry Level".to_owned()],
            ..TalentQuery::default()
        };
        let predicates = query.predicates();
        assert!(!predicates[0](&Talent::new("no-years")));
    }

    #[test]
    fn free_text_reaches_skills() {
        let query = TalentQuery {
            query: Some("rust".to_owned()),
            ..TalentQuery::default()
        };
        let predicates = query.predicates();
        let mut t = Talent::new("Dana");
        t.skills = vec!["Rust".to_owned()];
        assert!(predicates[0](&t));
    }
}
