//! Predicate construction helpers shared by the per-entity builders.
//!
//! Builders pre-lowercase needles and filter sets once, so the closures
//! only lowercase entity fields at evaluation time.

use crate::collection::Predicate;

/// Combine independent predicates into one conjunction.
///
/// An entity matches iff every predicate matches; an empty list matches
/// everything. Evaluation short-circuits on the first failing predicate.
#[must_use]
pub fn conjoin<E: 'static>(predicates: Vec<Predicate<E>>) -> Predicate<E> {
    Box::new(move |entity| predicates.iter().all(|p| p(entity)))
}

/// Normalise a free-text query: trim, drop if empty, lowercase.
pub(crate) fn normalized_query(query: Option<&str>) -> Option<String> {
    let trimmed = query?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring test. `needle_lower` must already be
/// lowercased.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Exact set membership for an optional scalar field.
pub(crate) fn exact_member(value: Option<&str>, set: &[String]) -> bool {
    value.is_some_and(|v| set.iter().any(|s| s == v))
}

/// Exact intersection between an array-valued field and a filter set.
pub(crate) fn intersects_exact(values: &[String], set: &[String]) -> bool {
    values.iter().any(|v| set.iter().any(|s| s == v))
}

/// Case-insensitive substring membership for free-form location fields:
/// the field matches if any entry of `set_lower` occurs within it.
pub(crate) fn substring_member_ci(value: Option<&str>, set_lower: &[String]) -> bool {
    value.is_some_and(|v| {
        let lowered = v.to_lowercase();
        set_lower.iter().any(|s| lowered.contains(s.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::Company;

    #[test]
    fn empty_conjunction_matches_everything() {
        let matches = conjoin::<Company>(Vec::new());
        assert!(matches(&Company::new("anything")));
    }

    #[test]
    fn conjunction_requires_all_predicates() {
        let preds: Vec<Predicate<Company>> = vec![
            Box::new(|c| c.name.starts_with('I')),
            Box::new(|c| c.name.ends_with("Solutions")),
        ];
        let matches = conjoin(preds);
        assert!(matches(&Company::new("Innovatech Solutions")));
        assert!(!matches(&Company::new("Innovatech Labs")));
    }

    #[test]
    fn query_normalisation_drops_whitespace_only_input() {
        assert_eq!(normalized_query(None), None);
        assert_eq!(normalized_query(Some("   ")), None);
        assert_eq!(
            normalized_query(Some("  TechStart ")),
            Some("techstart".to_owned())
        );
    }

    #[test]
    fn exact_membership_is_case_sensitive() {
        let set = vec!["Fintech".to_owned()];
        assert!(exact_member(Some("Fintech"), &set));
        assert!(!exact_member(Some("fintech"), &set));
        assert!(!exact_member(None, &set));
    }

    #[test]
    fn location_membership_is_substring_and_case_insensitive() {
        let set = vec!["san francisco".to_owned()];
        assert!(substring_member_ci(Some("San Francisco, CA"), &set));
        assert!(!substring_member_ci(Some("New York, NY"), &set));
    }

    #[test]
    fn array_intersection_is_exact() {
        let field = vec!["Rust".to_owned(), "Go".to_owned()];
        assert!(intersects_exact(&field, &["Go".to_owned()]));
        assert!(!intersects_exact(&field, &["go".to_owned()]));
    }
}
