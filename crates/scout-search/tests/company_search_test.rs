use chrono::{Duration, Utc};
use scout_core::Company;
use scout_search::{search_companies, CompanyQuery, SearchError};

/// Build a company whose updated_at is `age_minutes` in the past, so the
/// deterministic ordering (most recently updated first) is predictable.
fn company(name: &str, industry: &str, headquarters: &str, age_minutes: i64) -> Company {
    let mut c = Company::new(name);
    c.industry = Some(industry.to_owned());
    c.headquarters = Some(headquarters.to_owned());
    c.updated_at = Utc::now() - Duration::minutes(age_minutes);
    c
}

fn fixture() -> Vec<Company> {
    vec![
        company("TechStart Inc.", "Software", "San Francisco, CA", 0),
        company("Innovatech Solutions", "Software", "New York, NY", 1),
        company("Synergy Corp", "Consulting", "Austin, TX", 2),
    ]
}

#[tokio::test]
async fn lowercase_query_matches_mixed_case_name() {
    let rows = fixture();
    let query = CompanyQuery {
        query: Some("techstart".to_owned()),
        ..CompanyQuery::default()
    };
    let page = search_companies(&rows, &query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "TechStart Inc.");
    assert_eq!(page.total_count, 1);
    assert!(!page.has_more);
}

#[tokio::test]
async fn no_filters_returns_whole_collection_in_order() {
    let rows = fixture();
    let page = search_companies(&rows, &CompanyQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total_count, 3);
    let names: Vec<&str> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["TechStart Inc.", "Innovatech Solutions", "Synergy Corp"]
    );
    assert!(!page.has_more);
}

#[tokio::test]
async fn identical_requests_return_identical_pages() {
    let rows = fixture();
    let query = CompanyQuery {
        industries: vec!["Software".to_owned()],
        ..CompanyQuery::default()
    };
    let first = search_companies(&rows, &query).await.unwrap();
    let second = search_companies(&rows, &query).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn adding_a_filter_never_widens_the_result() {
    let rows = fixture();
    let broad = CompanyQuery {
        query: Some("tech".to_owned()),
        ..CompanyQuery::default()
    };
    let narrow = CompanyQuery {
        query: Some("tech".to_owned()),
        industries: vec!["Software".to_owned()],
        ..CompanyQuery::default()
    };
    let broad_page = search_companies(&rows, &broad).await.unwrap();
    let narrow_page = search_companies(&rows, &narrow).await.unwrap();
    assert!(narrow_page.total_count <= broad_page.total_count);
}

#[tokio::test]
async fn offset_past_matching_set_yields_empty_page() {
    let mut rows = fixture();
    rows.push(company("Quantum Leap", "Software", "Boston, MA", 3));
    rows.push(company("DataForge", "Software", "Seattle, WA", 4));
    let query = CompanyQuery {
        offset: Some(1000),
        ..CompanyQuery::default()
    };
    let page = search_companies(&rows, &query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 5);
    assert!(!page.has_more);
}

#[tokio::test]
async fn invalid_pagination_is_rejected() {
    let rows = fixture();
    let zero_limit = CompanyQuery {
        limit: Some(0),
        ..CompanyQuery::default()
    };
    assert!(matches!(
        search_companies(&rows, &zero_limit).await.unwrap_err(),
        SearchError::InvalidLimit(0)
    ));

    let negative_offset = CompanyQuery {
        offset: Some(-1),
        ..CompanyQuery::default()
    };
    assert!(matches!(
        search_companies(&rows, &negative_offset).await.unwrap_err(),
        SearchError::InvalidOffset(-1)
    ));
}

#[tokio::test]
async fn location_filter_is_case_insensitive_substring() {
    let rows = fixture();
    let query = CompanyQuery {
        locations: vec!["san francisco".to_owned()],
        ..CompanyQuery::default()
    };
    let page = search_companies(&rows, &query).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].name, "TechStart Inc.");
}

#[tokio::test]
async fn industry_filter_is_exact() {
    let rows = fixture();
    let query = CompanyQuery {
        industries: vec!["software".to_owned()],
        ..CompanyQuery::default()
    };
    let page = search_companies(&rows, &query).await.unwrap();
    assert_eq!(page.total_count, 0);
    assert!(page.items.is_empty());
    assert!(!page.has_more);
}
