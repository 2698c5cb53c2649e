use chrono::{Duration, Utc};
use scout_core::Talent;
use scout_search::{search_talents, TalentQuery};

fn talent(name: &str, years: f64, age_minutes: i64) -> Talent {
    let mut t = Talent::new(name);
    t.years_of_experience = Some(years);
    t.availability = Some("Full-time".to_owned());
    t.updated_at = Utc::now() - Duration::minutes(age_minutes);
    t
}

fn dozen() -> Vec<Talent> {
    (0..12)
        .map(|i| talent(&format!("talent-{i}"), f64::from(i), i64::from(i)))
        .collect()
}

#[tokio::test]
async fn pagination_walks_the_matching_set() {
    let rows = dozen();

    let first = search_talents(
        &rows,
        &TalentQuery {
            limit: Some(10),
            offset: Some(0),
            ..TalentQuery::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_count, 12);
    assert!(first.has_more);

    let second = search_talents(
        &rows,
        &TalentQuery {
            limit: Some(10),
            offset: Some(10),
            ..TalentQuery::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.total_count, 12);
    assert!(!second.has_more);

    // The two pages partition the collection without overlap.
    let mut seen: Vec<_> = first.items.iter().chain(&second.items).map(|t| t.id).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 12);
}

#[tokio::test]
async fn page_length_identity_holds_for_every_offset() {
    let rows = dozen();
    let limit = 5usize;
    for offset in [0usize, 3, 5, 10, 12, 50] {
        let page = search_talents(
            &rows,
            &TalentQuery {
                limit: Some(limit as i64),
                offset: Some(offset as i64),
                ..TalentQuery::default()
            },
        )
        .await
        .unwrap();
        let total = page.total_count as usize;
        assert_eq!(page.items.len(), limit.min(total.saturating_sub(offset)));
        assert_eq!(page.has_more, offset + page.items.len() < total);
    }
}

#[tokio::test]
async fn entry_and_expert_levels_select_the_outer_band() {
    let rows = vec![
        talent("one-year", 1.0, 0),
        talent("three-years", 3.0, 1),
        talent("six-years", 6.0, 2),
        talent("eleven-years", 11.0, 3),
    ];
    let query = TalentQuery {
        experience_levels: vec!["Entry Level".to_owned(), "Expert".to_owned()],
        ..TalentQuery::default()
    };
    let page = search_talents(&rows, &query).await.unwrap();
    let names: Vec<&str> = page.items.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(page.total_count, 2);
    assert!(names.contains(&"one-year"));
    assert!(names.contains(&"eleven-years"));
}

#[tokio::test]
async fn filters_combine_conjunctively() {
    let mut rows = dozen();
    rows[0].skills = vec!["Rust".to_owned()];
    rows[1].skills = vec!["Rust".to_owned()];
    rows[1].availability = Some("Part-time".to_owned());

    let query = TalentQuery {
        skills: vec!["Rust".to_owned()],
        availabilities: vec!["Full-time".to_owned()],
        ..TalentQuery::default()
    };
    let page = search_talents(&rows, &query).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].name, "talent-0");
}

#[tokio::test]
async fn empty_matching_set_is_a_normal_result() {
    let rows = dozen();
    let query = TalentQuery {
        skills: vec!["COBOL".to_owned()],
        ..TalentQuery::default()
    };
    let page = search_talents(&rows, &query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert!(!page.has_more);
}
