use incubator_backend::db::enums::ApplicationStatus;
use incubator_backend::db::models::hackathon::HackathonApplication;
use incubator_backend::review::ApplicationFilter;
use uuid::Uuid;

fn application(
    name: &str,
    email: &str,
    experience: &str,
    status: ApplicationStatus,
) -> HackathonApplication {
    HackathonApplication {
        id: Uuid::new_v4(),
        hackathon_id: Uuid::new_v4(),
        full_name: name.to_string(),
        email: email.to_string(),
        phone: None,
        affiliation: Some("Inc Combinator".to_string()),
        experience_level: experience.to_string(),
        team_name: None,
        project_idea: "An idea".to_string(),
        portfolio_url: None,
        github_url: None,
        status,
        created_at: chrono::Utc::now(),
    }
}

fn sample_set() -> Vec<HackathonApplication> {
    vec![
        application("Ada Lovelace", "ada@example.com", "advanced", ApplicationStatus::Submitted),
        application("Grace Hopper", "grace@example.com", "advanced", ApplicationStatus::Approved),
        application("Alan Turing", "alan@example.com", "beginner", ApplicationStatus::Submitted),
    ]
}

#[test]
fn empty_filter_passes_everything_in_order() {
    let filter = ApplicationFilter::default();
    let result = filter.apply(sample_set());
    assert_eq!(result.len(), 3);
    assert_eq!(result[0].full_name, "Ada Lovelace");
    assert_eq!(result[2].full_name, "Alan Turing");
}

#[test]
fn status_filter_matches_exactly() {
    let filter = ApplicationFilter {
        status: Some(ApplicationStatus::Submitted),
        ..Default::default()
    };
    let result = filter.apply(sample_set());
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|a| a.status == ApplicationStatus::Submitted));
}

#[test]
fn search_is_case_insensitive_substring() {
    let filter = ApplicationFilter {
        search: Some("ADA".to_string()),
        ..Default::default()
    };
    let result = filter.apply(sample_set());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].full_name, "Ada Lovelace");

    // Matches the affiliation field too.
    let filter = ApplicationFilter {
        search: Some("inc comb".to_string()),
        ..Default::default()
    };
    assert_eq!(filter.apply(sample_set()).len(), 3);
}

#[test]
fn combined_filters_equal_the_intersection() {
    let status_only = ApplicationFilter {
        status: Some(ApplicationStatus::Submitted),
        ..Default::default()
    };
    let category_only = ApplicationFilter {
        category: Some("advanced".to_string()),
        ..Default::default()
    };
    let combined = ApplicationFilter {
        status: Some(ApplicationStatus::Submitted),
        category: Some("advanced".to_string()),
        ..Default::default()
    };

    let combined_ids: Vec<Uuid> = sample_set()
        .into_iter()
        .filter(|a| combined.matches(a))
        .map(|a| a.id)
        .collect();
    let sequential_ids: Vec<Uuid> = sample_set()
        .into_iter()
        .filter(|a| status_only.matches(a) && category_only.matches(a))
        .map(|a| a.id)
        .collect();

    assert_eq!(combined_ids.len(), sequential_ids.len());

    // Same predicate set regardless of composition order.
    let both = category_only.apply(status_only.apply(sample_set()));
    let reversed = status_only.apply(category_only.apply(sample_set()));
    assert_eq!(both.len(), reversed.len());
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].full_name, "Ada Lovelace");
}

#[test]
fn from_query_treats_all_as_unset() {
    let filter =
        ApplicationFilter::from_query(Some("  ".to_string()), Some("all".to_string()), Some("all".to_string()))
            .unwrap();
    assert!(filter.is_empty());

    let filter = ApplicationFilter::from_query(None, Some("approved".to_string()), None).unwrap();
    assert_eq!(filter.status, Some(ApplicationStatus::Approved));

    assert!(ApplicationFilter::from_query(None, Some("bogus".to_string()), None).is_err());
}
