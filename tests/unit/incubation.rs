use chrono::{Duration, Utc};
use incubator_backend::db::enums::ProgramStatus;
use incubator_backend::db::models::incubation::{IncubationProgram, IncubationProgramPayload};
use incubator_backend::services::incubation_service::IncubationService;
use incubator_backend::validation::incubation::validate_incubation_payload;
use uuid::Uuid;

fn payload() -> IncubationProgramPayload {
    let now = Utc::now();
    IncubationProgramPayload {
        title: "Spring Cohort".to_string(),
        subtitle: Some("Batch 4".to_string()),
        description: "Twelve weeks of incubation".to_string(),
        tags: vec![],
        location: "Remote".to_string(),
        start_date: now + Duration::days(60),
        end_date: now + Duration::days(150),
        application_open: Some(now),
        application_close: Some(now + Duration::days(45)),
        status: ProgramStatus::Draft,
        published: false,
    }
}

#[test]
fn valid_payload_passes() {
    assert!(validate_incubation_payload(&payload()).is_ok());
}

#[test]
fn application_window_must_be_ordered() {
    let mut p = payload();
    let now = Utc::now();
    p.application_open = Some(now + Duration::days(40));
    p.application_close = Some(now + Duration::days(40));
    assert!(validate_incubation_payload(&p).is_err());
}

#[test]
fn applications_must_open_before_the_program_starts() {
    let mut p = payload();
    p.application_open = Some(p.start_date + Duration::days(1));
    p.application_close = Some(p.start_date + Duration::days(10));
    assert!(validate_incubation_payload(&p).is_err());

    let mut p = payload();
    p.application_open = Some(p.start_date);
    p.application_close = Some(p.start_date + Duration::days(10));
    assert!(validate_incubation_payload(&p).is_err());
}

#[test]
fn featured_program_is_protected_from_deletion() {
    let now = Utc::now();
    let program = IncubationProgram {
        id: Uuid::new_v4(),
        title: "Spring Cohort".to_string(),
        subtitle: None,
        description: "Twelve weeks".to_string(),
        tags: vec![],
        location: "Remote".to_string(),
        start_date: now,
        end_date: now + Duration::days(90),
        application_open: None,
        application_close: None,
        status: ProgramStatus::Published,
        published: true,
        is_featured: true,
        application_count: 0,
        created_at: now,
        updated_at: now,
    };
    assert!(IncubationService::ensure_deletable(&program).is_err());
}
