use chrono::{Duration, Utc};
use incubator_backend::db::enums::ProgramStatus;
use incubator_backend::db::models::hackathon::{Hackathon, HackathonPayload};
use incubator_backend::services::hackathons_service::HackathonsService;
use incubator_backend::validation::hackathon::validate_hackathon_payload;
use uuid::Uuid;

fn payload() -> HackathonPayload {
    let now = Utc::now();
    HackathonPayload {
        title: "Fall Hackathon".to_string(),
        subtitle: None,
        description: "48 hours of building".to_string(),
        tags: vec!["ai".to_string()],
        location: "Bengaluru".to_string(),
        start_date: now + Duration::days(30),
        end_date: now + Duration::days(32),
        registration_open: Some(now),
        registration_close: Some(now + Duration::days(29)),
        status: ProgramStatus::Draft,
        published: false,
    }
}

#[test]
fn valid_payload_passes() {
    assert!(validate_hackathon_payload(&payload()).is_ok());
}

#[test]
fn required_fields_are_enforced() {
    let mut p = payload();
    p.title = "  ".to_string();
    assert!(validate_hackathon_payload(&p).is_err());

    let mut p = payload();
    p.description = String::new();
    assert!(validate_hackathon_payload(&p).is_err());

    let mut p = payload();
    p.location = String::new();
    assert!(validate_hackathon_payload(&p).is_err());
}

#[test]
fn start_date_must_precede_end_date() {
    let mut p = payload();
    p.end_date = p.start_date;
    assert!(validate_hackathon_payload(&p).is_err());

    p.end_date = p.start_date - Duration::days(1);
    assert!(validate_hackathon_payload(&p).is_err());
}

#[test]
fn registration_window_must_be_ordered() {
    let mut p = payload();
    p.registration_open = Some(Utc::now() + Duration::days(10));
    p.registration_close = Some(Utc::now() + Duration::days(5));
    assert!(validate_hackathon_payload(&p).is_err());

    // A half-open window is acceptable.
    p.registration_close = None;
    assert!(validate_hackathon_payload(&p).is_ok());
}

fn hackathon(is_featured: bool) -> Hackathon {
    let now = Utc::now();
    Hackathon {
        id: Uuid::new_v4(),
        title: "Fall Hackathon".to_string(),
        subtitle: None,
        description: "48 hours of building".to_string(),
        tags: vec![],
        location: "Bengaluru".to_string(),
        start_date: now,
        end_date: now + Duration::days(2),
        registration_open: None,
        registration_close: None,
        status: ProgramStatus::Published,
        published: true,
        is_featured,
        registration_count: 0,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn featured_hackathon_is_protected_from_deletion() {
    assert!(HackathonsService::ensure_deletable(&hackathon(true)).is_err());
    assert!(HackathonsService::ensure_deletable(&hackathon(false)).is_ok());
}

#[test]
fn visibility_requires_both_gates() {
    let mut h = hackathon(false);
    assert!(h.is_visible());

    h.published = false;
    assert!(!h.is_visible());

    h.published = true;
    h.status = ProgramStatus::Draft;
    assert!(!h.is_visible());
}
