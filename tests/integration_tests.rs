use diesel::prelude::*;
use diesel::sql_query;
use uuid::Uuid;

use incubator_backend::db::enums::{ApplicationStatus, ProgramStatus};
use incubator_backend::db::models::incubation::{
    IncubationApplication, IncubationProgram, NewIncubationApplication, NewIncubationProgram,
};
use incubator_backend::db::repositories::incubation::{
    IncubationApplicationsRepo, IncubationProgramsRepo,
};
use incubator_backend::error::AppError;
use incubator_backend::services::incubation_service::IncubationService;

fn test_connection() -> PgConnection {
    let url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set");
    let mut conn = PgConnection::establish(&url).expect("Failed to connect to the test database");
    ensure_tables(&mut conn);
    conn
}

fn ensure_tables(conn: &mut PgConnection) {
    sql_query(
        "CREATE TABLE IF NOT EXISTS incubation_programs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            subtitle VARCHAR(255),
            description TEXT NOT NULL,
            tags TEXT[] NOT NULL DEFAULT '{}',
            location VARCHAR(255) NOT NULL,
            start_date TIMESTAMPTZ NOT NULL,
            end_date TIMESTAMPTZ NOT NULL,
            application_open TIMESTAMPTZ,
            application_close TIMESTAMPTZ,
            status TEXT NOT NULL,
            published BOOLEAN NOT NULL DEFAULT FALSE,
            is_featured BOOLEAN NOT NULL DEFAULT FALSE,
            application_count INT NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(conn)
    .expect("Failed to create incubation_programs");

    sql_query(
        "CREATE TABLE IF NOT EXISTS incubation_applications (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            program_id UUID NOT NULL REFERENCES incubation_programs (id) ON DELETE CASCADE,
            founder_name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(50),
            startup_name VARCHAR(255) NOT NULL,
            stage VARCHAR(50) NOT NULL,
            team_size INT NOT NULL,
            pitch TEXT NOT NULL,
            problem_statement TEXT NOT NULL,
            website_url TEXT,
            status TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            reviewed_at TIMESTAMPTZ
        )",
    )
    .execute(conn)
    .expect("Failed to create incubation_applications");
}

fn seed_program(conn: &mut PgConnection) -> IncubationProgram {
    let now = chrono::Utc::now();
    let new_program = NewIncubationProgram {
        title: format!("Forge Cohort {}", Uuid::new_v4()),
        subtitle: None,
        description: "Early-stage founder cohort".to_string(),
        tags: vec!["fintech".to_string()],
        location: "Remote".to_string(),
        start_date: now + chrono::Duration::days(30),
        end_date: now + chrono::Duration::days(120),
        application_open: None,
        application_close: None,
        status: ProgramStatus::Published,
        published: true,
        is_featured: false,
    };
    IncubationProgramsRepo::insert(conn, &new_program).expect("Failed to insert program")
}

fn seed_application(conn: &mut PgConnection, program_id: Uuid) -> IncubationApplication {
    let new_application = NewIncubationApplication {
        program_id,
        founder_name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: None,
        startup_name: "Flowmatic".to_string(),
        stage: "seed".to_string(),
        team_size: 4,
        pitch: "Compilers for everyone".to_string(),
        problem_statement: "Programming is inaccessible".to_string(),
        website_url: None,
        status: ApplicationStatus::Submitted,
    };
    IncubationApplicationsRepo::insert(conn, &new_application).expect("Failed to insert application")
}

fn cleanup(conn: &mut PgConnection, program_id: Uuid) {
    IncubationProgramsRepo::delete_by_id(conn, program_id).expect("Failed to clean up program");
}

#[test]
#[ignore = "requires a database"]
fn transition_persists_status_and_stamps_reviewed_at() {
    let mut conn = test_connection();
    let program = seed_program(&mut conn);
    let application = seed_application(&mut conn, program.id);

    assert_eq!(application.status, ApplicationStatus::Submitted);
    assert!(application.reviewed_at.is_none());

    let before = chrono::Utc::now();
    let (updated, notification) = IncubationService::transition_application(
        &mut conn,
        program.id,
        application.id,
        ApplicationStatus::UnderReview,
    )
    .expect("Legal transition must succeed");

    assert_eq!(updated.status, ApplicationStatus::UnderReview);
    assert_eq!(notification.old_status, ApplicationStatus::Submitted);
    assert_eq!(notification.new_status, ApplicationStatus::UnderReview);

    // The new status and the review stamp must survive a re-read.
    let reloaded = IncubationApplicationsRepo::find_for_program(&mut conn, program.id, application.id)
        .expect("Re-read must succeed")
        .expect("Application must still exist");
    assert_eq!(reloaded.status, ApplicationStatus::UnderReview);
    let stamped = reloaded.reviewed_at.expect("reviewed_at must be stamped");
    assert!(stamped >= before);

    cleanup(&mut conn, program.id);
}

#[test]
#[ignore = "requires a database"]
fn illegal_transition_is_rejected_without_a_write() {
    let mut conn = test_connection();
    let program = seed_program(&mut conn);
    let application = seed_application(&mut conn, program.id);

    let (approved, _) = IncubationService::transition_application(
        &mut conn,
        program.id,
        application.id,
        ApplicationStatus::Approved,
    )
    .expect("Legal transition must succeed");
    let stamp_after_approval = approved.reviewed_at.expect("reviewed_at must be stamped");

    let result = IncubationService::transition_application(
        &mut conn,
        program.id,
        application.id,
        ApplicationStatus::Waitlisted,
    );
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let reloaded = IncubationApplicationsRepo::find_for_program(&mut conn, program.id, application.id)
        .expect("Re-read must succeed")
        .expect("Application must still exist");
    assert_eq!(reloaded.status, ApplicationStatus::Approved);
    assert_eq!(reloaded.reviewed_at, Some(stamp_after_approval));

    cleanup(&mut conn, program.id);
}
