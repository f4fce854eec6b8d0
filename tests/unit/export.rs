use incubator_backend::db::enums::ApplicationStatus;
use incubator_backend::db::models::incubation::IncubationApplication;
use incubator_backend::review::{CsvRecord, export_csv, export_filename};
use uuid::Uuid;

fn application(founder: &str, startup: &str) -> IncubationApplication {
    IncubationApplication {
        id: Uuid::new_v4(),
        program_id: Uuid::new_v4(),
        founder_name: founder.to_string(),
        email: "founder@example.com".to_string(),
        phone: None,
        startup_name: startup.to_string(),
        stage: "seed".to_string(),
        team_size: 3,
        pitch: "A pitch".to_string(),
        problem_statement: "A problem".to_string(),
        website_url: None,
        status: ApplicationStatus::Submitted,
        created_at: chrono::Utc::now(),
        reviewed_at: None,
    }
}

#[test]
fn export_has_header_plus_one_line_per_record() {
    let records = vec![
        application("Ada", "Looms"),
        application("Grace", "Compilers"),
    ];
    let csv = export_csv(&records).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Founder"));
    assert!(lines[1].contains("Ada"));
    assert!(lines[2].contains("Grace"));
}

#[test]
fn every_row_has_the_header_field_count() {
    let records = vec![application("Ada", "Looms")];
    let csv = export_csv(&records).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().len();
    assert_eq!(headers, IncubationApplication::headers().len());
    for row in reader.records() {
        assert_eq!(row.unwrap().len(), headers);
    }
}

#[test]
fn embedded_quotes_and_newlines_survive_a_round_trip() {
    let mut tricky = application("Ada \"The Countess\" Lovelace", "Looms,\nUnlimited");
    tricky.pitch = "line one\nline two".to_string();

    let csv = export_csv(&[tricky]).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[0], "Ada \"The Countess\" Lovelace");
    assert_eq!(&record[3], "Looms,\nUnlimited");
    assert_eq!(&record[6], "line one\nline two");
}

#[test]
fn empty_export_is_just_the_header() {
    let csv = export_csv::<IncubationApplication>(&[]).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn filename_strips_non_alphanumerics_and_lowercases() {
    assert_eq!(export_filename("Spring Cohort 2026!"), "springcohort2026.csv");
    assert_eq!(export_filename("AI / ML Hackathon"), "aimlhackathon.csv");
    assert_eq!(export_filename("!!!"), "applications.csv");
}
