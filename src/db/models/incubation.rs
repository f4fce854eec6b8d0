use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::{ApplicationStatus, ProgramStatus};
use crate::review::{CsvRecord, Reviewable};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::incubation_programs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IncubationProgram {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub application_open: Option<chrono::DateTime<chrono::Utc>>,
    pub application_close: Option<chrono::DateTime<chrono::Utc>>,
    pub status: ProgramStatus,
    pub published: bool,
    pub is_featured: bool,
    pub application_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl IncubationProgram {
    pub fn is_visible(&self) -> bool {
        self.published && self.status == ProgramStatus::Published
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::incubation_programs)]
pub struct NewIncubationProgram {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub application_open: Option<chrono::DateTime<chrono::Utc>>,
    pub application_close: Option<chrono::DateTime<chrono::Utc>>,
    pub status: ProgramStatus,
    pub published: bool,
    pub is_featured: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::incubation_programs)]
pub struct IncubationProgramChanges {
    pub title: String,
    pub subtitle: Option<Option<String>>,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub application_open: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub application_close: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub status: ProgramStatus,
    pub published: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize)]
pub struct IncubationProgramPayload {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub application_open: Option<chrono::DateTime<chrono::Utc>>,
    pub application_close: Option<chrono::DateTime<chrono::Utc>>,
    pub status: ProgramStatus,
    #[serde(default)]
    pub published: bool,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::incubation_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IncubationApplication {
    pub id: Uuid,
    pub program_id: Uuid,
    pub founder_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub startup_name: String,
    pub stage: String,
    pub team_size: i32,
    pub pitch: String,
    pub problem_statement: String,
    pub website_url: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    // Stamped only when an operator moves the application to a new status.
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::incubation_applications)]
pub struct NewIncubationApplication {
    pub program_id: Uuid,
    pub founder_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub startup_name: String,
    pub stage: String,
    pub team_size: i32,
    pub pitch: String,
    pub problem_statement: String,
    pub website_url: Option<String>,
    pub status: ApplicationStatus,
}

#[derive(Deserialize, Validate)]
pub struct IncubationApplyRequest {
    #[validate(length(min = 1, max = 100, message = "Founder name is required"))]
    pub founder_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Startup name is required"))]
    pub startup_name: String,

    #[validate(length(min = 1, message = "Stage is required"))]
    pub stage: String,

    #[validate(range(min = 1, max = 100, message = "Team size must be between 1 and 100"))]
    pub team_size: i32,

    #[validate(length(min = 1, message = "Pitch is required"))]
    pub pitch: String,

    #[validate(length(min = 1, message = "Problem statement is required"))]
    pub problem_statement: String,

    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,
}

impl Reviewable for IncubationApplication {
    fn status(&self) -> ApplicationStatus {
        self.status
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![
            self.founder_name.as_str(),
            self.email.as_str(),
            self.startup_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.stage.as_str())
    }
}

impl CsvRecord for IncubationApplication {
    fn headers() -> &'static [&'static str] {
        &[
            "Founder",
            "Email",
            "Phone",
            "Startup",
            "Stage",
            "Team Size",
            "Pitch",
            "Problem Statement",
            "Website",
            "Status",
            "Applied At",
            "Reviewed At",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.founder_name.clone(),
            self.email.clone(),
            self.phone.clone().unwrap_or_default(),
            self.startup_name.clone(),
            self.stage.clone(),
            self.team_size.to_string(),
            self.pitch.clone(),
            self.problem_statement.clone(),
            self.website_url.clone().unwrap_or_default(),
            self.status.to_string(),
            self.created_at.to_rfc3339(),
            self.reviewed_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        ]
    }
}
