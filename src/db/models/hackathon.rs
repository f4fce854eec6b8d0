use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::{ApplicationStatus, ProgramStatus};
use crate::review::{CsvRecord, Reviewable};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::hackathons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Hackathon {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub registration_open: Option<chrono::DateTime<chrono::Utc>>,
    pub registration_close: Option<chrono::DateTime<chrono::Utc>>,
    pub status: ProgramStatus,
    pub published: bool,
    pub is_featured: bool,
    // Maintained server-side on registration; read-only for clients.
    pub registration_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Hackathon {
    /// The public site only sees records that carry Published status AND the
    /// separate published flag.
    pub fn is_visible(&self) -> bool {
        self.published && self.status == ProgramStatus::Published
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::hackathons)]
pub struct NewHackathon {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub registration_open: Option<chrono::DateTime<chrono::Utc>>,
    pub registration_close: Option<chrono::DateTime<chrono::Utc>>,
    pub status: ProgramStatus,
    pub published: bool,
    pub is_featured: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::hackathons)]
pub struct HackathonChanges {
    pub title: String,
    pub subtitle: Option<Option<String>>,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub registration_open: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub registration_close: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub status: ProgramStatus,
    pub published: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// One form serves create and edit; the route decides which from the URL.
#[derive(Deserialize)]
pub struct HackathonPayload {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub registration_open: Option<chrono::DateTime<chrono::Utc>>,
    pub registration_close: Option<chrono::DateTime<chrono::Utc>>,
    pub status: ProgramStatus,
    #[serde(default)]
    pub published: bool,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::hackathon_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HackathonApplication {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub affiliation: Option<String>,
    pub experience_level: String,
    pub team_name: Option<String>,
    pub project_idea: String,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::hackathon_applications)]
pub struct NewHackathonApplication {
    pub hackathon_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub affiliation: Option<String>,
    pub experience_level: String,
    pub team_name: Option<String>,
    pub project_idea: String,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub status: ApplicationStatus,
}

#[derive(Deserialize, Validate)]
pub struct HackathonApplyRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,
    pub affiliation: Option<String>,

    #[validate(length(min = 1, message = "Experience level is required"))]
    pub experience_level: String,

    pub team_name: Option<String>,

    #[validate(length(min = 1, message = "Project idea is required"))]
    pub project_idea: String,

    #[validate(url(message = "Invalid portfolio URL"))]
    pub portfolio_url: Option<String>,

    #[validate(url(message = "Invalid GitHub URL"))]
    pub github_url: Option<String>,
}

impl Reviewable for HackathonApplication {
    fn status(&self) -> ApplicationStatus {
        self.status
    }

    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.full_name.as_str(), self.email.as_str()];
        if let Some(affiliation) = &self.affiliation {
            fields.push(affiliation.as_str());
        }
        if let Some(team) = &self.team_name {
            fields.push(team.as_str());
        }
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(self.experience_level.as_str())
    }
}

impl CsvRecord for HackathonApplication {
    fn headers() -> &'static [&'static str] {
        &[
            "Name",
            "Email",
            "Phone",
            "Affiliation",
            "Experience",
            "Team",
            "Project Idea",
            "Portfolio",
            "GitHub",
            "Status",
            "Applied At",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone().unwrap_or_default(),
            self.affiliation.clone().unwrap_or_default(),
            self.experience_level.clone(),
            self.team_name.clone().unwrap_or_default(),
            self.project_idea.clone(),
            self.portfolio_url.clone().unwrap_or_default(),
            self.github_url.clone().unwrap_or_default(),
            self.status.to_string(),
            self.created_at.to_rfc3339(),
        ]
    }
}
