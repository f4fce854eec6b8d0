//! The shared application-review workflow: one generic listing/filter,
//! export, and summary layer reused by every program family instead of a
//! near-identical copy per admin screen.

pub mod export;
pub mod filter;

use serde::{Deserialize, Serialize};

use crate::db::enums::ApplicationStatus;

pub use export::{CsvRecord, export_csv, export_filename};
pub use filter::ApplicationFilter;

/// An application record the review workflow can operate on, regardless of
/// which program family it belongs to.
pub trait Reviewable {
    fn status(&self) -> ApplicationStatus;

    /// Fields the free-text search matches against (name, email,
    /// affiliation and the like).
    fn search_haystack(&self) -> Vec<&str>;

    /// The family-specific categorical dimension: experience level for
    /// hackathons, startup stage for incubation programs.
    fn category(&self) -> Option<&str>;
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

/// Per-program counts rendered as summary tiles on the admin screens.
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: i64,
    pub submitted: i64,
    pub under_review: i64,
    pub approved: i64,
    pub rejected: i64,
    pub waitlisted: i64,
}

pub fn summarize<T: Reviewable>(applications: &[T]) -> ApplicationStats {
    let mut stats = ApplicationStats {
        total: applications.len() as i64,
        ..Default::default()
    };
    for app in applications {
        match app.status() {
            ApplicationStatus::Submitted => stats.submitted += 1,
            ApplicationStatus::UnderReview => stats.under_review += 1,
            ApplicationStatus::Approved => stats.approved += 1,
            ApplicationStatus::Rejected => stats.rejected += 1,
            ApplicationStatus::Waitlisted => stats.waitlisted += 1,
        }
    }
    stats
}
