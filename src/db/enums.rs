use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Visibility status of a program. A record is publicly visible only when
/// status is Published AND the separate `published` flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    Draft,
    Published,
    Cancelled,
}

impl ProgramStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramStatus::Draft => "draft",
            ProgramStatus::Published => "published",
            ProgramStatus::Cancelled => "cancelled",
        }
    }
}

impl FromSql<Text, Pg> for ProgramStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "draft" => Ok(ProgramStatus::Draft),
            "published" => Ok(ProgramStatus::Published),
            "cancelled" => Ok(ProgramStatus::Cancelled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ProgramStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

/// Review status of an application. Every application starts as Submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Waitlisted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
        ApplicationStatus::Waitlisted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Waitlisted => "waitlisted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "submitted" | "pending" => Some(ApplicationStatus::Submitted),
            "under_review" => Some(ApplicationStatus::UnderReview),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            "waitlisted" => Some(ApplicationStatus::Waitlisted),
            _ => None,
        }
    }

    /// Explicit legal-transition table. Approved and Rejected are terminal
    /// except for an explicit reopen back to UnderReview. Re-issuing the
    /// current status is legal so a repeated identical update stays harmless.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        if *self == next {
            return true;
        }
        match self {
            Submitted => matches!(next, UnderReview | Approved | Rejected | Waitlisted),
            UnderReview => matches!(next, Approved | Rejected | Waitlisted),
            Waitlisted => matches!(next, UnderReview | Approved | Rejected),
            Approved => matches!(next, UnderReview),
            Rejected => matches!(next, UnderReview),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromSql<Text, Pg> for ApplicationStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        ApplicationStatus::parse(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for ApplicationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}
