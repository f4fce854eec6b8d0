use crate::db::enums::ApplicationStatus;
use crate::error::{AppError, AppResult};
use crate::review::Reviewable;

/// AND-composed filter over a loaded application list. An unset field is the
/// "all" sentinel and always passes. Pure and synchronous; it is re-run
/// against the full fetch result on every query, which is fine at the record
/// counts these programs see. Built through [`ApplicationFilter::from_query`]
/// so the "all" sentinel handling cannot be skipped.
#[derive(Debug, Default, Clone)]
pub struct ApplicationFilter {
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub category: Option<String>,
}

impl ApplicationFilter {
    /// Builds a filter from raw query parameters. "all" (and the empty
    /// string) is the sentinel for an unset status or category.
    pub fn from_query(
        search: Option<String>,
        status: Option<String>,
        category: Option<String>,
    ) -> AppResult<Self> {
        let status = match status.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(
                ApplicationStatus::parse(raw)
                    .ok_or_else(|| AppError::validation(format!("Unknown status: {}", raw)))?,
            ),
        };

        let category = category.filter(|c| !c.is_empty() && c.as_str() != "all");
        let search = search.filter(|s| !s.trim().is_empty());

        Ok(Self {
            search,
            status,
            category,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.status.is_none() && self.category.is_none()
    }

    pub fn matches<T: Reviewable>(&self, application: &T) -> bool {
        if let Some(status) = self.status {
            if application.status() != status {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if application.category() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !application
                    .search_haystack()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            {
                return false;
            }
        }

        true
    }

    /// Keeps the input order, which the fetch layer sets to newest-first.
    pub fn apply<T: Reviewable>(&self, applications: Vec<T>) -> Vec<T> {
        if self.is_empty() {
            return applications;
        }
        applications
            .into_iter()
            .filter(|app| self.matches(app))
            .collect()
    }
}
