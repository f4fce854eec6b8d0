use crate::db::models::incubation::IncubationProgramPayload;
use crate::error::{AppError, AppResult};

pub fn validate_incubation_payload(payload: &IncubationProgramPayload) -> AppResult<()> {
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::validation("Description is required"));
    }
    if payload.location.trim().is_empty() {
        return Err(AppError::validation("Location is required"));
    }
    if payload.start_date >= payload.end_date {
        return Err(AppError::validation("Start date must be before end date"));
    }
    if let (Some(open), Some(close)) = (payload.application_open, payload.application_close) {
        if open >= close {
            return Err(AppError::validation(
                "Application open must be before application close",
            ));
        }
    }
    // Applications have to open before the cohort itself starts.
    if let Some(open) = payload.application_open {
        if open >= payload.start_date {
            return Err(AppError::validation(
                "Application window must open before the program starts",
            ));
        }
    }
    Ok(())
}
