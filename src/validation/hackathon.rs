use crate::db::models::hackathon::HackathonPayload;
use crate::error::{AppError, AppResult};

/// Create and edit share this form validation; nothing is persisted when any
/// rule fails.
pub fn validate_hackathon_payload(payload: &HackathonPayload) -> AppResult<()> {
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
    if let (Some(open), Some(close)) = (payload.registration_open, payload.registration_close) {
        if open >= close {
            return Err(AppError::validation(
                "Registration open must be before registration close",
            ));
        }
    }
    Ok(())
}
