pub mod hackathon;
pub mod incubation;

use axum::{
    Json,
    async_trait,
    extract::FromRequest,
    http::Request,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid JSON format"))?;

        value.validate().map_err(|errors| {
            let messages: Vec<String> = errors
                .field_errors()
                .iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |error| {
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field: {}", field))
                    })
                })
                .collect();

            AppError::validation(messages.join("; "))
        })?;

        Ok(ValidatedJson(value))
    }
}

pub mod rules {
    use validator::ValidationError;

    pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
        let mut score = 0;

        if password.len() >= 8 {
            score += 1;
        }
        if password.chars().any(|c| c.is_lowercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_numeric()) {
            score += 1;
        }
        if password
            .chars()
            .any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c))
        {
            score += 1;
        }

        if score < 3 {
            return Err(ValidationError::new("weak_password"));
        }

        Ok(())
    }

    pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::new("invalid_username_format"));
        }

        if username.chars().next().is_none_or(|c| c.is_numeric()) {
            return Err(ValidationError::new("username_starts_with_number"));
        }

        Ok(())
    }
}
