use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    AppState,
    db::models::{
        api::ApiResponse,
        auth::{AuthUser, LoginRequest, RefreshTokenRequest, RegisterRequest},
    },
    error::AppResult,
    services::auth_service::AuthService,
    validation::ValidatedJson,
};

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let user = AuthService::register(&mut conn, state.config.bcrypt_cost, &payload)?;

    let response = ApiResponse::created(AuthUser::from(user), "Account created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let login = AuthService::login(&mut conn, &state.auth_service, &payload)?;

    let response = ApiResponse::success(login, "Login successful");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let login = AuthService::refresh(&mut conn, &state.auth_service, &payload.refresh_token)?;

    let response = ApiResponse::success(login, "Token refreshed");
    Ok((StatusCode::OK, Json(response)))
}
