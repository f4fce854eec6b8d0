use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    AppState,
    db::models::{
        api::ApiResponse,
        hackathon::HackathonApplyRequest,
        incubation::IncubationApplyRequest,
    },
    error::AppResult,
    services::{hackathons_service::HackathonsService, incubation_service::IncubationService},
    validation::ValidatedJson,
};

pub async fn list_hackathons(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let hackathons = HackathonsService::list_public(&mut conn)?;

    let response = ApiResponse::success(hackathons, "Hackathons retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_hackathon(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let hackathon = HackathonsService::get_public(&mut conn, hackathon_id)?;

    let response = ApiResponse::success(hackathon, "Hackathon retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn apply_to_hackathon(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<HackathonApplyRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let application = HackathonsService::apply(&mut conn, hackathon_id, &payload)?;

    let response = ApiResponse::created(application, "Application submitted successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_incubation_programs(
    State(state): State<Arc<AppState>>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let programs = IncubationService::list_public(&mut conn)?;

    let response = ApiResponse::success(programs, "Incubation programs retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_incubation_program(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let program = IncubationService::get_public(&mut conn, program_id)?;

    let response = ApiResponse::success(program, "Incubation program retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn apply_to_incubation_program(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<IncubationApplyRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let application = IncubationService::apply(&mut conn, program_id, &payload)?;

    let response = ApiResponse::created(application, "Application submitted successfully");
    Ok((StatusCode::CREATED, Json(response)))
}
