use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    AppState,
    db::models::{api::ApiResponse, auth::AuthUser, incubation::IncubationProgramPayload},
    error::AppResult,
    notify::notify_best_effort,
    review::{ApplicationFilter, StatusUpdateRequest},
    services::incubation_service::IncubationService,
};

#[derive(Deserialize)]
pub struct ApplicationQueryParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub stage: Option<String>,
}

impl ApplicationQueryParams {
    fn into_filter(self) -> AppResult<ApplicationFilter> {
        ApplicationFilter::from_query(self.search, self.status, self.stage)
    }
}

pub async fn list_programs(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let programs = IncubationService::list_admin(&mut conn)?;

    let response = ApiResponse::success(programs, "Incubation programs retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_program(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<IncubationProgramPayload>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let program = IncubationService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(program, "Incubation program created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_program(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
    Json(payload): Json<IncubationProgramPayload>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let program = IncubationService::update(&mut conn, program_id, &payload)?;

    let response = ApiResponse::success(program, "Incubation program updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_program(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    IncubationService::delete(&mut conn, program_id)?;

    let response = ApiResponse::<()>::ok("Incubation program deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
    Query(params): Query<ApplicationQueryParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let mut conn = state.db.get()?;
    let applications = IncubationService::list_applications(&mut conn, program_id, &filter)?;

    let response = ApiResponse::success(applications, "Applications retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn application_stats(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let stats = IncubationService::application_stats(&mut conn, program_id)?;

    let response = ApiResponse::success(stats, "Application stats retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_application_status(
    State(state): State<Arc<AppState>>,
    operator: AuthUser,
    Path((program_id, application_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let (application, notification) = {
        let mut conn = state.db.get()?;
        IncubationService::transition_application(
            &mut conn,
            program_id,
            application_id,
            payload.status,
        )?
    };

    tracing::info!(
        operator = %operator.username,
        application_id = %application_id,
        old_status = %notification.old_status,
        new_status = %notification.new_status,
        "Incubation application status changed"
    );

    notify_best_effort(state.notifier.as_ref(), &notification).await;

    let response = ApiResponse::success(application, "Application status updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn export_applications(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<Uuid>,
    Query(params): Query<ApplicationQueryParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let mut conn = state.db.get()?;
    let (filename, csv) = IncubationService::export_applications(&mut conn, program_id, &filter)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    ))
}
