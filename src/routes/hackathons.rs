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
    db::models::{api::ApiResponse, auth::AuthUser, hackathon::HackathonPayload},
    error::AppResult,
    notify::notify_best_effort,
    review::{ApplicationFilter, StatusUpdateRequest},
    services::hackathons_service::HackathonsService,
};

#[derive(Deserialize)]
pub struct ApplicationQueryParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub experience: Option<String>,
}

impl ApplicationQueryParams {
    fn into_filter(self) -> AppResult<ApplicationFilter> {
        ApplicationFilter::from_query(self.search, self.status, self.experience)
    }
}

pub async fn list_hackathons(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let hackathons = HackathonsService::list_admin(&mut conn)?;

    let response = ApiResponse::success(hackathons, "Hackathons retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_hackathon(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HackathonPayload>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let hackathon = HackathonsService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(hackathon, "Hackathon created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_hackathon(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
    Json(payload): Json<HackathonPayload>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let hackathon = HackathonsService::update(&mut conn, hackathon_id, &payload)?;

    let response = ApiResponse::success(hackathon, "Hackathon updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_hackathon(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    HackathonsService::delete(&mut conn, hackathon_id)?;

    let response = ApiResponse::<()>::ok("Hackathon deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
    Query(params): Query<ApplicationQueryParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let mut conn = state.db.get()?;
    let applications = HackathonsService::list_applications(&mut conn, hackathon_id, &filter)?;

    let response = ApiResponse::success(applications, "Applications retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn application_stats(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let stats = HackathonsService::application_stats(&mut conn, hackathon_id)?;

    let response = ApiResponse::success(stats, "Application stats retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_application_status(
    State(state): State<Arc<AppState>>,
    operator: AuthUser,
    Path((hackathon_id, application_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let (application, notification) = {
        let mut conn = state.db.get()?;
        HackathonsService::transition_application(
            &mut conn,
            hackathon_id,
            application_id,
            payload.status,
        )?
    };

    tracing::info!(
        operator = %operator.username,
        application_id = %application_id,
        old_status = %notification.old_status,
        new_status = %notification.new_status,
        "Hackathon application status changed"
    );

    // The transition is already persisted; notification delivery is
    // best-effort and cannot fail this request.
    notify_best_effort(state.notifier.as_ref(), &notification).await;

    let response = ApiResponse::success(application, "Application status updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn export_applications(
    State(state): State<Arc<AppState>>,
    Path(hackathon_id): Path<Uuid>,
    Query(params): Query<ApplicationQueryParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let mut conn = state.db.get()?;
    let (filename, csv) = HackathonsService::export_applications(&mut conn, hackathon_id, &filter)?;

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
