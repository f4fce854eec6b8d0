pub mod auth;
pub mod hackathons;
pub mod incubation;
pub mod public;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

/// Public surface: auth flows, published program listings, and the
/// self-service apply endpoints. No authentication required.
pub fn create_public_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/hackathons", get(public::list_hackathons))
        .route("/hackathons/:hackathon_id", get(public::get_hackathon))
        .route(
            "/hackathons/:hackathon_id/apply",
            post(public::apply_to_hackathon),
        )
        .route("/incubation-programs", get(public::list_incubation_programs))
        .route(
            "/incubation-programs/:program_id",
            get(public::get_incubation_program),
        )
        .route(
            "/incubation-programs/:program_id/apply",
            post(public::apply_to_incubation_program),
        )
        .with_state(state)
}

/// Admin back office. Mounted behind the auth and admin-gate middleware.
pub fn create_admin_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/hackathons", get(hackathons::list_hackathons))
        .route("/admin/hackathons", post(hackathons::create_hackathon))
        .route(
            "/admin/hackathons/:hackathon_id",
            put(hackathons::update_hackathon),
        )
        .route(
            "/admin/hackathons/:hackathon_id",
            delete(hackathons::delete_hackathon),
        )
        .route(
            "/admin/hackathons/:hackathon_id/applications",
            get(hackathons::list_applications),
        )
        .route(
            "/admin/hackathons/:hackathon_id/applications/stats",
            get(hackathons::application_stats),
        )
        .route(
            "/admin/hackathons/:hackathon_id/applications/export",
            get(hackathons::export_applications),
        )
        .route(
            "/admin/hackathons/:hackathon_id/applications/:application_id/status",
            put(hackathons::update_application_status),
        )
        .route(
            "/admin/incubation-programs",
            get(incubation::list_programs),
        )
        .route(
            "/admin/incubation-programs",
            post(incubation::create_program),
        )
        .route(
            "/admin/incubation-programs/:program_id",
            put(incubation::update_program),
        )
        .route(
            "/admin/incubation-programs/:program_id",
            delete(incubation::delete_program),
        )
        .route(
            "/admin/incubation-programs/:program_id/applications",
            get(incubation::list_applications),
        )
        .route(
            "/admin/incubation-programs/:program_id/applications/stats",
            get(incubation::application_stats),
        )
        .route(
            "/admin/incubation-programs/:program_id/applications/export",
            get(incubation::export_applications),
        )
        .route(
            "/admin/incubation-programs/:program_id/applications/:application_id/status",
            put(incubation::update_application_status),
        )
        .with_state(state)
}
