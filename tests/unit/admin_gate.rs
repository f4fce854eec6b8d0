use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware::from_fn,
    routing::get,
};
use tower::ServiceExt;
use uuid::Uuid;

use incubator_backend::db::models::auth::AuthUser;
use incubator_backend::middleware::auth::require_admin;

fn test_user(is_admin: bool) -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        email: "ops@example.com".to_string(),
        username: "ops".to_string(),
        name: "Ops".to_string(),
        is_admin,
    }
}

fn gated_router() -> Router {
    Router::new()
        .route("/admin/ping", get(|| async { "pong" }))
        .layer(from_fn(require_admin))
}

async fn body_json<B>(body: B) -> serde_json::Value
where
    B: hyper::body::HttpBody,
    B::Error: std::fmt::Debug,
{
    let bytes = hyper::body::to_bytes(body).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn admin_passes_the_gate() {
    let mut request = Request::builder()
        .uri("/admin/ping")
        .body(Body::empty())
        .unwrap();
    request.extensions_mut().insert(test_user(true));

    let response = gated_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_admin_gets_the_forbidden_envelope() {
    let mut request = Request::builder()
        .uri("/admin/ping")
        .body(Body::empty())
        .unwrap();
    request.extensions_mut().insert(test_user(false));

    let response = gated_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 403);
    assert_eq!(body["errors"][0]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn missing_auth_context_is_unauthorized() {
    let request = Request::builder()
        .uri("/admin/ping")
        .body(Body::empty())
        .unwrap();

    let response = gated_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 401);
}
