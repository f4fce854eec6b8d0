use axum::{Router, Server, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use incubator_backend::notify::{LogNotifier, Notifier, WebhookNotifier};
use incubator_backend::{AppState, db::DbPool};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = incubator_backend::config::Config::from_env().expect("Failed to load config");
    incubator_backend::init_tracing(&config);

    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(Duration::from_secs(config.database_connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    let redis = redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");

    let notifier: Arc<dyn Notifier> = match &config.notification_webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(
            url.clone(),
            Duration::from_secs(config.notification_timeout_secs),
        )),
        None => Arc::new(LogNotifier),
    };

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    let state = Arc::new(AppState::new(db, redis, config, notifier));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_routes = incubator_backend::routes::create_public_router(state.clone());

    let admin_routes = incubator_backend::routes::create_admin_router(state.clone())
        .layer(from_fn(
            incubator_backend::middleware::auth::require_admin,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            incubator_backend::middleware::auth::auth_middleware,
        ));

    let app = Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(cors)
        .layer(from_fn(incubator_backend::middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed");
}
