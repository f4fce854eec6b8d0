use axum::{
    Json,
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::AppState;
use crate::cache::user_cache::UserCache;
use crate::config::Config;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::{AuthUser, User};
use crate::db::repositories::users::UsersRepo;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid, // user_id
    pub email: String,
    pub username: String,
    pub exp: u64,    // expiration time
    pub iat: u64,    // issued at
    pub jti: String, // JWT ID
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: uuid::Uuid,
    pub exp: u64,
    pub iat: u64,
    pub jti: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration: Duration,
    pub refresh_expiration: Duration,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiration: Duration::from_secs(config.jwt_access_token_expires_in),
            refresh_expiration: Duration::from_secs(config.jwt_refresh_token_expires_in),
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn access_token_expires_in(&self) -> u64 {
        self.config.jwt_expiration.as_secs()
    }

    pub fn generate_access_token(
        &self,
        user: &AuthUser,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            exp: now + self.config.jwt_expiration.as_secs(),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn generate_refresh_token(
        &self,
        user_id: uuid::Uuid,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();

        let claims = RefreshClaims {
            sub: user_id,
            exp: now + self.config.refresh_expiration.as_secs(),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    pub fn verify_refresh_token(
        &self,
        token: &str,
    ) -> Result<RefreshClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Result<Response, StatusCode> {
    let token = bearer_token(&request).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state
        .auth_service
        .verify_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = resolve_user(&state, claims.sub)
        .await
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Runs behind `auth_middleware`; rejects non-admin users from the admin
/// router with the standard response envelope.
pub async fn require_admin(
    request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Response {
    match request.extensions().get::<AuthUser>().map(|u| u.is_admin) {
        Some(true) => next.run(request).await,
        Some(false) => (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::forbidden("Admin access required")),
        )
            .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::unauthorized("Authentication required")),
        )
            .into_response(),
    }
}

fn bearer_token<B>(request: &Request<B>) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_str| {
            auth_str
                .strip_prefix("Bearer ")
                .map(|token| token.to_string())
        })
}

/// Redis cache first, database second. A cache failure falls through to the
/// database rather than failing the request.
async fn resolve_user(state: &AppState, user_id: uuid::Uuid) -> Option<AuthUser> {
    let cache = UserCache::new(state.redis.clone());

    if let Ok(Some(user)) = cache.get_user(user_id).await {
        return Some(user);
    }

    let mut conn = state.db.get().ok()?;
    let user: User = UsersRepo::find_active_by_id(&mut conn, user_id).ok()??;
    let auth_user = AuthUser::from(user);

    if let Err(e) = cache.cache_user(&auth_user).await {
        tracing::debug!("Failed to cache user: {}", e);
    }

    Some(auth_user)
}
