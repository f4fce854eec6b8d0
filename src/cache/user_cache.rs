use redis::AsyncCommands;
use uuid::Uuid;

use crate::db::models::auth::AuthUser;
use crate::error::AppError;

const USER_CACHE_PREFIX: &str = "user:";

/// Cache TTL in seconds
const USER_CACHE_TTL: u64 = 3600; // 1 hour

/// Redis-backed cache in front of the auth middleware's user lookup. User
/// records are never mutated through this service, so entries only age out;
/// out-of-band changes to a user become visible within the TTL.
pub struct UserCache {
    redis_client: redis::Client,
}

impl UserCache {
    pub fn new(redis_client: redis::Client) -> Self {
        Self { redis_client }
    }

    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        self.redis_client
            .get_multiplexed_async_connection()
            .await
            .map_err(AppError::Redis)
    }

    pub async fn cache_user(&self, user: &AuthUser) -> Result<(), AppError> {
        let mut conn = self.get_connection().await?;
        let key = format!("{}{}", USER_CACHE_PREFIX, user.id);

        let user_json = serde_json::to_string(user)
            .map_err(|e| AppError::Internal(format!("Failed to serialize user: {}", e)))?;

        let _: () = conn.set_ex(&key, user_json, USER_CACHE_TTL).await?;

        Ok(())
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<AuthUser>, AppError> {
        let mut conn = self.get_connection().await?;
        let key = format!("{}{}", USER_CACHE_PREFIX, user_id);

        let user_json: Option<String> = conn.get(&key).await?;

        match user_json {
            Some(json) => {
                let user = serde_json::from_str(&json)
                    .map_err(|e| AppError::Internal(format!("Failed to deserialize user: {}", e)))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}
