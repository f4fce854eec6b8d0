use bcrypt::{hash, verify};
use diesel::PgConnection;

use crate::db::models::auth::{
    AuthUser, LoginRequest, LoginResponse, NewUser, RegisterRequest, User,
};
use crate::db::repositories::users::UsersRepo;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthService as TokenService;

mod error_codes {
    pub const USER_EMAIL_EXISTS: &str = "USER_EMAIL_EXISTS";
    pub const USER_USERNAME_EXISTS: &str = "USER_USERNAME_EXISTS";
}

pub struct AuthService;

impl AuthService {
    pub fn register(
        conn: &mut PgConnection,
        bcrypt_cost: u32,
        req: &RegisterRequest,
    ) -> AppResult<User> {
        if UsersRepo::email_exists(conn, &req.email)? {
            return Err(AppError::conflict_with_code(
                "Email address already exists",
                Some("email".to_string()),
                error_codes::USER_EMAIL_EXISTS,
            ));
        }

        if UsersRepo::username_exists(conn, &req.username)? {
            return Err(AppError::conflict_with_code(
                "Username already exists",
                Some("username".to_string()),
                error_codes::USER_USERNAME_EXISTS,
            ));
        }

        let password_hash = hash(req.password.as_bytes(), bcrypt_cost)?;

        let new_user = NewUser {
            email: req.email.clone(),
            username: req.username.clone(),
            name: req.name.clone(),
            password_hash,
            is_admin: false,
        };

        Ok(UsersRepo::insert(conn, &new_user)?)
    }

    pub fn login(
        conn: &mut PgConnection,
        tokens: &TokenService,
        req: &LoginRequest,
    ) -> AppResult<LoginResponse> {
        let user = UsersRepo::find_by_email(conn, &req.email)?
            .ok_or_else(|| AppError::auth("Invalid email or password"))?;

        if !user.is_active {
            return Err(AppError::auth("Account is disabled"));
        }

        if !verify(req.password.as_bytes(), &user.password_hash)? {
            return Err(AppError::auth("Invalid email or password"));
        }

        let auth_user = AuthUser::from(user);
        Self::issue_tokens(tokens, auth_user)
    }

    pub fn refresh(
        conn: &mut PgConnection,
        tokens: &TokenService,
        refresh_token: &str,
    ) -> AppResult<LoginResponse> {
        let claims = tokens
            .verify_refresh_token(refresh_token)
            .map_err(|_| AppError::auth("Invalid refresh token"))?;

        let user = UsersRepo::find_active_by_id(conn, claims.sub)?
            .ok_or_else(|| AppError::auth("User not found or inactive"))?;

        Self::issue_tokens(tokens, AuthUser::from(user))
    }

    fn issue_tokens(tokens: &TokenService, user: AuthUser) -> AppResult<LoginResponse> {
        let access_token = tokens.generate_access_token(&user)?;
        let refresh_token = tokens.generate_refresh_token(user.id)?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.access_token_expires_in(),
            user,
        })
    }
}
