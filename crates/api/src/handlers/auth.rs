//! Handlers for the `/auth` resource (login, session).

use axum::extract::State;
use axum::Json;
use harva_core::error::CoreError;
use harva_core::types::RowId;
use harva_db::models::user::UserResponse;
use harva_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// The decoded session of the current request.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user_id: RowId,
    pub email: String,
    pub role: String,
    pub expires_at: i64,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim();

    let user = UserRepo::find_by_email(state.store.as_ref(), email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(email, "Rejected sign-in");
        return Err(invalid_credentials());
    }

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, &user.email, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, role = %user.role, "User signed in");

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_expiry_mins * 60,
        user: UserResponse::from(&user),
    }))
}

/// GET /api/v1/auth/session
///
/// Return the session carried by the bearer token.
pub async fn session(RequireAuth(user): RequireAuth) -> Json<DataResponse<SessionInfo>> {
    Json(DataResponse {
        data: SessionInfo {
            user_id: user.user_id,
            email: user.email,
            role: user.role,
            expires_at: user.expires_at,
        },
    })
}
