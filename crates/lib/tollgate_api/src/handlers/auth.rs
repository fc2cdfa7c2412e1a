//! Authentication request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{LoginRequest, TokenResponse};
use crate::services::auth;

/// `POST /api/login` — authenticate with username + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let resp = auth::login(
        state.users.as_ref(),
        &body.username,
        &body.password,
        state.config.token_secret.as_bytes(),
    )?;
    Ok(Json(resp))
}

/// `POST /api/refresh` — re-issue a token for the authenticated caller.
/// Requires authentication; credentials are not re-checked.
pub async fn refresh_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<TokenResponse>> {
    let resp = auth::refresh(&user.0, state.config.token_secret.as_bytes())?;
    Ok(Json(resp))
}
