//! Authentication middleware — Bearer token extraction and verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::error::AppError;
use tollgate_core::auth::AuthError;
use tollgate_core::auth::jwt::verify_token;
use tollgate_core::models::User;

/// The resolved user, stored in request extensions for wrapped handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// signature and expiry, resolves the embedded username against the user
/// table, and injects [`AuthenticatedUser`] into request extensions.
///
/// Failure modes are distinct: missing header, non-Bearer scheme, expired
/// token, invalid token, unknown user — all 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".into()))?;

    let claims = verify_token(token, state.config.token_secret.as_bytes())?;

    let user = state
        .users
        .find_user(&claims.sub)
        .ok_or(AuthError::UnknownUser)?;

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}
