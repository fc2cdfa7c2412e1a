//! Authentication service — credential checks and token issuance.

use crate::error::AppResult;
use crate::models::TokenResponse;
use tollgate_core::auth::AuthError;
use tollgate_core::auth::jwt::{TOKEN_EXPIRY_SECS, generate_token};
use tollgate_core::auth::password::verify_password;
use tollgate_core::models::User;
use tollgate_core::users::UserStore;

/// Wrap a signed token in the response body.
fn build_token_response(token: String) -> TokenResponse {
    TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: TOKEN_EXPIRY_SECS,
    }
}

/// Authenticate with username + password and issue a token.
///
/// Missing fields, unknown users, and wrong passwords all fail with the
/// same generic credential error.
pub fn login(
    users: &dyn UserStore,
    username: &str,
    password: &str,
    secret: &[u8],
) -> AppResult<TokenResponse> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::Credentials.into());
    }

    let user = users.find_user(username).ok_or(AuthError::Credentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AuthError::Credentials.into());
    }

    let token = generate_token(&user.username, user.role, secret)?;
    Ok(build_token_response(token))
}

/// Re-issue a token with a fresh expiry for an already-authenticated caller.
///
/// The still-valid presented token is the proof of identity; credentials are
/// not re-checked.
pub fn refresh(user: &User, secret: &[u8]) -> AppResult<TokenResponse> {
    let token = generate_token(&user.username, user.role, secret)?;
    Ok(build_token_response(token))
}
