//! JWT token generation and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::warn;

use super::AuthError;
use crate::models::{Role, TokenClaims};

/// Access token lifetime: 30 minutes.
pub const TOKEN_EXPIRY_SECS: i64 = 30 * 60;

/// Generate a signed access token (HS256, 30 min expiry).
pub fn generate_token(username: &str, role: Role, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: username.to_string(),
        role,
        exp: (now + Duration::seconds(TOKEN_EXPIRY_SECS)).timestamp(),
        iat: now.timestamp(),
    };
    sign_claims(&claims, secret)
}

/// Sign an explicit claim set.
pub fn sign_claims(claims: &TokenClaims, secret: &[u8]) -> Result<String, AuthError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
}

/// Verify an access token, returning the claims on success.
///
/// Expired tokens fail distinctly from otherwise-invalid ones.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
}

/// Resolve the signing secret: env var `TOKEN_SECRET` → `AUTH_SECRET` →
/// freshly generated (ephemeral, tokens do not survive restarts).
pub fn resolve_signing_secret() -> String {
    if let Ok(secret) = std::env::var("TOKEN_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    if let Ok(secret) = std::env::var("AUTH_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    warn!("TOKEN_SECRET not set, generated an ephemeral signing secret");
    secret
}
