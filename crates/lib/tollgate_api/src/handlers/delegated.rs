//! Handlers for the delegated auth mode.
//!
//! The trust decision belongs entirely to the hosted identity provider;
//! these handlers only branch on its signed-in verdict.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use tracing::warn;

use crate::DelegatedState;
use crate::error::{AppError, AppResult};
use crate::models::{MessageResponse, ProtectedResourceResponse, ResourceItem};
use tollgate_core::idp::SessionState;

/// `GET /` — public welcome message.
pub async fn index_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the API!".to_string(),
    })
}

/// `GET /api/public-resource` — public data, no auth.
pub async fn public_resource_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "This is public data that doesn't require authentication".to_string(),
    })
}

/// `GET /api/protected-resource` — forwards the caller's credential to the
/// provider; 401 unless it reports the session signed in.
///
/// Provider errors (transport, config, non-2xx) are logged and treated
/// uniformly as unauthenticated.
pub async fn protected_resource_handler(
    State(state): State<DelegatedState>,
    headers: HeaderMap,
) -> AppResult<Json<ProtectedResourceResponse>> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let session = match state.verifier.verify(authorization).await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "delegated verification failed");
            SessionState::signed_out()
        }
    };

    let claims = match (session.signed_in, session.claims) {
        (true, Some(claims)) => claims,
        _ => return Err(AppError::Unauthorized("You must be signed in".into())),
    };

    // Placeholder payload standing in for real per-user data.
    let items = vec![
        ResourceItem {
            id: 1,
            name: "Protected Item 1".to_string(),
            description: "Secret data 1".to_string(),
        },
        ResourceItem {
            id: 2,
            name: "Protected Item 2".to_string(),
            description: "Secret data 2".to_string(),
        },
        ResourceItem {
            id: 3,
            name: "Protected Item 3".to_string(),
            description: "Secret data 3".to_string(),
        },
    ];

    Ok(Json(ProtectedResourceResponse {
        items,
        user_id: claims.sub,
    }))
}
