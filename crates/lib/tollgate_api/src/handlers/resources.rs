//! Protected and admin resource handlers.

use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{AdminResponse, HealthResponse, ProtectedResponse};
use tollgate_core::models::Role;

/// `GET /api/protected` — any authenticated user.
pub async fn protected_handler(
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "This is a protected route".to_string(),
        user: user.0.username,
        role: user.0.role,
    })
}

/// `GET /api/admin` — authenticated users with the admin role.
pub async fn admin_handler(
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<AdminResponse>> {
    if user.0.role != Role::Admin {
        return Err(AppError::Forbidden("Admin access required".into()));
    }
    Ok(Json(AdminResponse {
        message: "This is an admin route".to_string(),
        user: user.0.username,
    }))
}

/// `GET /api/health` — liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: tollgate_core::version().to_string(),
    })
}
