//! API request/response models.

use serde::{Deserialize, Serialize};

use tollgate_core::models::Role;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /api/login` request body.
///
/// Fields default to empty: absent keys must reach the credential check as
/// missing credentials, not fail body extraction.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Token issued by login and refresh.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// `GET /api/protected` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: String,
    pub role: Role,
}

/// `GET /api/admin` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminResponse {
    pub message: String,
    pub user: String,
}

/// `GET /api/health` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Plain message payload (index and public resource).
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One item of the delegated protected resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceItem {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// `GET /api/protected-resource` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProtectedResourceResponse {
    pub items: Vec<ResourceItem>,
    pub user_id: String,
}
