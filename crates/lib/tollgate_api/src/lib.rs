//! # tollgate_api
//!
//! HTTP API library for Tollgate.
//!
//! Exposes two routers, one per authentication mode:
//! - [`router`] — self-signed bearer tokens checked against the in-memory
//!   user table.
//! - [`delegated_router`] — trust decision forwarded to a hosted identity
//!   provider.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, delegated, resources};
use tollgate_core::idp::IdentityVerifier;
use tollgate_core::users::UserStore;

/// Shared state for the self-signed token mode.
#[derive(Clone)]
pub struct AppState {
    /// User table, read-only after startup.
    pub users: Arc<dyn UserStore>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Shared state for the delegated mode.
#[derive(Clone)]
pub struct DelegatedState {
    /// Identity-provider verification client.
    pub verifier: Arc<dyn IdentityVerifier>,
    /// API configuration.
    pub config: ApiConfig,
}

/// CORS layer: allow-list the configured frontend origin, or any origin when
/// none is configured.
fn cors_layer(frontend_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match frontend_origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

/// Builds the Axum router for the self-signed token mode.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.frontend_origin.as_deref());

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/login", post(auth::login_handler))
        .route("/api/health", get(resources::health_handler));

    // Protected routes (require a valid bearer token)
    let protected = Router::new()
        .route("/api/protected", get(resources::protected_handler))
        .route("/api/admin", get(resources::admin_handler))
        .route("/api/refresh", post(auth::refresh_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

/// Builds the Axum router for the delegated mode.
///
/// No middleware here: the protected handler itself asks the provider, so
/// public and protected routes differ only in that one call.
pub fn delegated_router(state: DelegatedState) -> Router {
    let cors = cors_layer(state.config.frontend_origin.as_deref());

    Router::new()
        .route("/", get(delegated::index_handler))
        .route(
            "/api/protected-resource",
            get(delegated::protected_resource_handler),
        )
        .route(
            "/api/public-resource",
            get(delegated::public_resource_handler),
        )
        .layer(cors)
        .with_state(state)
}
