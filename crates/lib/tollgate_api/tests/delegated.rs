//! Integration tests for the delegated mode, with the provider stubbed
//! behind the `IdentityVerifier` seam.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use tollgate_api::config::ApiConfig;
use tollgate_api::{DelegatedState, delegated_router};
use tollgate_core::idp::{IdentityVerifier, IdpError, SessionClaims, SessionState};

/// Always answers with a fixed session state.
struct StubVerifier(SessionState);

#[async_trait]
impl IdentityVerifier for StubVerifier {
    async fn verify(&self, _authorization: Option<&str>) -> Result<SessionState, IdpError> {
        Ok(self.0.clone())
    }
}

/// Always fails, as if the provider were unreachable.
struct FailingVerifier;

#[async_trait]
impl IdentityVerifier for FailingVerifier {
    async fn verify(&self, _authorization: Option<&str>) -> Result<SessionState, IdpError> {
        Err(IdpError::Transport("connection refused".into()))
    }
}

fn test_app(verifier: Arc<dyn IdentityVerifier>) -> Router {
    delegated_router(DelegatedState {
        verifier,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            token_secret: String::new(),
            idp_verify_url: String::new(),
            idp_secret_key: String::new(),
            frontend_origin: None,
        },
    })
}

fn signed_in(sub: &str) -> SessionState {
    SessionState {
        signed_in: true,
        claims: Some(SessionClaims {
            sub: sub.to_string(),
            authorized_party: None,
            session_id: None,
        }),
    }
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

#[tokio::test]
async fn index_is_public() {
    let app = test_app(Arc::new(StubVerifier(SessionState::signed_out())));

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["message"], "Welcome to the API!");
}

#[tokio::test]
async fn public_resource_needs_no_auth() {
    let app = test_app(Arc::new(StubVerifier(SessionState::signed_out())));

    let req = Request::builder()
        .uri("/api/public-resource")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_resource_with_signed_in_session() {
    let app = test_app(Arc::new(StubVerifier(signed_in("user_2abc"))));

    let req = Request::builder()
        .uri("/api/protected-resource")
        .header(header::AUTHORIZATION, "Bearer session-token")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["user_id"], "user_2abc");
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn protected_resource_signed_out_is_unauthorized() {
    let app = test_app(Arc::new(StubVerifier(SessionState::signed_out())));

    let req = Request::builder()
        .uri("/api/protected-resource")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(resp).await;
    assert!(json["message"].as_str().unwrap().contains("signed in"));
}

#[tokio::test]
async fn provider_failure_reads_as_unauthenticated() {
    let app = test_app(Arc::new(FailingVerifier));

    let req = Request::builder()
        .uri("/api/protected-resource")
        .header(header::AUTHORIZATION, "Bearer session-token")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
