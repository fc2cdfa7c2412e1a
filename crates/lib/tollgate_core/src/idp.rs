//! Hosted identity-provider client.
//!
//! The delegated auth mode does not verify tokens itself: the raw
//! `Authorization` header is forwarded to the provider's verification
//! endpoint, which answers with a signed-in flag and a claim payload.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity-provider errors. The HTTP layer treats all of these as
/// "unauthenticated"; variants exist for logging.
#[derive(Debug, Error)]
pub enum IdpError {
    #[error("Provider config error: {0}")]
    Config(String),

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Provider returned {status}: {body}")]
    Provider { status: u16, body: String },
}

/// Claims returned by the provider for a verified session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject identifier assigned by the provider.
    pub sub: String,
    /// The party the token was issued to (`azp`), if any.
    #[serde(default)]
    pub authorized_party: Option<String>,
    /// Provider session id, if any.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Outcome of a delegated verification call.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub signed_in: bool,
    pub claims: Option<SessionClaims>,
}

impl SessionState {
    /// Not signed in, no claims.
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            claims: None,
        }
    }
}

/// Verification seam: the router depends on this trait, not on the concrete
/// provider client, so tests inject a stub.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Decide whether the request carrying `authorization` is signed in.
    async fn verify(&self, authorization: Option<&str>) -> Result<SessionState, IdpError>;
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    active: bool,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    authorized_party: Option<String>,
    #[serde(default)]
    session_id: Option<String>,
}

/// Client for a hosted provider's token-verification endpoint.
pub struct HostedVerifier {
    client: Client,
    verify_url: String,
    api_key: String,
    /// When set, a token whose `azp` claim names a different party is
    /// rejected even if the provider reports it active.
    authorized_party: Option<String>,
}

impl HostedVerifier {
    pub fn new(verify_url: String, api_key: String, authorized_party: Option<String>) -> Self {
        Self {
            client: Client::new(),
            verify_url,
            api_key,
            authorized_party,
        }
    }
}

#[async_trait]
impl IdentityVerifier for HostedVerifier {
    async fn verify(&self, authorization: Option<&str>) -> Result<SessionState, IdpError> {
        if self.api_key.is_empty() {
            return Err(IdpError::Config("provider API key is not set".into()));
        }

        // No credential at all: signed out, no need to ask the provider.
        let Some(token) = authorization.and_then(|h| h.strip_prefix("Bearer ")) else {
            return Ok(SessionState::signed_out());
        };

        let resp = self
            .client
            .post(&self.verify_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&VerifyRequest { token })
            .send()
            .await
            .map_err(|e| IdpError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_else(|_| "<no body>".to_string());
            return Err(IdpError::Provider { status, body });
        }

        let verdict: VerifyResponse = resp
            .json()
            .await
            .map_err(|e| IdpError::Transport(format!("response parse error: {e}")))?;

        if !verdict.active {
            return Ok(SessionState::signed_out());
        }

        let Some(sub) = verdict.sub else {
            // Active but missing a subject: treat as signed out.
            return Ok(SessionState::signed_out());
        };

        if let (Some(expected), Some(azp)) =
            (self.authorized_party.as_deref(), verdict.authorized_party.as_deref())
            && expected != azp
        {
            tracing::warn!(azp, "rejecting session for unauthorized party");
            return Ok(SessionState::signed_out());
        }

        Ok(SessionState {
            signed_in: true,
            claims: Some(SessionClaims {
                sub,
                authorized_party: verdict.authorized_party,
                session_id: verdict.session_id,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_authorization_is_signed_out_without_network() {
        // Unroutable URL: proves the short-circuit never dials out.
        let verifier = HostedVerifier::new(
            "http://127.0.0.1:1/verify".into(),
            "sk_test".into(),
            None,
        );
        let state = verifier.verify(None).await.unwrap();
        assert!(!state.signed_in);
        assert!(state.claims.is_none());
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_signed_out_without_network() {
        let verifier = HostedVerifier::new(
            "http://127.0.0.1:1/verify".into(),
            "sk_test".into(),
            None,
        );
        let state = verifier.verify(Some("Basic dXNlcjpwYXNz")).await.unwrap();
        assert!(!state.signed_in);
    }

    #[tokio::test]
    async fn empty_api_key_is_config_error() {
        let verifier =
            HostedVerifier::new("http://127.0.0.1:1/verify".into(), String::new(), None);
        let err = verifier.verify(Some("Bearer tok")).await.unwrap_err();
        assert!(matches!(err, IdpError::Config(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_is_transport_error() {
        let verifier = HostedVerifier::new(
            "http://127.0.0.1:1/verify".into(),
            "sk_test".into(),
            None,
        );
        let err = verifier.verify(Some("Bearer tok")).await.unwrap_err();
        assert!(matches!(err, IdpError::Transport(_)));
    }
}
