//! API server configuration.

use tollgate_core::auth::jwt::resolve_signing_secret;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// Token signing secret (self-signed mode).
    pub token_secret: String,
    /// Hosted identity-provider verification endpoint (delegated mode).
    pub idp_verify_url: String,
    /// Hosted identity-provider API key (delegated mode).
    pub idp_secret_key: String,
    /// Frontend origin for the CORS allow-list; any origin when unset.
    pub frontend_origin: Option<String>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                        | Default                           |
    /// |---------------------------------|-----------------------------------|
    /// | `BIND_ADDR`                     | `127.0.0.1:3100`                  |
    /// | `TOKEN_SECRET` / `AUTH_SECRET`  | generated, ephemeral              |
    /// | `IDP_VERIFY_URL`                | provider's hosted verify endpoint |
    /// | `IDP_SECRET_KEY`                | empty (delegated mode unusable)   |
    /// | `FRONTEND_ORIGIN`               | unset (CORS allows any origin)    |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3100".into()),
            token_secret: resolve_signing_secret(),
            idp_verify_url: std::env::var("IDP_VERIFY_URL")
                .unwrap_or_else(|_| "https://api.idp.example.com/v1/tokens/verify".into()),
            idp_secret_key: std::env::var("IDP_SECRET_KEY").unwrap_or_default(),
            frontend_origin: std::env::var("FRONTEND_ORIGIN").ok(),
        }
    }
}
