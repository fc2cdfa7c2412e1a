//! Tollgate API server binary.
//!
//! Serves one of the two authentication modes per process: self-signed
//! bearer tokens against the built-in user table, or verification delegated
//! to a hosted identity provider.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::info;

use tollgate_api::config::ApiConfig;
use tollgate_api::{AppState, DelegatedState};
use tollgate_core::idp::HostedVerifier;
use tollgate_core::users::InMemoryUsers;

/// Which authentication pattern the server demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Issue and verify tokens locally against the in-memory user table.
    Local,
    /// Forward the trust decision to the hosted identity provider.
    Delegated,
}

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "tollgate_server", about = "Tollgate API server")]
struct Args {
    /// Authentication mode to serve.
    #[arg(long, value_enum, default_value_t = Mode::Local)]
    mode: Mode,

    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3100")]
    bind_addr: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tollgate_api=debug,tollgate_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: args.bind_addr,
        ..ApiConfig::from_env()
    };

    info!(mode = ?args.mode, addr = %config.bind_addr, "starting tollgate_server");

    let app = match args.mode {
        Mode::Local => {
            let users = InMemoryUsers::seeded()?;
            tollgate_api::router(AppState {
                users: Arc::new(users),
                config: config.clone(),
            })
        }
        Mode::Delegated => {
            let verifier = HostedVerifier::new(
                config.idp_verify_url.clone(),
                config.idp_secret_key.clone(),
                config.frontend_origin.clone(),
            );
            tollgate_api::delegated_router(DelegatedState {
                verifier: Arc::new(verifier),
                config: config.clone(),
            })
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
