//! USSD WhoIs - domain availability lookups over USSD
//!
//! A gateway callback server that keeps a per-session menu state machine
//! across independent, stateless USSD requests.

mod api;
mod config;
mod runtime;
mod session;
mod state_machine;
mod ussd;
mod whois;

use api::{create_router, AppState};
use clap::Parser;
use config::Cli;
use runtime::SessionRuntime;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use whois::{DomainOracle, JsonWhoisClient, LoggingOracle, WhoisConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ussd_whois=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let cli = Cli::parse();
    let whois_config = WhoisConfig::from_env();
    if whois_config.api_key.is_none() {
        tracing::warn!("No WHOIS API key configured. Set JSONWHOIS_API_KEY.");
    }

    // Initialize domain oracle
    let client: Arc<dyn DomainOracle> = Arc::new(JsonWhoisClient::new(&whois_config)?);
    let oracle = Arc::new(LoggingOracle::new(client));

    let runtime = SessionRuntime::new(oracle).with_lookup_timeout(whois_config.timeout);
    let app = create_router(AppState::new(runtime)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = cli.bind_address();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to start server");
            return Err(e.into());
        }
    };
    tracing::info!("USSD WhoIs server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
