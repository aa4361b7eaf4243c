//! Nang Bot server entry point.
//!
//! Loads configuration, installs tracing, wires the adapters into the
//! application handlers and serves `POST /linebot`.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use secrecy::ExposeSecret;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use nang_bot::adapters::http::{linebot_routes, LineBotAppState};
use nang_bot::adapters::line::{LineClientConfig, LineMessagingClient, LineSignatureVerifier};
use nang_bot::adapters::session::InMemorySessionStore;
use nang_bot::adapters::tmdb::{TmdbConfig, TmdbMovieCatalog};
use nang_bot::application::{HandleBatchHandler, HandleEventHandler};
use nang_bot::config::{AppConfig, ServerConfig};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server)?;

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let app = build_router(&config)?;
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        session_scope = ?config.session.scope,
        "Nang Bot listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Installs the global subscriber: JSON in production, fmt elsewhere.
///
/// `RUST_LOG` takes precedence over `server.log_level`.
fn init_tracing(server: &ServerConfig) -> Result<(), BoxError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&server.log_level)?,
    };

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    }
}

fn build_router(config: &AppConfig) -> Result<Router, BoxError> {
    let catalog = TmdbMovieCatalog::new(
        TmdbConfig::new(config.catalog.api_key.expose_secret().as_str())
            .with_base_url(config.catalog.base_url.as_str())
            .with_language(config.catalog.language.as_str())
            .with_timeout(config.catalog.timeout()),
    )?;

    let sender = LineMessagingClient::new(
        LineClientConfig::new(config.line.channel_access_token.expose_secret().as_str())
            .with_base_url(config.line.api_base_url.as_str())
            .with_timeout(config.line.timeout()),
    )?;

    let sessions = InMemorySessionStore::new(config.session.capacity);

    let event_handler = HandleEventHandler::new(
        Arc::new(catalog),
        Arc::new(sender),
        Arc::new(sessions),
        config.session.scope,
        config.catalog.image_base_url.as_str(),
    );

    let state = LineBotAppState::new(
        Arc::new(LineSignatureVerifier::new(
            config.line.channel_secret.expose_secret().as_str(),
        )),
        Arc::new(HandleBatchHandler::new(Arc::new(event_handler))),
    );

    Ok(linebot_routes()
        .with_state(state)
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http()))
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
