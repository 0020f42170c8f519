//! Offline Assistant - keyword-driven chat demo
//!
//! Serves a single chat page backed by canned replies. Nothing leaves the
//! process: no model, no network calls, no storage beyond memory.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod conversation;
mod core;
mod render;
mod routes;

use config::Config;
use crate::core::SessionRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<SessionRegistry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offline_assistant=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let sessions = Arc::new(SessionRegistry::new(
        config.edition,
        config.system_prompt.clone(),
        config.session_limits(),
    ));
    tokio::spawn(sweep_idle_sessions(sessions.clone()));

    tracing::info!(
        edition = %config.edition,
        reply_delay_ms = config.reply_delay_ms,
        max_sessions = config.max_sessions,
        session_idle_secs = config.session_idle_secs,
        "Assistant configured"
    );

    let state = AppState { config, sessions };

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("🤖 Offline assistant running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drop sessions nobody has touched within the idle timeout
async fn sweep_idle_sessions(sessions: Arc<SessionRegistry>) {
    let period = (sessions.limits().idle_timeout / 4).max(Duration::from_secs(1));
    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;
        sessions.evict_idle().await;
    }
}
