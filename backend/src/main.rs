//! Backend entry-point: loads settings, wires the record-store adapter, and
//! serves the submission endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use breakout_backend::inbound::http::health::HealthState;
use breakout_backend::outbound::airtable::{AirtableHttpStore, EnvRecordStoreConfig};
use breakout_backend::outbound::cache::InMemoryRosterCache;
use breakout_backend::settings::BreakoutSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BreakoutSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let api_root = settings
        .api_root()
        .map_err(|e| std::io::Error::other(format!("invalid record-store API root: {e}")))?;
    let store = AirtableHttpStore::new(api_root, settings.upstream_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build HTTP client: {e}")))?;
    let roster_cache = InMemoryRosterCache::new(settings.roster_ttl(), Arc::new(DefaultClock));

    let bind_addr = settings.bind_addr();
    let config = ServerConfig::new(
        bind_addr,
        Arc::new(EnvRecordStoreConfig::default()),
        Arc::new(store),
    )
    .with_roster_cache(Arc::new(roster_cache), settings.roster_ttl());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(async move {
        health_state.fail_liveness_on(shutdown_signal()).await;
        info!("shutdown signal received; liveness now failing");
    });
    info!(%bind_addr, "listening");
    server.await
}

/// Resolve on SIGINT or, on Unix, SIGTERM. Never resolves when no handler
/// can be installed.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use actix_web::rt::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = actix_web::rt::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(e) => warn!(error = %e, "SIGTERM handler unavailable"),
        }
    }
    if let Err(e) = actix_web::rt::signal::ctrl_c().await {
        warn!(error = %e, "SIGINT handler unavailable");
        std::future::pending::<()>().await;
    }
}
