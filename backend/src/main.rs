//! Bookstore entry-point: loads settings, prepares persistence and serves
//! the inventory pages.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookstore::config::AppSettings;
use bookstore::inbound::http::health::HealthState;
use bookstore::inbound::http::session_config::{BuildMode, session_settings_from_env};
use bookstore::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server, drain_on_shutdown};

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

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let mut config = ServerConfig::from_session(session, settings.bind_addr());

    if let Some(database_url) = settings.database_url() {
        let applied = run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database schema up to date");
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_pool_size()),
        )
        .await
        .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(initialize_metrics(|| {
            PrometheusMetricsBuilder::new("bookstore")
                .endpoint("/metrics")
                .build()
        }));
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr(), "starting bookstore server");
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_shutdown(
        health_state,
        server.handle(),
        shutdown_signal(),
    ));
    server.await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Build the Prometheus middleware, logging and skipping it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<actix_web_prom::PrometheusMetrics>
where
    F: FnOnce() -> Result<actix_web_prom::PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics initialisation failed; continuing without /metrics");
            None
        }
    }
}
