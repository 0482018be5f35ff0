//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use bookstore::Trace;
#[cfg(debug_assertions)]
use bookstore::doc::ApiDoc;
use bookstore::inbound::http::books;
use bookstore::inbound::http::health::{HealthState, live, ready};
use bookstore::inbound::http::session_config::SessionSettings;
use bookstore::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionSettings,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        session,
    } = deps;

    // Health probes sit outside the session scope so they never set cookies.
    let pages = web::scope("")
        .wrap(session.middleware())
        .configure(books::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app.service(pages)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let session = config.session_settings();
    let bind_addr = config.bind_addr();

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(config.prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            session: session.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Wait for `shutdown`, then fail liveness probes and stop the server
/// gracefully so in-flight requests complete.
pub async fn drain_on_shutdown<F>(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    shutdown.await;
    health_state.mark_unhealthy();
    info!("shutdown requested; draining connections");
    handle.stop(true).await;
}
