//! Core library for the StaySmart demo-scheduling service: configuration,
//! the submission handler and its email delivery, and the client-side form
//! controller.

pub mod config;
pub mod email;
pub mod error;
pub mod extractors;
pub mod form;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod validation;

pub use config::{AppConfig, EmailConfig};
pub use email::{EmailClient, EmailClientError, Mailer};
pub use error::{AppError, Result};
pub use form::{FormController, HttpSubmitter, SubmissionStatus, SubmitDemo};
pub use handlers::routes::create_routes;
pub use metrics::MetricsCollector;
pub use models::{DemoRequest, DemoRequestPayload, SubmissionResponse, TimeSlot};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware as axum_middleware,
    middleware::Next,
    response::Response,
    Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub mailer: Mailer,
    pub metrics: MetricsCollector,
}

impl AppState {
    pub fn new(mailer: Mailer) -> Self {
        Self {
            app_name: "StaySmart Demo API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            mailer,
            metrics: MetricsCollector::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Mailer::Unconfigured)
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: AppConfig) -> Router {
    let mut router = Router::new().merge(create_routes());

    router = router.layer(middleware::cors::cors_layer_from_config(&config.cors));

    router = router.layer(axum_middleware::from_fn_with_state(
        state.clone(),
        metrics_middleware,
    ));

    router = router.layer(middleware::logging::logging_layer());

    router.with_state(state)
}

async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> std::result::Result<Response, std::convert::Infallible> {
    let path = request.uri().path().to_string();
    let start = std::time::Instant::now();

    state.metrics.record_request(&path);

    let response = next.run(request).await;

    let duration = start.elapsed();
    state
        .metrics
        .record_response(duration.as_millis(), response.status().as_u16());

    Ok(response)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
