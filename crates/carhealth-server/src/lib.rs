//! HTTP car health server.
//!
//! Serves simulated telemetry readings as JSON and keeps the most recent ones
//! in memory. Cross-origin requests are allowed from anywhere, which makes the
//! server suitable for local dashboards during development only.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use carhealth_core::{CarMonitor, Reading};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;
/// Listen on all interfaces by default.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Report status failures with 500 instead of a 200 carrying `{"error": ...}`.
    pub strict_errors: bool,
    /// Mirror the request origin and allow credentials instead of answering `*`.
    pub cors_credentials: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            strict_errors: false,
            cors_credentials: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared server state.
struct AppState {
    monitor: Mutex<CarMonitor>,
    strict_errors: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    source: String,
    history_len: usize,
    history_capacity: usize,
}

async fn handle_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Car Health Monitoring API" }))
}

async fn handle_status(State(state): State<Arc<AppState>>) -> Response {
    let mut monitor = state.monitor.lock().await;
    match monitor.status() {
        Ok(reading) => {
            log::debug!(
                "status: speed={} rpm={} history={}/{}",
                reading.speed,
                reading.rpm,
                monitor.history_len(),
                monitor.history_capacity()
            );
            Json(reading).into_response()
        }
        Err(err) => {
            log::warn!("status generation failed: {err}");
            let status = if state.strict_errors {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::OK
            };
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn handle_history(State(state): State<Arc<AppState>>) -> Json<Vec<Reading>> {
    let monitor = state.monitor.lock().await;
    let history = monitor.history();
    log::debug!("history: {} readings", history.len());
    Json(history)
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let monitor = state.monitor.lock().await;
    Json(HealthResponse {
        status: "ok",
        source: monitor.source_name().to_string(),
        history_len: monitor.history_len(),
        history_capacity: monitor.history_capacity(),
    })
}

/// Any origin, method and header. Credentials are only allowed with
/// `--cors-credentials`, which mirrors the request origin instead of `*`.
fn cors_layer(allow_credentials: bool) -> CorsLayer {
    if allow_credentials {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::permissive()
    }
}

/// Build the axum router around `monitor`.
pub fn build_router(monitor: CarMonitor, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        monitor: Mutex::new(monitor),
        strict_errors: config.strict_errors,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/car/status", get(handle_status))
        .route("/car/history", get(handle_history))
        .route("/health", get(handle_health))
        .layer(cors_layer(config.cors_credentials))
        .with_state(state)
}

/// Run the HTTP server until Ctrl-C or SIGTERM.
pub async fn run_server(monitor: CarMonitor, config: &ServerConfig) -> std::io::Result<()> {
    let app = build_router(monitor, config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::warn!("cannot listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                log::warn!("cannot listen for SIGTERM: {err}");
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
    log::info!("shutdown signal received");
}
