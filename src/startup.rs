//! Application startup and lifecycle management.

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers::{app, echo, health, metrics, users};
use crate::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use crate::models::UserDirectory;
use crate::AppState;

/// Build the full route table.
///
/// Route dispatch is a fixed ordered table with a fallback entry; every
/// unmatched method/path lands on the same JSON 404.
pub fn build_router(state: AppState) -> Router {
    // Method misses on known paths get the same 404 as unknown paths, so
    // every method router carries the shared fallback.
    Router::new()
        .route("/", get(app::index).fallback(app::route_not_found))
        .route(
            "/health",
            get(health::health_check).fallback(app::route_not_found),
        )
        .route(
            "/metrics",
            get(metrics::metrics).fallback(app::route_not_found),
        )
        .route(
            "/api/users",
            get(users::list_users).fallback(app::route_not_found),
        )
        .route(
            "/api/users/:id",
            get(users::get_user).fallback(app::route_not_found),
        )
        .route("/api/echo", post(echo::echo).fallback(app::route_not_found))
        .fallback(app::route_not_found)
        .layer(CorsLayer::permissive())
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener immediately (port 0 = random port for testing)
    /// and seeds the user directory; nothing mutates state afterwards.
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid bind address: {}", e)))?;

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState::new(config, UserDirectory::seeded());

        tracing::info!("Sample service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped or a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
