//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all API handlers
//! - Wire up middleware (tracing, CORS, timeout, request ID)
//! - Own the planner state shared by all handlers
//! - Serve with graceful shutdown

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, CorsConfig};
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::planner::PlannerState;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<PlannerState>,
}

/// HTTP server for the trip planner backend.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Planner state starts empty and lives as long as the server.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            planner: Arc::new(PlannerState::new()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/ping", get(handlers::ping))
            .route(
                "/api/preferences/{user_id}",
                post(handlers::save_preferences).get(handlers::get_preferences),
            )
            .route("/api/itinerary/generate", post(handlers::generate_itinerary))
            .route("/api/chat", post(handlers::chat))
            .route("/api/group/add", post(handlers::add_member))
            .route("/api/group", get(handlers::list_group))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(Self::cors_layer(&config.cors))
    }

    /// CORS for the browser frontend: exact-origin allow-list with
    /// credentials, mirroring requested methods and headers (wildcards
    /// cannot combine with credentials).
    fn cors_layer(config: &CorsConfig) -> CorsLayer {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
