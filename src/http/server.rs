//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request id, tracing, timeout, metrics)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::middleware::{render_deadline, track_metrics};
use crate::http::request::make_request_span;
use crate::lifecycle::{build_state, StartupError};
use crate::services::{AlphaFoldService, PdbeService, UniProtService};

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub uniprot: Arc<UniProtService>,
    pub pdbe: Arc<PdbeService>,
    pub alphafold: Arc<AlphaFoldService>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, StartupError> {
        let state = build_state(&config)?;
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/health", get(handlers::health))
            .route("/uniprot/search", get(handlers::search))
            .route("/uniprot/entry", get(handlers::entry))
            .route("/pdb/search_by_uniprot", get(handlers::mappings))
            .route("/pdb/summary", get(handlers::summary))
            .route("/af/prediction", get(handlers::prediction))
            .fallback(handlers::not_found)
            .with_state(state);

        with_middleware(routes, Duration::from_secs(config.timeouts.request_secs))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
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
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A handle to the fully layered router, for in-process dispatch.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Wrap `routes` in the request-id, trace, deadline and metrics layers.
///
/// Outermost first: the request id is set and echoed outside the deadline so
/// every response, a timed-out one included, carries it.
#[allow(deprecated)]
pub(crate) fn with_middleware(routes: Router, request_timeout: Duration) -> Router {
    routes.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(middleware::from_fn(render_deadline))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(middleware::from_fn(track_metrics)),
    )
}
