//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with a single dispatching handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Dispatch each request: preflight, API relay or static files
//! - Graceful shutdown with a bounded grace period

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Notify};
use tower::{ServiceBuilder, ServiceExt};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::request::{MakeRequestUuidV4, RequestIdExt};
use crate::http::{cors, proxy, response};
use crate::routing::{Route, Router as ProxyRouter};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProxyRouter>,
    pub upstream: UpstreamClient,
    pub static_files: ServeDir,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::from_config(&config.upstream)?;
        Ok(Self::with_upstream(config, upstream))
    }

    /// Create a server around an already-built upstream client.
    pub fn with_upstream(config: ProxyConfig, upstream: UpstreamClient) -> Self {
        let state = AppState {
            router: Arc::new(ProxyRouter::new()),
            upstream,
            static_files: ServeDir::new(&config.static_files.root),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server until the shutdown receiver fires.
    ///
    /// After the signal, in-flight requests get the configured grace period;
    /// whatever is still running after it is abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_root = %self.config.static_files.root.display(),
            upstream = %self.config.upstream.origin,
            "HTTP server starting"
        );

        let grace = self.config.lifecycle.grace_period();
        let draining = Arc::new(Notify::new());
        let notify = draining.clone();

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
                notify.notify_one();
            })
            .into_future();

        tokio::select! {
            result = serve => result?,
            _ = async {
                draining.notified().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(
                    grace_secs = grace.as_secs(),
                    "Grace period elapsed, abandoning in-flight requests"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Single entry point; applies the routing contract to every request.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    match state.router.classify(request.method(), request.uri()) {
        Route::Preflight => {
            tracing::debug!(request_id = %request.request_id(), path = %request.uri().path(), "Answering preflight");
            cors::preflight()
        }
        Route::Api { suffix } => {
            let suffix = suffix.to_owned();
            let (parts, _body) = request.into_parts();
            proxy::relay(&state.upstream, &suffix, &parts).await
        }
        Route::ApiMethodNotAllowed => response::method_not_allowed(),
        Route::Static => serve_static(state.static_files, request).await,
    }
}

async fn serve_static(files: ServeDir, request: Request<Body>) -> Response {
    match files.oneshot(request).await {
        Ok(response) => response.map(Body::new).into_response(),
        Err(never) => match never {},
    }
}
