//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener
//! - Build the HTTP server and its upstream client
//! - Wire the signal watcher to the shutdown coordinator
//! - Serve until stopped
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Bind first so a taken port is reported before anything else is built

use thiserror::Error;

use crate::config::ProxyConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::{self, ListenerError};

/// Fatal errors before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("cannot build upstream client: {0}")]
    UpstreamClient(#[from] reqwest::Error),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the relay until SIGINT/SIGTERM.
pub async fn run(config: ProxyConfig) -> Result<(), StartupError> {
    let listener = net::bind(&config.listener).await?;
    let local_addr = listener.local_addr()?;

    let server = HttpServer::new(config)?;

    tracing::info!("API relay available at http://{}/api/", local_addr);
    tracing::info!("Static files served at http://{}/", local_addr);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let watcher = tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let result = server.run(listener, server_shutdown).await;
    watcher.abort();
    result?;

    Ok(())
}
