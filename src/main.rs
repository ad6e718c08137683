//! Local CORS relay (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                  CORS RELAY                  │
//!   Browser request       │  ┌──────────┐   ┌────────┐   ┌───────────┐   │
//!   ──────────────────────┼─▶│ listener │──▶│  http  │──▶│  routing  │   │
//!                         │  └──────────┘   │ server │   └─────┬─────┘   │
//!                         │                 └────────┘         │         │
//!                         │         ┌─────────────┬────────────┤         │
//!                         │         ▼             ▼            ▼         │
//!                         │   ┌──────────┐  ┌──────────┐  ┌──────────┐   │
//!                         │   │preflight │  │ ServeDir │  │ upstream │───┼──▶ API
//!                         │   │  (CORS)  │  │ (static) │  │  client  │◀──┼───
//!                         │   └──────────┘  └──────────┘  └──────────┘   │
//!                         └──────────────────────────────────────────────┘
//! ```

use clap::Parser;

use cors_relay::config::{self, Overrides};
use cors_relay::lifecycle;
use cors_relay::observability::logging;

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(about = "Serve a front end and relay /api/* to a fixed upstream with CORS headers", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(default_value_t = config::schema::DEFAULT_PORT)]
    port: u16,

    /// INSECURE: skip upstream TLS certificate and hostname verification
    #[arg(long)]
    insecure_upstream: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config(Overrides {
        port: Some(cli.port),
        insecure_upstream: cli.insecure_upstream,
    })?;

    logging::init(&config.observability);

    tracing::info!(
        port = config.listener.port,
        upstream = %config.upstream.origin,
        base_path = %config.upstream.base_path,
        timeout_ms = config.upstream.timeout_ms,
        tls_verification = ?config.upstream.tls_verification,
        "cors-relay v0.1.0 starting"
    );

    if let Err(e) = lifecycle::run(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
