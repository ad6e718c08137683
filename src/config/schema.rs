//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! Every section has defaults so that `ProxyConfig::default()` is a working
//! configuration; the CLI only overlays the port and the TLS opt-out.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Default port the relay binds when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8080;

/// Fixed upstream origin the `/api/` prefix is relayed to.
pub const DEFAULT_UPSTREAM_ORIGIN: &str = "https://servicos.dpf.gov.br";

/// Fixed base path prepended to every forwarded suffix.
pub const DEFAULT_UPSTREAM_BASE_PATH: &str = "/agenda-publico-rest/api/";

/// Root configuration for the relay.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream API settings.
    pub upstream: UpstreamConfig,

    /// Static file serving settings.
    pub static_files: StaticFilesConfig,

    /// Startup/shutdown settings.
    pub lifecycle: LifecycleConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Interface to bind on.
    pub host: IpAddr,

    /// TCP port to bind on.
    pub port: u16,
}

impl ListenerConfig {
    /// Socket address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Whether the outbound TLS connection verifies the upstream certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVerification {
    /// Full certificate chain and hostname verification.
    #[default]
    Verify,
    /// INSECURE: accept any certificate for any hostname.
    Insecure,
}

/// How the outbound header set is derived from the inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicyKind {
    /// Discard inbound headers and send a fixed browser-like set.
    #[default]
    Replace,
}

/// Upstream API configuration.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Scheme and authority of the upstream (e.g., "https://example.org").
    pub origin: String,

    /// Path prefix on the upstream; must start and end with '/'.
    pub base_path: String,

    /// Bound on the whole outbound call (connect, send, read body) in milliseconds.
    pub timeout_ms: u64,

    /// Bound on connection establishment in milliseconds.
    pub connect_timeout_ms: u64,

    /// Certificate verification policy for the outbound connection.
    pub tls_verification: TlsVerification,

    /// Outbound header policy.
    pub header_policy: HeaderPolicyKind,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_UPSTREAM_ORIGIN.to_string(),
            base_path: DEFAULT_UPSTREAM_BASE_PATH.to_string(),
            timeout_ms: 10_000,
            connect_timeout_ms: 10_000,
            tls_verification: TlsVerification::Verify,
            header_policy: HeaderPolicyKind::Replace,
        }
    }
}

/// Static file serving configuration.
#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    /// Directory served for every path outside the `/api/` prefix.
    pub root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Lifecycle configuration.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Time in-flight requests get to finish after a shutdown signal.
    pub grace_period_secs: u64,
}

impl LifecycleConfig {
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_secs)
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
