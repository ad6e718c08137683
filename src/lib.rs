//! Local CORS relay.
//!
//! Serves a front end from a local directory and relays `/api/*` to one
//! fixed upstream REST API, adding permissive CORS headers so the browser
//! sees both as the same origin.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod security;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
