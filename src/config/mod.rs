//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyConfig::default()
//!     → loader.rs (overlay CLI overrides, resolve static root once)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → copied into the HTTP server state at startup
//! ```
//!
//! # Design Decisions
//! - No configuration file; the CLI is the only input
//! - All fields have defaults so tests can start from `ProxyConfig::default()`
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, Overrides};
pub use schema::{
    HeaderPolicyKind, LifecycleConfig, ListenerConfig, ObservabilityConfig, ProxyConfig,
    StaticFilesConfig, TlsVerification, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
