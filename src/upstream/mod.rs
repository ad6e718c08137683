//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! suffix from router
//!     → target.rs (origin + base path + suffix)
//!     → client.rs (GET with policy headers, bounded by timeout)
//!     → UpstreamResponse | ProxyError
//! ```

pub mod client;
pub mod target;

pub use client::{UpstreamClient, UpstreamResponse};
pub use target::UpstreamTarget;
