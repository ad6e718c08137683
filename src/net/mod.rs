//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → listener.rs (bind configured host:port)
//!     → Hand the bound socket to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Binding happens before the server is built so a taken port fails fast
//! - Per-connection concurrency is provided by the HTTP server's task per connection

pub mod listener;

pub use listener::{bind, ListenerError};
