//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID + trace layers)
//!     → routing (classify by method and path)
//!         OPTIONS        → cors.rs (local preflight answer)
//!         GET /api/...   → proxy.rs → upstream → response.rs (CORS + body)
//!         anything else  → tower-http ServeDir
//!     → Send to client
//! ```

pub mod cors;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
