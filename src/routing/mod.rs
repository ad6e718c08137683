//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path + query)
//!     → router.rs (classification)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: Preflight | Api { suffix } | ApiMethodNotAllowed | Static
//! ```
//!
//! # Design Decisions
//! - One fixed routing table, built at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always yields the same route
//! - Preflight wins over every other route

pub mod matcher;
pub mod router;

pub use router::{Route, Router, FORWARDING_PREFIX};
