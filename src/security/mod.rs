//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound request to upstream:
//!     → headers.rs (header policy: which headers leave the relay)
//!     → tls.rs (certificate verification policy for the client)
//! ```
//!
//! # Design Decisions
//! - Client headers never reach the upstream under the default policy
//! - Certificate verification is on unless explicitly disabled

pub mod headers;
pub mod tls;

pub use headers::{policy_for, HeaderPolicy, ReplacePolicy};
