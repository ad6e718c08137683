//! Outbound header policy.
//!
//! # Responsibilities
//! - Decide which headers the relay sends upstream
//! - Keep inbound client headers (cookies, auth) away from the upstream
//!
//! # Design Decisions
//! - The policy is a trait object held in server state, so forwarding or
//!   merging variants can be added without touching the request path
//! - `ReplacePolicy` ignores the inbound headers completely

use axum::http::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use axum::http::{HeaderMap, HeaderValue};
use std::sync::Arc;

use crate::config::HeaderPolicyKind;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const BROWSER_ACCEPT: &str = "application/json, text/plain, */*";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en;q=0.8";

/// Derives the outbound header set from the inbound one.
pub trait HeaderPolicy: Send + Sync + std::fmt::Debug {
    fn outbound_headers(&self, inbound: &HeaderMap) -> HeaderMap;
}

/// Replace the inbound headers entirely with a fixed set.
#[derive(Debug, Clone)]
pub struct ReplacePolicy {
    headers: HeaderMap,
}

impl ReplacePolicy {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Desktop browser profile accepting JSON, Brazilian Portuguese first.
    pub fn browser() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        Self::new(headers)
    }
}

impl HeaderPolicy for ReplacePolicy {
    fn outbound_headers(&self, _inbound: &HeaderMap) -> HeaderMap {
        self.headers.clone()
    }
}

/// Build the policy selected in configuration.
pub fn policy_for(kind: HeaderPolicyKind) -> Arc<dyn HeaderPolicy> {
    match kind {
        HeaderPolicyKind::Replace => Arc::new(ReplacePolicy::browser()),
    }
}
