//! Bounded outbound GET to the upstream API.
//!
//! # Responsibilities
//! - Build the reqwest client once (TLS policy, connect timeout, no pooling)
//! - Issue one GET per relayed request with the policy's header set
//! - Enforce the deadline over send + body read
//! - Classify failures into `ProxyError`
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities; a timeout is distinct from other errors
//! - Idle connections are not kept; each request opens and closes its own
//! - Non-2xx upstream statuses are failures, never passed through

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue};
use hyper::ext::ReasonPhrase;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::ProxyError;
use crate::security::{self, HeaderPolicy};
use crate::upstream::target::UpstreamTarget;

/// Successful upstream answer, reduced to what the relay forwards.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Upstream `Content-Type`, if it sent one.
    pub content_type: Option<HeaderValue>,
    /// Raw body bytes.
    pub body: Bytes,
}

/// Client for the single fixed upstream.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    target: UpstreamTarget,
    policy: Arc<dyn HeaderPolicy>,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build the client from configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        Self::with_policy(config, security::policy_for(config.header_policy))
    }

    /// Build the client with an explicit header policy.
    pub fn with_policy(
        config: &UpstreamConfig,
        policy: Arc<dyn HeaderPolicy>,
    ) -> Result<Self, reqwest::Error> {
        let builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .pool_max_idle_per_host(0);
        let http = security::tls::apply(builder, config.tls_verification).build()?;

        Ok(Self {
            http,
            target: UpstreamTarget::from_config(config),
            policy,
            timeout: config.timeout(),
        })
    }

    /// URL a suffix is sent to; refuses dot segments.
    pub fn target_url(&self, suffix: &str) -> Result<Url, ProxyError> {
        self.target.resolve(suffix)
    }

    /// Fetch `url` with headers derived from `inbound` by the header policy.
    pub async fn fetch(
        &self,
        url: &Url,
        inbound: &HeaderMap,
    ) -> Result<UpstreamResponse, ProxyError> {
        let headers = self.policy.outbound_headers(inbound);
        let timeout = self.timeout;
        let classify = move |e: reqwest::Error| ProxyError::from_reqwest(e, timeout);

        let call = async {
            let response = self
                .http
                .get(url.clone())
                .headers(headers)
                .send()
                .await
                .map_err(classify)?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProxyError::from_status(status, reason_phrase(&response)));
            }

            let content_type = response.headers().get(CONTENT_TYPE).cloned();
            let body = response.bytes().await.map_err(classify)?;

            Ok(UpstreamResponse { content_type, body })
        };

        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::Timeout(timeout)),
        }
    }
}

/// Reason phrase as sent by the upstream. hyper only records it when it
/// differs from the canonical phrase for the status.
fn reason_phrase(response: &reqwest::Response) -> Option<&str> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
}
