//! API relay handler.

use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use std::time::Instant;

use crate::http::request::RequestIdExt;
use crate::http::response;
use crate::upstream::UpstreamClient;

/// Relay one `/api/` request to the upstream and translate the outcome.
///
/// Failures never escape: they become a 500 envelope for this request only.
pub async fn relay(upstream: &UpstreamClient, suffix: &str, parts: &Parts) -> Response {
    let start = Instant::now();
    let request_id = parts.request_id();
    let target_url = match upstream.target_url(suffix) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                suffix = %suffix,
                error = %e,
                "Refusing to relay request"
            );
            return e.into_response();
        }
    };

    tracing::info!(
        request_id = %request_id,
        target_url = %target_url,
        "Proxying request"
    );

    match upstream.fetch(&target_url, &parts.headers).await {
        Ok(upstream_response) => {
            tracing::info!(
                request_id = %request_id,
                bytes = upstream_response.body.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream response relayed"
            );
            response::relayed(upstream_response)
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                target_url = %target_url,
                error = %e,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream request failed"
            );
            e.into_response()
        }
    }
}
