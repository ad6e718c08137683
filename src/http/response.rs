//! Response building for the API relay.
//!
//! # Responsibilities
//! - Turn an upstream answer into a 200 with CORS headers
//! - Map relay failures to a 500 JSON envelope with CORS headers
//! - Reject unsupported methods under the forwarding prefix
//!
//! # Design Decisions
//! - Upstream body is passed through byte-for-byte
//! - Upstream status is never forwarded; success is always 200
//! - Every response built here carries the CORS triplet, errors included

use axum::body::Body;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::http::cors;
use crate::upstream::UpstreamResponse;

const APPLICATION_JSON: &str = "application/json";

/// 200 carrying the upstream body and content type (JSON if it sent none).
pub fn relayed(upstream: UpstreamResponse) -> Response {
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| HeaderValue::from_static(APPLICATION_JSON));

    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(CONTENT_TYPE, content_type);
    cors::apply(response.headers_mut());
    response
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // The envelope is two plain fields; serialisation cannot fail.
        let body = serde_json::to_vec(&self.envelope()).unwrap_or_default();

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        cors::apply(response.headers_mut());
        response
    }
}

/// 405 for non-GET methods under the forwarding prefix.
pub fn method_not_allowed() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static("GET, HEAD, OPTIONS"));
    cors::apply(response.headers_mut());
    response
}
