//! Request classification.
//!
//! # Responsibilities
//! - Decide, per request, between preflight, API relay and static serving
//! - Hand the API relay its suffix
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Preflight is checked first and applies to every path
//! - Explicit `Route::Static` rather than a silent default

use axum::http::{Method, Uri};

use crate::routing::matcher::{Matcher, MethodMatcher, PathPrefixMatcher};

/// Literal path prefix that triggers the API relay.
pub const FORWARDING_PREFIX: &str = "/api/";

/// Outcome of classifying one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// CORS preflight; answered locally.
    Preflight,
    /// Relay to upstream with the given suffix (path remainder plus query).
    Api { suffix: &'a str },
    /// Under the forwarding prefix but with a method the relay does not support.
    ApiMethodNotAllowed,
    /// Everything else goes to the static file service.
    Static,
}

/// Router holding the compiled matchers.
#[derive(Debug)]
pub struct Router {
    preflight: MethodMatcher,
    api_prefix: PathPrefixMatcher,
}

impl Router {
    pub fn new() -> Self {
        Self {
            preflight: MethodMatcher::new(Method::OPTIONS),
            api_prefix: PathPrefixMatcher::new(FORWARDING_PREFIX),
        }
    }

    /// Classify a request by method and target.
    pub fn classify<'a>(&self, method: &Method, uri: &'a Uri) -> Route<'a> {
        if self.preflight.matches(method, uri) {
            return Route::Preflight;
        }

        if !self.api_prefix.matches(method, uri) {
            return Route::Static;
        }

        if *method != Method::GET && *method != Method::HEAD {
            return Route::ApiMethodNotAllowed;
        }

        match self.api_prefix.strip(uri) {
            Some(suffix) => Route::Api { suffix },
            None => Route::Static,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
