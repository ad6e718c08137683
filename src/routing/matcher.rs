//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method (preflight detection)
//! - Match the literal forwarding prefix and split off the suffix
//!
//! # Design Decisions
//! - Path matching is case-sensitive and literal (no normalisation)
//! - The suffix keeps the query string; upstream needs it verbatim
//! - No regex to guarantee O(n) matching

use axum::http::{Method, Uri};

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, method: &Method, uri: &Uri) -> bool;
}

/// Matches a single HTTP method.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    method: Method,
}

impl MethodMatcher {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, method: &Method, _uri: &Uri) -> bool {
        *method == self.method
    }
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Return everything after the prefix, query string included.
    pub fn strip<'a>(&self, uri: &'a Uri) -> Option<&'a str> {
        let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        target.strip_prefix(self.prefix.as_str())
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, _method: &Method, uri: &Uri) -> bool {
        uri.path().starts_with(&self.prefix)
    }
}
