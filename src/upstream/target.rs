//! Target URL derivation.
//!
//! The suffix is appended to origin + base path without escaping, then parsed
//! once. The parsed URL is what gets logged and what goes on the wire.
//! Dot segments (`.`, `..`, and their `%2e` spellings) are refused up front:
//! URL parsing would collapse them and the upstream would receive a different
//! path than the one requested, possibly outside the base path.

use url::Url;

use crate::config::UpstreamConfig;
use crate::error::ProxyError;

/// Fixed upstream origin and base path.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    prefix: String,
}

impl UpstreamTarget {
    pub fn new(origin: &str, base_path: &str) -> Self {
        Self {
            prefix: format!("{origin}{base_path}"),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(&config.origin, &config.base_path)
    }

    /// origin + base path + suffix, as plain concatenation.
    pub fn join(&self, suffix: &str) -> String {
        let mut url = String::with_capacity(self.prefix.len() + suffix.len());
        url.push_str(&self.prefix);
        url.push_str(suffix);
        url
    }

    /// The URL the upstream request is sent to.
    pub fn resolve(&self, suffix: &str) -> Result<Url, ProxyError> {
        if let Some(segment) = find_dot_segment(suffix) {
            return Err(ProxyError::DotSegment(segment.to_string()));
        }

        let raw = self.join(suffix);
        Url::parse(&raw)
            .map_err(|e| ProxyError::Unexpected(format!("invalid target URL '{raw}': {e}")))
    }
}

/// First path segment that URL parsing would treat as `.` or `..`.
///
/// `\` counts as a separator because http(s) URLs treat it like `/`.
fn find_dot_segment(suffix: &str) -> Option<&str> {
    let path = suffix.split(['?', '#']).next().unwrap_or("");
    path.split(['/', '\\']).find(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    })
}
