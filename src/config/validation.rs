//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and clap handle syntactic)
//! - Validate value ranges (timeouts > 0, port non-zero)
//! - Check that the upstream origin is a bare http(s) origin
//! - Check that the static root is a readable directory
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must not be 0")]
    ZeroPort,

    #[error("upstream.origin '{origin}' is not a valid URL: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("upstream.origin '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("upstream.origin '{0}' must not carry a path, query or fragment")]
    OriginHasPath(String),

    #[error("upstream.base_path '{0}' must start and end with '/'")]
    InvalidBasePath(String),

    #[error("upstream.timeout_ms must be greater than 0")]
    ZeroTimeout,

    #[error("upstream.connect_timeout_ms must be greater than 0")]
    ZeroConnectTimeout,

    #[error("static_files.root '{0}' is not a directory")]
    StaticRootNotDirectory(String),
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    validate_origin(&config.upstream.origin, &mut errors);

    let base = &config.upstream.base_path;
    if !base.starts_with('/') || !base.ends_with('/') {
        errors.push(ValidationError::InvalidBasePath(base.clone()));
    }

    if config.upstream.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.upstream.connect_timeout_ms == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }

    if !config.static_files.root.is_dir() {
        errors.push(ValidationError::StaticRootNotDirectory(
            config.static_files.root.display().to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_origin(origin: &str, errors: &mut Vec<ValidationError>) {
    let url = match Url::parse(origin) {
        Ok(url) => url,
        Err(e) => {
            errors.push(ValidationError::InvalidOrigin {
                origin: origin.to_string(),
                reason: e.to_string(),
            });
            return;
        }
    };

    if !matches!(url.scheme(), "http" | "https") {
        errors.push(ValidationError::UnsupportedScheme(origin.to_string()));
    }
    // Url normalises "https://host" to path "/", so only a trailing slash is tolerated.
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() || origin.ends_with('/') {
        errors.push(ValidationError::OriginHasPath(origin.to_string()));
    }
}
