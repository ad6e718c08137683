//! Configuration assembly from defaults and command-line overrides.

use std::path::Path;
use thiserror::Error;

use crate::config::schema::{ProxyConfig, TlsVerification};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve static root '{path}': {source}")]
    StaticRoot {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values the command line may override.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Port to bind; `None` keeps the default.
    pub port: Option<u16>,
    /// Opt in to unverified upstream TLS.
    pub insecure_upstream: bool,
}

/// Build, resolve and validate the configuration.
///
/// The static root is canonicalised once here so that later changes of the
/// working directory cannot move it.
pub fn load_config(overrides: Overrides) -> Result<ProxyConfig, ConfigError> {
    let mut config = ProxyConfig::default();

    if let Some(port) = overrides.port {
        config.listener.port = port;
    }
    if overrides.insecure_upstream {
        config.upstream.tls_verification = TlsVerification::Insecure;
    }

    config.static_files.root = resolve_root(&config.static_files.root)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn resolve_root(root: &Path) -> Result<std::path::PathBuf, ConfigError> {
    root.canonicalize().map_err(|source| ConfigError::StaticRoot {
        path: root.display().to_string(),
        source,
    })
}
