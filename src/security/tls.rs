//! Outbound TLS verification policy.

use reqwest::ClientBuilder;

use crate::config::TlsVerification;

/// Apply the verification policy to a client under construction.
///
/// `Insecure` turns off both certificate-chain and hostname checks. It is
/// only reachable through the explicit `--insecure-upstream` flag.
pub fn apply(builder: ClientBuilder, verification: TlsVerification) -> ClientBuilder {
    match verification {
        TlsVerification::Verify => builder,
        TlsVerification::Insecure => {
            tracing::warn!("Upstream TLS certificate and hostname verification DISABLED");
            builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true)
        }
    }
}
