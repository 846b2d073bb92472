// ── Runtime connection configuration ──
//
// These types describe *how* to reach a PRTG server. They carry credential
// data and connection tuning, but never touch disk or the environment.
// The CLI (or any other caller) constructs a `ClientConfig` and hands it in.

use std::time::Duration;

use prtg_api::{Credentials, TlsMode, TransportConfig};
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification. PRTG installs ship with a self-signed certificate.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for talking to a single PRTG server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `https://prtg.example.com`.
    pub url: Url,
    /// Username plus either a password or a passhash.
    pub credentials: Credentials,
    pub tls: TlsVerification,
    /// Request timeout. Use [`ClientConfig::with_timeout_millis`] to apply
    /// the server-side clamp to a raw value.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: Url, credentials: Credentials) -> Self {
        Self {
            url,
            credentials,
            tls: TlsVerification::default(),
            timeout: TransportConfig::default().timeout,
        }
    }

    /// Set the timeout from milliseconds; values outside `1..=30000` fall
    /// back to the 10 second default.
    pub fn with_timeout_millis(mut self, ms: i64) -> Self {
        self.timeout = prtg_api::timeout_from_millis(ms);
        self
    }

    pub fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new(
            Url::parse("https://prtg.example.com").unwrap(),
            Credentials::password("user", SecretString::from("pass")),
        )
    }

    #[test]
    fn defaults_accept_self_signed_and_ten_seconds() {
        let c = config();
        assert_eq!(c.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(c.timeout, Duration::from_secs(10));
    }

    #[test]
    fn timeout_is_clamped() {
        assert_eq!(
            config().with_timeout_millis(2_000).timeout,
            Duration::from_secs(2)
        );
        assert_eq!(
            config().with_timeout_millis(40_000).timeout,
            Duration::from_secs(10)
        );
        assert_eq!(
            config().with_timeout_millis(-1).timeout,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn tls_maps_onto_transport() {
        let t = config().with_tls(TlsVerification::SystemDefaults).transport();
        assert!(matches!(t.tls, TlsMode::System));
    }
}
