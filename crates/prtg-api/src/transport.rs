// Shared transport configuration for building reqwest::Client instances.
//
// TLS and timeout settings live here so every PrtgClient is built the same
// way, whether it comes from a profile, CLI flags, or a test.

use std::path::PathBuf;
use std::time::Duration;

/// Timeout applied when the caller asks for something outside the valid range.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Largest timeout a caller may request.
pub const MAX_TIMEOUT_MS: u64 = 30_000;

/// Clamp a caller-supplied timeout in milliseconds.
///
/// Values in `1..=30000` are kept; zero, negative and oversized values fall
/// back to [`DEFAULT_TIMEOUT_MS`].
pub fn timeout_from_millis(ms: i64) -> Duration {
    match u64::try_from(ms) {
        Ok(ms) if (1..=MAX_TIMEOUT_MS).contains(&ms) => Duration::from_millis(ms),
        _ => Duration::from_millis(DEFAULT_TIMEOUT_MS),
    }
}

/// TLS verification mode (api-level mirror of core's TlsVerification).
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed PRTG servers).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl TransportConfig {
    /// Set the request timeout from a raw millisecond value, clamped by
    /// [`timeout_from_millis`].
    pub fn with_timeout_millis(mut self, ms: i64) -> Self {
        self.timeout = timeout_from_millis(ms);
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("prtg-api/", env!("CARGO_PKG_VERSION")));

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path).map_err(|e| {
                    crate::error::Error::Tls(format!("failed to read CA cert: {e}"))
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| crate::error::Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}
