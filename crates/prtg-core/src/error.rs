// ── Core error types ──
//
// User-facing errors from prtg-core. Every Query Façade operation returns
// `CoreError`; the `From<prtg_api::Error>` impl folds fetch failures into
// the same small set of kinds so callers can branch on `kind()`.

use prtg_api::ContentKind;
use thiserror::Error;

/// Broad classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Network failure, timeout, or a non-2xx status other than 401/404.
    Transport,
    /// The server rejected the credentials (HTTP 401).
    Auth,
    /// The body could not be decoded as the declared content kind.
    Decode,
    /// Caller input rejected before any request was sent.
    Validation,
    /// A list or historic query came back with zero rows.
    EmptyResult,
    /// The server answered HTTP 404.
    NotFound,
    /// The client configuration itself is unusable.
    Config,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport errors ─────────────────────────────────────────────
    #[error("Cannot reach PRTG server at {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("PRTG server answered HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Not found: {path}")]
    NotFound { path: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid {field}: {reason}")]
    ValidationFailed { field: &'static str, reason: String },

    #[error("No data found for {query}")]
    EmptyResult { query: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Timeout { .. } | Self::Http { .. } => {
                ErrorKind::Transport
            }
            Self::AuthenticationFailed { .. } => ErrorKind::Auth,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Decode(_) => ErrorKind::Decode,
            Self::ValidationFailed { .. } => ErrorKind::Validation,
            Self::EmptyResult { .. } => ErrorKind::EmptyResult,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<prtg_api::Error> for CoreError {
    fn from(err: prtg_api::Error) -> Self {
        match err {
            prtg_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            prtg_api::Error::Transport(e) => CoreError::Transport {
                url: e
                    .url()
                    .map(|u| format!("{}://{}", u.scheme(), u.authority()))
                    .unwrap_or_else(|| "<unknown>".into()),
                reason: e.to_string(),
            },
            prtg_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            prtg_api::Error::UnsupportedScheme(scheme) => CoreError::Config {
                message: format!("Unsupported URL scheme '{scheme}' (expected http or https)"),
            },
            prtg_api::Error::Timeout { timeout_ms } => CoreError::Timeout { timeout_ms },
            prtg_api::Error::Tls(msg) => CoreError::Transport {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            prtg_api::Error::NotFound { path } => CoreError::NotFound { path },
            prtg_api::Error::Http { status, message } => CoreError::Http { status, message },
        }
    }
}

// ── Decode errors ────────────────────────────────────────────────────

/// A response body did not match the shape expected for its content kind.
///
/// The underlying parser error is kept intact as the source.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("response body is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A scalar was present but could not be read as the expected type.
    #[error("field `{field}` has invalid value {value:?}: {reason}")]
    Field {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The server never produces this shape in this format.
    #[error("{shape} responses are not available as {kind}")]
    UnsupportedFormat {
        shape: &'static str,
        kind: ContentKind,
    },
}

impl DecodeError {
    pub(crate) fn field(field: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Field {
            field,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}
