//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and a distinct process exit code per kind.

use miette::Diagnostic;
use thiserror::Error;

use prtg_config::ConfigError;
use prtg_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const EMPTY: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const DECODE: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach PRTG at {url}")]
    #[diagnostic(
        code(prtg::connection_failed),
        help(
            "Check that the server is running and reachable.\n\
             Reason: {reason}\n\
             Self-signed certificate? Try --insecure (-k)."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("PRTG answered HTTP {status}: {message}")]
    #[diagnostic(code(prtg::http))]
    Http { status: u16, message: String },

    #[error("Request timed out after {timeout_ms} ms")]
    #[diagnostic(
        code(prtg::timeout),
        help("Raise the timeout with --timeout (up to 30000 ms).")
    )]
    Timeout { timeout_ms: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(prtg::auth_failed),
        help(
            "Verify the user name and password or passhash.\n\
             Store a new secret with: prtg config set-password"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(prtg::no_credentials),
        help(
            "Configure credentials with: prtg config init\n\
             Or pass --username with --password / --passhash\n\
             (PRTG_USERNAME, PRTG_PASSWORD, PRTG_PASSHASH)."
        )
    )]
    NoCredentials { profile: String },

    // ── Results ──────────────────────────────────────────────────────
    #[error("Not found: {path}")]
    #[diagnostic(
        code(prtg::not_found),
        help("Check the object id; `prtg tree` lists what the account can see.")
    )]
    NotFound { path: String },

    #[error("No results for {query}")]
    #[diagnostic(code(prtg::empty))]
    EmptyResult { query: String },

    #[error("Could not decode the server response")]
    #[diagnostic(code(prtg::decode), help("{message}"))]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(prtg::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(prtg::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: prtg config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(prtg::no_config),
        help(
            "Create one with: prtg config init\n\
             Expected at: {path}\n\
             Or pass --server and credentials on the command line."
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(prtg::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Http { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::EmptyResult { .. } => exit_code::EMPTY,
            Self::Decode { .. } => exit_code::DECODE,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            Self::NoConfig { .. }
            | Self::Config { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::Yaml(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            CoreError::Http { status, message } => Self::Http { status, message },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::NotFound { path } => Self::NotFound { path },
            CoreError::EmptyResult { query } => Self::EmptyResult { query },
            CoreError::ValidationFailed { field, reason } => Self::Validation {
                field: field.into(),
                reason,
            },
            CoreError::Config { message } => Self::Config { message },
            CoreError::Decode(e) => Self::Decode {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}
