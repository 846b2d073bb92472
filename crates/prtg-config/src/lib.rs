//! Shared configuration for prtg tools.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `prtg_core::ClientConfig`. The CLI layers its
//! flag overrides on top of what this crate resolves.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use prtg_core::{ClientConfig, Credentials, TlsVerification};

/// Keyring service name under which secrets are stored.
pub const KEYRING_SERVICE: &str = "prtg";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "PRTG_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// The profile to use when none is named explicitly.
    pub fn default_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Accept self-signed certificates unless a profile says otherwise.
    #[serde(default = "default_insecure")]
    pub insecure: bool,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: default_insecure(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_insecure() -> bool {
    true
}
fn default_timeout_ms() -> i64 {
    10_000
}

/// A named PRTG server profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Server base URL (e.g., "https://prtg.example.com").
    pub server: String,

    pub username: Option<String>,

    /// Password (plaintext, prefer keyring or env var).
    pub password: Option<String>,

    /// Passhash from the PRTG account settings page (plaintext).
    pub passhash: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override the default `insecure` setting.
    pub insecure: Option<bool>,

    /// Override the default timeout.
    pub timeout_ms: Option<i64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path. `PRTG_CONFIG` wins, then the platform
/// config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "prtg", "prtg").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("prtg");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path`, layered as defaults < TOML < `PRTG_*` env.
///
/// Nested keys use a double underscore: `PRTG_DEFAULTS__TIMEOUT_MS=5000`.
/// A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PRTG_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Which of the two PRTG secrets a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Password,
    PassHash,
}

impl SecretKind {
    /// Keyring account name for this secret in `profile`.
    pub fn keyring_account(self, profile: &str) -> String {
        match self {
            Self::Password => format!("{profile}/password"),
            Self::PassHash => format!("{profile}/passhash"),
        }
    }

    fn credentials(self, username: String, secret: SecretString) -> Credentials {
        match self {
            Self::Password => Credentials::password(username, secret),
            Self::PassHash => Credentials::passhash(username, secret),
        }
    }
}

/// Store a secret for `profile_name` in the system keyring.
pub fn store_secret(
    profile_name: &str,
    kind: SecretKind,
    secret: &str,
) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &kind.keyring_account(profile_name))?;
    entry.set_password(secret)?;
    Ok(())
}

fn keyring_lookup(account: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, account)
        .and_then(|entry| entry.get_password())
        .ok()
}

/// Resolve username and secret for a profile.
///
/// Username: the profile, then `PRTG_USERNAME`. Secret, first hit wins:
/// 1. the env var named by `password_env`
/// 2. `PRTG_PASSHASH`, then `PRTG_PASSWORD`
/// 3. the keyring (`<profile>/passhash`, then `<profile>/password`)
/// 4. plaintext `passhash`, then `password` in the profile
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<Credentials, ConfigError> {
    resolve_credentials_with(
        profile,
        profile_name,
        |name| std::env::var(name).ok(),
        keyring_lookup,
    )
}

/// [`resolve_credentials`] with the environment and keyring supplied by
/// the caller.
pub fn resolve_credentials_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl Fn(&str) -> Option<String>,
) -> Result<Credentials, ConfigError> {
    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .or_else(|| env("PRTG_USERNAME"))
        .ok_or_else(no_credentials)?;

    let (kind, secret, source) = find_secret(profile, profile_name, &env, &keyring)
        .ok_or_else(no_credentials)?;
    debug!(profile = profile_name, source, ?kind, "resolved credentials");

    Ok(kind.credentials(username, SecretString::from(secret)))
}

fn find_secret(
    profile: &Profile,
    profile_name: &str,
    env: &impl Fn(&str) -> Option<String>,
    keyring: &impl Fn(&str) -> Option<String>,
) -> Option<(SecretKind, String, &'static str)> {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);

    // 1. Profile's password_env
    if let Some(pw) = profile
        .password_env
        .as_deref()
        .and_then(env)
        .and_then(non_empty)
    {
        return Some((SecretKind::Password, pw, "password_env"));
    }

    // 2. Well-known env vars
    if let Some(hash) = env("PRTG_PASSHASH").and_then(non_empty) {
        return Some((SecretKind::PassHash, hash, "env"));
    }
    if let Some(pw) = env("PRTG_PASSWORD").and_then(non_empty) {
        return Some((SecretKind::Password, pw, "env"));
    }

    // 3. System keyring
    for kind in [SecretKind::PassHash, SecretKind::Password] {
        if let Some(secret) = keyring(&kind.keyring_account(profile_name)).and_then(non_empty) {
            return Some((kind, secret, "keyring"));
        }
    }

    // 4. Plaintext in config
    if let Some(hash) = profile.passhash.clone().and_then(non_empty) {
        return Some((SecretKind::PassHash, hash, "config"));
    }
    profile
        .password
        .clone()
        .and_then(non_empty)
        .map(|pw| (SecretKind::Password, pw, "config"))
}

// ── Translation ─────────────────────────────────────────────────────

/// Parse a profile's server URL.
pub fn parse_server(server: &str) -> Result<url::Url, ConfigError> {
    if server.is_empty() {
        return Err(ConfigError::Validation {
            field: "server".into(),
            reason: "no server URL configured".into(),
        });
    }
    server.parse().map_err(|e| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL '{server}': {e}"),
    })
}

/// TLS mode for a profile: a CA bundle wins, otherwise `insecure`
/// (falling back to the global default) picks between accepting any
/// certificate and the system roots.
pub fn tls_for(profile: &Profile, defaults: &Defaults) -> TlsVerification {
    if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `ClientConfig` from a profile, with no flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let url = parse_server(&profile.server)?;
    let credentials = resolve_credentials(profile, profile_name)?;

    Ok(ClientConfig::new(url, credentials)
        .with_tls(tls_for(profile, defaults))
        .with_timeout_millis(profile.timeout_ms.unwrap_or(defaults.timeout_ms)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use prtg_core::Secret;
    use secrecy::ExposeSecret;

    use super::*;

    fn profile() -> Profile {
        Profile {
            server: "https://prtg.example.com".into(),
            username: Some("prtgadmin".into()),
            password: Some("from-config".into()),
            ..Profile::default()
        }
    }

    fn resolve(
        profile: &Profile,
        env: &[(&str, &str)],
        keyring: &[(&str, &str)],
    ) -> Result<Credentials, ConfigError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        let keyring: HashMap<String, String> = keyring
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        resolve_credentials_with(
            profile,
            "lab",
            |name| env.get(name).cloned(),
            |account| keyring.get(account).cloned(),
        )
    }

    fn secret_of(creds: &Credentials) -> (&'static str, String) {
        match creds.secret() {
            Secret::Password(s) => ("password", s.expose_secret().to_owned()),
            Secret::PassHash(s) => ("passhash", s.expose_secret().to_owned()),
        }
    }

    #[test]
    fn plaintext_is_the_last_resort() {
        let creds = resolve(&profile(), &[], &[]).unwrap();
        assert_eq!(creds.username(), "prtgadmin");
        assert_eq!(secret_of(&creds), ("password", "from-config".into()));
    }

    #[test]
    fn plaintext_passhash_beats_plaintext_password() {
        let p = Profile {
            passhash: Some("123456".into()),
            ..profile()
        };
        let creds = resolve(&p, &[], &[]).unwrap();
        assert_eq!(secret_of(&creds), ("passhash", "123456".into()));
    }

    #[test]
    fn keyring_beats_plaintext() {
        let creds = resolve(&profile(), &[], &[("lab/password", "from-keyring")]).unwrap();
        assert_eq!(secret_of(&creds), ("password", "from-keyring".into()));

        let creds = resolve(
            &profile(),
            &[],
            &[("lab/password", "pw"), ("lab/passhash", "hash")],
        )
        .unwrap();
        assert_eq!(secret_of(&creds), ("passhash", "hash".into()));
    }

    #[test]
    fn well_known_env_beats_keyring() {
        let creds = resolve(
            &profile(),
            &[("PRTG_PASSWORD", "from-env")],
            &[("lab/passhash", "hash")],
        )
        .unwrap();
        assert_eq!(secret_of(&creds), ("password", "from-env".into()));
    }

    #[test]
    fn password_env_wins() {
        let p = Profile {
            password_env: Some("LAB_PRTG_PW".into()),
            ..profile()
        };
        let creds = resolve(
            &p,
            &[("LAB_PRTG_PW", "named"), ("PRTG_PASSHASH", "hash")],
            &[],
        )
        .unwrap();
        assert_eq!(secret_of(&creds), ("password", "named".into()));
    }

    #[test]
    fn empty_values_are_skipped() {
        let creds = resolve(&profile(), &[("PRTG_PASSHASH", "")], &[]).unwrap();
        assert_eq!(secret_of(&creds), ("password", "from-config".into()));
    }

    #[test]
    fn username_falls_back_to_env() {
        let p = Profile {
            username: None,
            ..profile()
        };
        let creds = resolve(&p, &[("PRTG_USERNAME", "ops")], &[]).unwrap();
        assert_eq!(creds.username(), "ops");
    }

    #[test]
    fn missing_secret_is_reported_per_profile() {
        let p = Profile {
            password: None,
            ..profile()
        };
        let err = resolve(&p, &[], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { ref profile } if profile == "lab"));
    }

    #[test]
    fn ca_cert_overrides_insecure() {
        let defaults = Defaults::default();
        let p = Profile {
            ca_cert: Some("/etc/prtg/ca.pem".into()),
            insecure: Some(true),
            ..profile()
        };
        assert_eq!(
            tls_for(&p, &defaults),
            TlsVerification::CustomCa("/etc/prtg/ca.pem".into())
        );
        let strict = Profile {
            insecure: Some(false),
            ..profile()
        };
        assert_eq!(tls_for(&strict, &defaults), TlsVerification::SystemDefaults);
        assert_eq!(
            tls_for(&profile(), &defaults),
            TlsVerification::DangerAcceptInvalid
        );
    }

    #[test]
    fn empty_server_is_rejected() {
        assert!(matches!(
            parse_server(""),
            Err(ConfigError::Validation { ref field, .. }) if field == "server"
        ));
        assert!(parse_server("not a url").is_err());
    }

    #[test]
    fn keyring_accounts_are_namespaced_by_profile() {
        assert_eq!(SecretKind::PassHash.keyring_account("home"), "home/passhash");
        assert_eq!(SecretKind::Password.keyring_account("home"), "home/password");
    }
}
