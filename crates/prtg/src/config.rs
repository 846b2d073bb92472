//! CLI configuration: a thin wrapper around `prtg_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides (--server,
//! --username, --password, --passhash, --insecure, --timeout).

use secrecy::SecretString;

use prtg_core::{ClientConfig, Credentials, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use prtg_config::{Config, Profile, SecretKind, config_path, load_config_or_default};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.default_profile_name().to_owned())
}

/// Comma-separated profile names, for error help.
pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Build a `ClientConfig` from the config file, the active profile, and
/// flag overrides. Flags win over everything the profile resolves.
pub fn resolve_client_config(
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(p) => p.clone(),
        // Everything may come from flags / env
        None if global.server.is_some() => Profile::default(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(cfg),
            });
        }
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    // 1. Server (flag > env > profile)
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    let url = prtg_config::parse_server(&profile.server)?;

    // 2. Credentials
    if let Some(ref user) = global.username {
        profile.username = Some(user.clone());
    }
    let credentials = match flag_credentials(global, &profile, &profile_name)? {
        Some(creds) => creds,
        None => prtg_config::resolve_credentials(&profile, &profile_name)?,
    };

    // 3. TLS verification
    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        prtg_config::tls_for(&profile, &cfg.defaults)
    };

    // 4. Timeout (flag > profile > defaults)
    let timeout_ms = global
        .timeout
        .or(profile.timeout_ms)
        .unwrap_or(cfg.defaults.timeout_ms);

    Ok(ClientConfig::new(url, credentials)
        .with_tls(tls)
        .with_timeout_millis(timeout_ms))
}

/// Credentials given directly via --password / --passhash.
fn flag_credentials(
    global: &GlobalOpts,
    profile: &Profile,
    profile_name: &str,
) -> Result<Option<Credentials>, CliError> {
    let (kind, secret) = match (&global.passhash, &global.password) {
        (Some(hash), _) => (SecretKind::PassHash, hash.clone()),
        (None, Some(pw)) => (SecretKind::Password, pw.clone()),
        (None, None) => return Ok(None),
    };
    let Some(username) = profile.username.clone() else {
        return Err(CliError::NoCredentials {
            profile: profile_name.into(),
        });
    };
    let secret = SecretString::from(secret);
    Ok(Some(match kind {
        SecretKind::PassHash => Credentials::passhash(username, secret),
        SecretKind::Password => Credentials::password(username, secret),
    }))
}
