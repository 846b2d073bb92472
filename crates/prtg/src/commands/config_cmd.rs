//! Config subcommand handlers.

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile, SecretKind};
use crate::error::CliError;
use crate::output;

const MASK: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Copy of `cfg` with every stored secret replaced by a mask.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for p in cfg.profiles.values_mut() {
        if p.password.is_some() {
            p.password = Some(MASK.into());
        }
        if p.passhash.is_some() {
            p.passhash = Some(MASK.into());
        }
    }
    cfg
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_secret(label: &str) -> Result<String, CliError> {
    let secret = rpassword::prompt_password(format!("{label}: ")).map_err(prompt_err)?;
    if secret.is_empty() {
        return Err(CliError::Validation {
            field: "secret".into(),
            reason: format!("{label} cannot be empty"),
        });
    }
    Ok(secret)
}

fn store_in_keyring(profile: &str, kind: SecretKind, secret: &str) -> Result<(), CliError> {
    prtg_config::store_secret(profile, kind, secret).map_err(|e| CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to store secret in keyring: {e}"),
    })
}

fn kind_label(kind: SecretKind) -> &'static str {
    match kind {
        SecretKind::Password => "Password",
        SecretKind::PassHash => "Passhash",
    }
}

/// Offer the keyring or plaintext config for a secret.
///
/// Returns `Some(secret)` if the user chose plaintext, `None` if stored in keyring.
fn prompt_keyring_storage(
    profile: &str,
    kind: SecretKind,
    secret: &str,
) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt(format!("Where to store the {}?", kind_label(kind).to_lowercase()))
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if selection == 0 {
        store_in_keyring(profile, kind, secret)?;
        eprintln!("   ✓ {} stored in system keyring", kind_label(kind));
        Ok(None)
    } else {
        Ok(Some(secret.to_owned()))
    }
}

fn save(cfg: &Config) -> Result<std::path::PathBuf, CliError> {
    Ok(prtg_config::save_config(cfg)?)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(),

        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config_or_default());
            let out = match global.output {
                OutputFormat::Table => toml::to_string_pretty(&cfg).map_err(|e| {
                    CliError::Config {
                        message: e.to_string(),
                    }
                })?,
                format => output::render_single(
                    format,
                    &cfg,
                    |_| String::new(),
                    |c| c.default_profile_name().to_owned(),
                )?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: prtg config init");
                return Ok(());
            }
            let default = cfg.default_profile_name();
            let out = cfg
                .profiles
                .keys()
                .map(|name| {
                    let marker = if name == default { " *" } else { "" };
                    format!("{name}{marker}")
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            save(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        ConfigCommand::SetPassword { hash } => {
            let cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            if !cfg.profiles.contains_key(&profile_name) {
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: config::available_profiles(&cfg),
                });
            }

            let kind = if hash {
                SecretKind::PassHash
            } else {
                SecretKind::Password
            };
            let secret = prompt_secret(kind_label(kind))?;
            store_in_keyring(&profile_name, kind, &secret)?;
            eprintln!(
                "✓ {} stored in system keyring for profile '{profile_name}'",
                kind_label(kind)
            );
            Ok(())
        }
    }
}

/// Interactive wizard: writes a fresh config with one profile.
fn init() -> Result<(), CliError> {
    let config_path = config::config_path();
    eprintln!("PRTG CLI configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    // 1. Profile name
    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(prompt_err)?;

    // 2. Server URL
    let server: String = Input::new()
        .with_prompt("PRTG server URL")
        .default("https://prtg.example.com".into())
        .interact_text()
        .map_err(prompt_err)?;
    prtg_config::parse_server(&server)?;

    // 3. Username
    let username: String = Input::new()
        .with_prompt("Username")
        .interact_text()
        .map_err(prompt_err)?;
    if username.is_empty() {
        return Err(CliError::Validation {
            field: "username".into(),
            reason: "username cannot be empty".into(),
        });
    }

    // 4. Secret
    let kind = match Select::new()
        .with_prompt("Authenticate with")
        .items(&["Passhash (recommended)", "Password"])
        .default(0)
        .interact()
        .map_err(prompt_err)?
    {
        0 => SecretKind::PassHash,
        _ => SecretKind::Password,
    };
    let secret = prompt_secret(kind_label(kind))?;
    let plaintext = prompt_keyring_storage(&profile_name, kind, &secret)?;

    let (password, passhash) = match kind {
        SecretKind::Password => (plaintext, None),
        SecretKind::PassHash => (None, plaintext),
    };
    let profile = Profile {
        server,
        username: Some(username),
        password,
        passhash,
        ..Profile::default()
    };

    // Keep other profiles if a config already exists
    let mut cfg = config::load_config_or_default();
    cfg.profiles.insert(profile_name.clone(), profile);
    cfg.default_profile = Some(profile_name.clone());

    let written = save(&cfg)?;
    eprintln!("\n✓ Configuration written to {}", written.display());
    eprintln!("  Active profile: {profile_name}");
    eprintln!("\n  Test it: prtg version");
    Ok(())
}
