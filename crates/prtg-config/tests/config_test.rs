#![allow(clippy::unwrap_used)]
// Loading and saving config files on disk.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use prtg_config::{Config, ConfigError, Profile, load_config_from, save_config_to};

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.default_profile_name(), "default");
    assert_eq!(cfg.defaults.output, "table");
    assert_eq!(cfg.defaults.timeout_ms, 10_000);
    assert!(cfg.defaults.insecure);
    assert!(cfg.profiles.is_empty());
}

#[test]
fn profiles_and_defaults_are_read() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
default_profile = "lab"

[defaults]
output = "json"
timeout_ms = 5000

[profiles.lab]
server = "https://prtg.lab.local"
username = "prtgadmin"
passhash = "1234567890"
insecure = false
ca_cert = "/etc/ssl/lab.pem"

[profiles.prod]
server = "https://prtg.example.com"
username = "monitor"
password_env = "PROD_PRTG_PASSWORD"
timeout_ms = 20000
"#,
    );

    let cfg = load_config_from(&path).unwrap();
    assert_eq!(cfg.default_profile_name(), "lab");
    assert_eq!(cfg.defaults.output, "json");
    assert_eq!(cfg.defaults.timeout_ms, 5000);
    // Omitted keys keep their defaults.
    assert!(cfg.defaults.insecure);

    let lab = &cfg.profiles["lab"];
    assert_eq!(lab.server, "https://prtg.lab.local");
    assert_eq!(lab.passhash.as_deref(), Some("1234567890"));
    assert_eq!(lab.insecure, Some(false));
    assert_eq!(lab.ca_cert, Some(PathBuf::from("/etc/ssl/lab.pem")));

    let prod = &cfg.profiles["prod"];
    assert_eq!(prod.password_env.as_deref(), Some("PROD_PRTG_PASSWORD"));
    assert_eq!(prod.timeout_ms, Some(20000));
    assert_eq!(prod.password, None);
}

#[test]
fn saved_config_loads_back_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.default_profile = Some("home".into());
    cfg.profiles.insert(
        "home".into(),
        Profile {
            server: "https://prtg.home.arpa".into(),
            username: Some("admin".into()),
            timeout_ms: Some(15000),
            ..Profile::default()
        },
    );

    save_config_to(&cfg, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[profiles.home]"), "unexpected TOML:\n{written}");

    assert_eq!(load_config_from(&path).unwrap(), cfg);
}

#[test]
fn malformed_toml_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[profiles.lab\nserver = ");
    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Figment(_)), "unexpected error: {err:?}");
}
