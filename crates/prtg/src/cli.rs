//! Clap derive structures for the `prtg` CLI.
//!
//! Defines the command tree, global flags, and shared value parsers.
//! Also compiled by `build.rs` for man pages, so it only depends on clap,
//! clap_complete and chrono.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// prtg -- query a PRTG Network Monitor server from the command line
#[derive(Debug, Parser)]
#[command(
    name = "prtg",
    version,
    about = "Query PRTG Network Monitor from the command line",
    long_about = "Read sensor details, object lists, historic channel data and the\n\
        sensor tree from a PRTG server through its HTTP API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "PRTG_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "PRTG_SERVER", global = true)]
    pub server: Option<String>,

    /// PRTG user name (overrides profile)
    #[arg(long, short = 'u', env = "PRTG_USERNAME", global = true)]
    pub username: Option<String>,

    /// Account password
    #[arg(
        long,
        env = "PRTG_PASSWORD",
        global = true,
        hide_env_values = true,
        conflicts_with = "passhash"
    )]
    pub password: Option<String>,

    /// Account passhash (see "My Account" in the PRTG web interface)
    #[arg(long, env = "PRTG_PASSHASH", global = true, hide_env_values = true)]
    pub passhash: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PRTG_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PRTG_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in milliseconds (1-30000, otherwise 10000)
    #[arg(long, env = "PRTG_TIMEOUT", global = true, allow_hyphen_values = true)]
    pub timeout: Option<i64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the server's PRTG version
    Version,

    /// Show details of one sensor
    #[command(alias = "s")]
    Sensor(SensorArgs),

    /// List sensors below an object
    Sensors(ListArgs),

    /// List devices below an object
    #[command(alias = "dev")]
    Devices(ListArgs),

    /// List groups below an object
    Groups(ListArgs),

    /// Query historic channel data of a sensor
    #[command(alias = "hist")]
    History(HistoryArgs),

    /// Show the object tree
    Tree(TreeArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Query arguments ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SensorArgs {
    /// Sensor object id
    pub id: i64,

    /// Ask the XML endpoint instead of JSON
    #[arg(long)]
    pub xml: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Parent object id (0 for the whole installation)
    #[arg(default_value = "0")]
    pub id: i64,

    /// Columns to request, comma separated (default: a per-list set)
    #[arg(long, short = 'c', value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Sensor object id
    pub id: i64,

    /// Window start (RFC 3339, "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD", UTC)
    #[arg(long, value_parser = parse_time)]
    pub start: DateTime<Utc>,

    /// Window end, at most 31 days after start (default: now)
    #[arg(long, value_parser = parse_time)]
    pub end: Option<DateTime<Utc>>,

    /// Averaging interval in seconds (0 = raw values)
    #[arg(long, default_value = "0")]
    pub avg: i64,

    /// Ask the XML endpoint instead of JSON
    #[arg(long)]
    pub xml: bool,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Root object id (0 for the whole installation)
    #[arg(default_value = "0")]
    pub id: i64,

    /// One line per sensor with its group ladder instead of the tree
    #[arg(long)]
    pub flat: bool,
}

/// Parse a UTC timestamp in one of the accepted spellings.
pub fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d-%H-%M-%S"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(t.and_utc());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!(
        "expected RFC 3339, \"YYYY-MM-DD HH:MM:SS\" or \"YYYY-MM-DD\", got '{s}'"
    ))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display the current configuration (secrets masked)
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles (the default is marked with *)
    Profiles,

    /// Make a profile the default
    Use {
        /// Profile name
        name: String,
    },

    /// Store a password or passhash for the active profile in the system keyring
    SetPassword {
        /// Store a passhash instead of a password
        #[arg(long)]
        hash: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
