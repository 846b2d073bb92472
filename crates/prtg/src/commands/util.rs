//! Shared helpers for command handlers.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::GlobalOpts;

/// Await `fut` behind a stderr spinner when stderr is a terminal.
pub async fn with_spinner<F: Future>(global: &GlobalOpts, message: &str, fut: F) -> F::Output {
    let bar = (!global.quiet && std::io::stderr().is_terminal()).then(|| {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_owned());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    });

    let out = fut.await;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    out
}

/// `--columns` as the borrowed slice the façade takes; empty means default.
pub fn column_refs(columns: &[String]) -> Option<Vec<&str>> {
    (!columns.is_empty()).then(|| columns.iter().map(String::as_str).collect())
}

/// Placeholder for empty cells in tables.
pub fn or_dash(s: &str) -> String {
    if s.is_empty() { "-".into() } else { s.to_owned() }
}
