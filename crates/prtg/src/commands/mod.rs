//! Command dispatch: bridges CLI args -> `Prtg` queries -> output formatting.

pub mod config_cmd;
pub mod history;
pub mod lists;
pub mod sensor;
pub mod tree;
pub mod util;

use prtg_core::{Prtg, TableContent};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, prtg: &Prtg, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Version => sensor::version(prtg, global).await,
        Command::Sensor(args) => sensor::handle(prtg, args, global).await,
        Command::Sensors(args) => lists::handle(prtg, TableContent::Sensors, args, global).await,
        Command::Devices(args) => lists::handle(prtg, TableContent::Devices, args, global).await,
        Command::Groups(args) => lists::handle(prtg, TableContent::Groups, args, global).await,
        Command::History(args) => history::handle(prtg, args, global).await,
        Command::Tree(args) => tree::handle(prtg, args, global).await,
        // Handled before a client is built
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "does not query a server".into(),
        }),
    }
}
