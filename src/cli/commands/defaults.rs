//! Defaults command implementation.
//!
//! The `wisp defaults` command prints the values every fresh session
//! starts from.

use serde::Serialize;

use crate::cli::args::DefaultsArgs;
use crate::error::{Result, WispError};
use crate::state::{ColorStore, Mode};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// JSON report of the startup defaults.
#[derive(Debug, Serialize)]
struct DefaultsReport {
    mode: Mode,
    color: &'static str,
}

/// The defaults command implementation.
pub struct DefaultsCommand {
    args: DefaultsArgs,
}

impl DefaultsCommand {
    /// Create a new defaults command.
    pub fn new(args: DefaultsArgs) -> Self {
        Self { args }
    }
}

impl Command for DefaultsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let report = DefaultsReport {
                mode: Mode::default(),
                color: ColorStore::DEFAULT,
            };

            let json =
                serde_json::to_string_pretty(&report).map_err(|e| WispError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Mode:  {}", Mode::default()));
        ui.message(&format!("Color: {}", ColorStore::DEFAULT));

        Ok(CommandResult::success())
    }
}
