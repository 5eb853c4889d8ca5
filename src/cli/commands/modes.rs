//! Modes command implementation.
//!
//! The `wisp modes` command lists the closed set of effect modes.

use serde::Serialize;

use crate::cli::args::ModesArgs;
use crate::error::{Result, WispError};
use crate::state::Mode;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One row in the JSON mode listing.
#[derive(Debug, Serialize)]
struct ModeEntry {
    name: &'static str,
    description: &'static str,
    default: bool,
}

/// The modes command implementation.
pub struct ModesCommand {
    args: ModesArgs,
}

impl ModesCommand {
    /// Create a new modes command.
    pub fn new(args: ModesArgs) -> Self {
        Self { args }
    }
}

impl Command for ModesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let entries: Vec<ModeEntry> = Mode::ALL
                .iter()
                .map(|m| ModeEntry {
                    name: m.as_str(),
                    description: m.description(),
                    default: *m == Mode::default(),
                })
                .collect();

            let json =
                serde_json::to_string_pretty(&entries).map_err(|e| WispError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("{} available modes:\n", Mode::ALL.len()));
        for mode in Mode::ALL {
            let marker = if mode == Mode::default() {
                " (default)"
            } else {
                ""
            };
            ui.message(&format!(
                "  {:<13} {}{}",
                mode.as_str(),
                mode.description(),
                marker
            ));
        }

        Ok(CommandResult::success())
    }
}
