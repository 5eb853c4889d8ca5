//! Check command implementation.
//!
//! The `wisp check` command runs an arbitrary string through the mode
//! parser, reporting the canonical identifier or a rejection.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::state::Mode;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.args.value.parse::<Mode>() {
            Ok(mode) => {
                ui.success(&format!("{} ({})", mode, mode.description()));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn check_accepts_every_known_identifier() {
        for mode in Mode::ALL {
            let cmd = CheckCommand::new(CheckArgs {
                value: mode.as_str().to_string(),
            });
            let mut ui = MockUI::new();

            let result = cmd.execute(&mut ui).unwrap();

            assert!(result.success, "{} rejected", mode);
            assert!(ui.has_success(mode.as_str()));
        }
    }

    #[test]
    fn check_normalizes_case_and_whitespace() {
        let cmd = CheckCommand::new(CheckArgs {
            value: "  FireWorks ".to_string(),
        });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("fireworks"));
    }

    #[test]
    fn check_rejects_unknown_values() {
        let cmd = CheckCommand::new(CheckArgs {
            value: "plasma".to_string(),
        });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Unknown mode: plasma"));
    }
}
