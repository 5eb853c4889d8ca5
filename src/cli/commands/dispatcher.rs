//! Command dispatching.
//!
//! The pieces every subcommand shares:
//! - [`Command`] trait each subcommand implements
//! - [`CommandResult`] for uniform outcome reporting
//! - [`CommandDispatcher`] routing parsed args to implementations

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait implemented by every subcommand.
pub trait Command {
    /// Run the command, talking to the user through `ui`.
    ///
    /// Returns a [`CommandResult`] carrying the outcome and exit code;
    /// `Err` is reserved for failures the command cannot report itself.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Outcome of a command run.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Process exit code (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Route the parsed CLI to its command implementation and run it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Console(args)) => {
                let cmd = super::console::ConsoleCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Modes(args)) => {
                let cmd = super::modes::ModesCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Defaults(args)) => {
                let cmd = super::defaults::DefaultsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to the console with default args
                let cmd =
                    super::console::ConsoleCommand::new(crate::cli::args::ConsoleArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ModesArgs;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatch_routes_modes() {
        let cli = Cli::parse_from(["wisp", "modes"]);
        let dispatcher = CommandDispatcher::new();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("bubbles"));
    }

    #[test]
    fn dispatch_without_subcommand_opens_console() {
        let cli = Cli::parse_from(["wisp"]);
        let dispatcher = CommandDispatcher::new();
        let mut ui = MockUI::new();

        // MockUI is non-interactive, so the console prints a snapshot and returns
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("bubbles"));
    }

    #[test]
    fn modes_args_default() {
        let args = ModesArgs::default();
        assert!(!args.json);
    }
}
