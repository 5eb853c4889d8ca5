//! Console command implementation.
//!
//! The `wisp console` command owns the effect state for one session and
//! drives it through prompts: pick a mode from the closed set, enter a
//! color (any string, taken verbatim), or restore the defaults. Without a
//! terminal it prints the current state and exits.

use crate::cli::args::ConsoleArgs;
use crate::error::Result;
use crate::state::{EffectContext, Mode};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The console command implementation.
pub struct ConsoleCommand {
    args: ConsoleArgs,
}

impl ConsoleCommand {
    /// Create a new console command.
    pub fn new(args: ConsoleArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConsoleArgs {
        &self.args
    }

    /// Build the session state, applying flag/env overrides.
    fn build_state(&self) -> EffectContext {
        let mut state = EffectContext::new();

        if let Some(mode) = self.args.mode {
            state.mode.set(mode);
        }
        if let Some(color) = &self.args.color {
            state.color.set(color.clone());
        }

        state
    }
}

impl Command for ConsoleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut state = self.build_state();

        ui.show_header("Effect Console");
        show_state(ui, &state);

        if self.args.non_interactive || !ui.is_interactive() {
            return Ok(CommandResult::success());
        }

        run_loop(&mut state, ui)?;

        Ok(CommandResult::success())
    }
}

/// Print the current selection as key-value lines.
fn show_state(ui: &mut dyn UserInterface, state: &EffectContext) {
    let mode = state.mode.current();
    ui.message(&format!("Mode:  {} ({})", mode, mode.description()));
    ui.message(&format!("Color: {}", state.color.current()));
}

/// Drive the prompt loop until the user quits.
fn run_loop(state: &mut EffectContext, ui: &mut dyn UserInterface) -> Result<()> {
    loop {
        let action = ui.prompt(&action_prompt())?;

        match action.as_string().as_str() {
            "mode" => change_mode(state, ui)?,
            "color" => change_color(state, ui)?,
            "reset" => {
                state.reset();
                tracing::debug!("state reset to defaults");
                ui.success("Defaults restored");
                show_state(ui, state);
            }
            _ => break,
        }
    }

    Ok(())
}

fn action_prompt() -> Prompt {
    Prompt {
        key: "action".to_string(),
        question: "What next?".to_string(),
        prompt_type: PromptType::Select {
            options: vec![
                PromptOption {
                    label: "Change mode".to_string(),
                    value: "mode".to_string(),
                },
                PromptOption {
                    label: "Change color".to_string(),
                    value: "color".to_string(),
                },
                PromptOption {
                    label: "Restore defaults".to_string(),
                    value: "reset".to_string(),
                },
                PromptOption {
                    label: "Quit".to_string(),
                    value: "quit".to_string(),
                },
            ],
        },
        default: None,
    }
}

fn change_mode(state: &mut EffectContext, ui: &mut dyn UserInterface) -> Result<()> {
    let options: Vec<PromptOption> = Mode::ALL
        .iter()
        .map(|m| PromptOption {
            label: format!("{:<13} {}", m.as_str(), m.description()),
            value: m.as_str().to_string(),
        })
        .collect();

    let answer = ui.prompt(&Prompt {
        key: "pick_mode".to_string(),
        question: "Select a mode".to_string(),
        prompt_type: PromptType::Select { options },
        default: Some(state.mode.current().as_str().to_string()),
    })?;

    // Select answers are identifier strings, but overrides can hand back anything
    match answer.as_string().parse::<Mode>() {
        Ok(mode) => {
            state.mode.set(mode);
            tracing::debug!("mode changed to {}", mode);
            ui.success(&format!("Mode set to {}", mode));
        }
        Err(e) => ui.error(&e.to_string()),
    }

    Ok(())
}

fn change_color(state: &mut EffectContext, ui: &mut dyn UserInterface) -> Result<()> {
    let answer = ui.prompt(&Prompt {
        key: "pick_color".to_string(),
        question: "New color".to_string(),
        prompt_type: PromptType::Input,
        default: Some(state.color.current().to_string()),
    })?;

    let color = answer.as_string();
    state.color.set(color.clone());
    tracing::debug!("color changed to {}", color);
    ui.success(&format!("Color set to {}", color));

    Ok(())
}
