//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use wisp::ui::create_ui;
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false);
//! ui.show_header("Effect Console");
//! ui.success("Mode set to matrix");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, WispTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// Commands talk to the user only through this seam, so the same flow runs
/// against a terminal, plain output, or the test mock.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and return the user's answer.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Whether prompts can actually be asked.
    fn is_interactive(&self) -> bool;
}

/// A question to put to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Stable key identifying the prompt (overrides and mocks look it up).
    pub key: String,
    /// The question text.
    pub question: String,
    /// How the answer is collected.
    pub prompt_type: PromptType,
    /// Answer used when the user just presses enter.
    pub default: Option<String>,
}

/// How a prompt collects its answer.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
    /// Pick one entry from a list.
    Select { options: Vec<PromptOption> },
}

/// One entry in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Text shown in the menu.
    pub label: String,
    /// Value handed back when this entry is picked.
    pub value: String,
}

/// A prompt's answer.
#[derive(Debug, Clone)]
pub enum PromptResult {
    /// Answer from a confirm.
    Bool(bool),
    /// Answer from an input or select.
    String(String),
}

impl PromptResult {
    /// Get as string, regardless of the underlying variant.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
