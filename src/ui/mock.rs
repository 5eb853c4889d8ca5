//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait, records every interaction,
//! and answers prompts from scripted responses, so command flows can be
//! tested without a terminal.
//!
//! # Example
//!
//! ```
//! use wisp::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("pick_color", "#00ffaa");
//!
//! // Use ui in code under test...
//! ui.show_header("Effect Console");
//! ui.success("Color set to #00ffaa");
//!
//! // Assert on captured interactions
//! assert!(ui.headers().contains(&"Effect Console".to_string()));
//! assert!(ui.has_success("#00ffaa"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Prompt answers resolve in order: queued responses for the key, then the
/// single configured response, then the mock-wide default, then the prompt's
/// own default. A fully unconfigured prompt yields an empty answer instead
/// of an error, so loops under test wind down instead of aborting.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
    default_prompt_response: Option<String>,
}

/// Shape a scripted answer into the result type the prompt expects.
fn scripted(response: &str, prompt_type: &PromptType) -> PromptResult {
    match prompt_type {
        PromptType::Confirm => {
            PromptResult::Bool(matches!(response, "true" | "yes" | "y" | "1"))
        }
        _ => PromptResult::String(response.to_string()),
    }
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the answer returned every time `key` is prompted.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Configure several prompt answers at once.
    pub fn with_prompt_responses(mut self, responses: HashMap<String, String>) -> Self {
        self.prompt_responses = responses;
        self
    }

    /// Queue answers for a key prompted more than once.
    ///
    /// Answers are consumed in order; once drained, resolution continues
    /// with `set_prompt_response` and the defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Configure a catch-all answer for keys with no explicit script.
    pub fn set_default_prompt_response(&mut self, response: &str) {
        self.default_prompt_response = Some(response.to_string());
    }

    /// Set whether this mock reports itself as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Keys of every prompt shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// True if any captured message contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// True if any captured success contains `msg`.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// True if any captured warning contains `msg`.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// True if any captured error contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Drop everything captured so far; scripted answers survive.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.prompts_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(scripted(&response, &prompt.prompt_type));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(scripted(response, &prompt.prompt_type));
        }

        if let Some(response) = &self.default_prompt_response {
            return Ok(scripted(response, &prompt.prompt_type));
        }

        if let Some(default) = &prompt.default {
            return Ok(scripted(default, &prompt.prompt_type));
        }

        // Nothing scripted at all: answer with the type's empty value
        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(false),
            _ => PromptResult::String(String::new()),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
