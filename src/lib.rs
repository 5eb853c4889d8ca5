//! Wisp - Interactive mode and color selection for ambient visual effects.
//!
//! Wisp holds the two pieces of state an ambient effect renderer needs, the
//! active effect [`state::Mode`] and its base color, and wraps them in an
//! interactive console for inspecting and changing both.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`state`] - Effect mode and color stores
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use wisp::state::{EffectContext, Mode};
//!
//! // Each context owns its own stores; reads are plain field access.
//! let mut state = EffectContext::new();
//! assert_eq!(state.mode.current(), Mode::Bubbles);
//!
//! state.mode.set("matrix".parse().unwrap());
//! state.color.set("#00ff41");
//! assert_eq!(state.mode.current(), Mode::Matrix);
//! assert_eq!(state.color.current(), "#00ff41");
//! ```
//!
//! For the interactive console, see the integration tests.

pub mod cli;
pub mod error;
pub mod state;
pub mod ui;

pub use error::{Result, WispError};
