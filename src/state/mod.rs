//! State management for the current effect selection.
//!
//! This module provides the in-memory stores holding the selected mode and
//! color, and the context object that owns them for the life of a session.

pub mod mode;
pub mod store;

pub use mode::Mode;
pub use store::{ColorStore, EffectContext, ModeStore};
