//! Single-value stores for the current effect selection.
//!
//! This module provides [`ModeStore`] and [`ColorStore`], one mutable cell
//! each, and [`EffectContext`], the owner that wires both together. State
//! lives only as long as the context that holds it: there is no persistence,
//! so every process starts from the defaults.
//!
//! Access is synchronous and single-threaded. Writers hold `&mut`, so the
//! compiler enforces one mutator at a time and a read always returns the
//! most recent write.

use super::Mode;

/// Holds the currently selected effect mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeStore {
    mode: Mode,
}

impl ModeStore {
    /// Create a store holding the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected mode.
    pub fn current(&self) -> Mode {
        self.mode
    }

    /// Select a mode, replacing the previous selection unconditionally.
    pub fn set(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

/// Holds the current effect color.
///
/// The color is an opaque string handed to the renderer as-is. Any value is
/// accepted verbatim; nothing here parses, validates, or normalizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStore {
    color: String,
}

impl ColorStore {
    /// Color every fresh store starts with.
    pub const DEFAULT: &'static str = "hsla(210, 100%, 50%, 1)";

    /// Create a store holding the default color.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current color string.
    pub fn current(&self) -> &str {
        &self.color
    }

    /// Replace the color with any string, unconditionally.
    pub fn set(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

impl Default for ColorStore {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT.to_string(),
        }
    }
}

/// Owns the effect state for one consumer.
///
/// Callers construct a context explicitly and pass it where it is needed;
/// nothing in this crate holds a process-wide instance. The two stores are
/// independent fields with their own setters, so changing one never touches
/// the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectContext {
    /// The mode cell.
    pub mode: ModeStore,
    /// The color cell.
    pub color: ColorStore,
}

impl EffectContext {
    /// Create a context with both stores at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore both stores to their defaults.
    pub fn reset(&mut self) {
        self.mode = ModeStore::default();
        self.color = ColorStore::default();
    }
}
