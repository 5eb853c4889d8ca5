//! The closed set of visual-effect modes.
//!
//! This module defines [`Mode`], the enumeration of every effect the
//! renderer knows how to draw. The set is fixed at compile time: adding or
//! removing a variant is a source change, and every match over [`Mode`] is
//! checked exhaustively. Strings from the outside world (CLI arguments,
//! environment variables, prompt answers) enter through [`Mode::from_str`],
//! which is the only place an unknown identifier can be rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WispError;

/// A visual-effect mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rising soap bubbles.
    #[default]
    Bubbles,
    /// Exploding particle bursts.
    Fireworks,
    /// Twinkling linked stars.
    Constellation,
    /// Falling glyph rain.
    Matrix,
    /// Drifting connected mesh.
    Net,
    /// Rendering disabled.
    Off,
}

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Mode; 6] = [
        Mode::Bubbles,
        Mode::Fireworks,
        Mode::Constellation,
        Mode::Matrix,
        Mode::Net,
        Mode::Off,
    ];

    /// The canonical identifier used in arguments, env vars, and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Bubbles => "bubbles",
            Mode::Fireworks => "fireworks",
            Mode::Constellation => "constellation",
            Mode::Matrix => "matrix",
            Mode::Net => "net",
            Mode::Off => "off",
        }
    }

    /// Short human-readable label for pickers and listings.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Bubbles => "Rising soap bubbles",
            Mode::Fireworks => "Exploding particle bursts",
            Mode::Constellation => "Twinkling linked stars",
            Mode::Matrix => "Falling glyph rain",
            Mode::Net => "Drifting connected mesh",
            Mode::Off => "Effects disabled",
        }
    }

    /// True when rendering is disabled.
    pub fn is_off(&self) -> bool {
        matches!(self, Mode::Off)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = WispError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bubbles" => Ok(Self::Bubbles),
            "fireworks" => Ok(Self::Fireworks),
            "constellation" => Ok(Self::Constellation),
            "matrix" => Ok(Self::Matrix),
            "net" => Ok(Self::Net),
            "off" => Ok(Self::Off),
            _ => Err(WispError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}
