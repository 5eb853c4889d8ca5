//! Error types for Wisp operations.
//!
//! This module defines [`WispError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `WispError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `WispError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for Wisp operations.
#[derive(Debug, Error)]
pub enum WispError {
    /// A string did not name any known effect mode.
    #[error("Unknown mode: {value}")]
    UnknownMode { value: String },

    /// A prompt was requested but no way to answer it exists.
    #[error("No response available for prompt '{key}' in non-interactive mode")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Wisp operations.
pub type Result<T> = std::result::Result<T, WispError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_displays_value() {
        let err = WispError::UnknownMode {
            value: "sparkles".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unknown mode"));
        assert!(msg.contains("sparkles"));
    }

    #[test]
    fn prompt_unavailable_displays_key() {
        let err = WispError::PromptUnavailable {
            key: "pick_mode".into(),
        };
        assert!(err.to_string().contains("pick_mode"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "terminal missing");
        let err: WispError = io_err.into();
        assert!(matches!(err, WispError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(WispError::UnknownMode {
                value: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
